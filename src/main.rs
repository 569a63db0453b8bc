//! Certificate Calculator CLI
//!
//! Projects a single share certificate's earnings from either a manually
//! entered APY or an offer from the rate catalog.

use anyhow::{bail, Context, Result};
use certificate_calculator::catalog::{builtin_offers, load_offers_or};
use certificate_calculator::projection::project_certificate;
use clap::Parser;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "certificate_calculator")]
#[command(about = "Project share certificate earnings with monthly compounding")]
struct Cli {
    /// Initial deposit amount in dollars
    #[arg(long, default_value_t = 10_000.0)]
    principal: f64,

    /// Annual percentage yield, e.g. 4.25 (mutually exclusive with --offer)
    #[arg(long, conflicts_with = "offer")]
    apy: Option<f64>,

    /// Certificate term in months (required with --apy)
    #[arg(long)]
    term: Option<u32>,

    /// Project a catalog offer by id instead of a manual APY
    #[arg(long)]
    offer: Option<String>,

    /// Path to the rate catalog CSV (falls back to built-in offers)
    #[arg(long, default_value = "rates.csv")]
    catalog: PathBuf,

    /// Print the result as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Write the monthly trajectory to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (apy, term_months, label) = match (&cli.offer, cli.apy) {
        (Some(offer_id), _) => {
            let offers = load_offers_or(&cli.catalog, builtin_offers());
            let offer = offers
                .iter()
                .find(|o| &o.id == offer_id)
                .with_context(|| format!("offer '{}' not found in catalog", offer_id))?;

            if !offer.accepts_deposit(cli.principal) {
                bail!(
                    "deposit of ${:.2} is below the ${:.2} minimum for {}",
                    cli.principal,
                    offer.minimum_deposit,
                    offer.name
                );
            }

            let term = cli.term.unwrap_or(offer.term_months);
            (offer.apy, term, offer.name.clone())
        }
        (None, Some(apy)) => {
            let term = cli
                .term
                .context("--term is required when projecting a manual --apy")?;
            (apy, term, format!("{:.2}% APY certificate", apy))
        }
        (None, None) => bail!("provide either --apy with --term, or --offer <id>"),
    };

    let result = project_certificate(cli.principal, apy, term_months);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", label);
        println!("  Deposit:  ${:.2}", cli.principal);
        println!("  APY:      {:.2}%", apy);
        println!("  Term:     {} months\n", term_months);

        println!("{:>5} {:>14}", "Month", "Balance");
        println!("{}", "-".repeat(20));
        for (i, balance) in result.monthly_compounding.iter().take(24).enumerate() {
            println!("{:>5} {:>14.2}", i + 1, balance);
        }
        if result.monthly_compounding.len() > 24 {
            println!("... ({} more months)", result.monthly_compounding.len() - 24);
        }

        println!("\nSummary:");
        println!("  Interest Earned: ${:.2}", result.interest_earned);
        println!("  Maturity Value:  ${:.2}", result.maturity_value);
    }

    if let Some(csv_path) = &cli.csv {
        write_trajectory_csv(csv_path, &result.monthly_compounding)
            .with_context(|| format!("failed to write {}", csv_path.display()))?;
        println!("\nMonthly trajectory written to: {}", csv_path.display());
    }

    Ok(())
}

fn write_trajectory_csv(path: &PathBuf, trajectory: &[f64]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Month,Balance")?;
    for (i, balance) in trajectory.iter().enumerate() {
        writeln!(file, "{},{:.2}", i + 1, balance)?;
    }
    Ok(())
}
