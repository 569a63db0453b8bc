//! Compare catalog offers at a shared deposit and term
//!
//! Usage: cargo run --bin compare_offers -- --principal 10000 --term 12

use anyhow::{bail, Context, Result};
use certificate_calculator::catalog::{builtin_offers, load_offers_or};
use certificate_calculator::comparison::{Comparison, RateQuote};
use clap::Parser;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "compare_offers")]
#[command(about = "Rank rate catalog offers by projected earnings")]
struct Cli {
    /// Shared deposit amount for every offer
    #[arg(long, default_value_t = 10_000.0)]
    principal: f64,

    /// Shared term in months for every offer
    #[arg(long, default_value_t = 12)]
    term: u32,

    /// Path to the rate catalog CSV (falls back to built-in offers)
    #[arg(long, default_value = "rates.csv")]
    catalog: PathBuf,

    /// Only compare offers whose own term matches --term
    #[arg(long)]
    matching_term_only: bool,

    /// Skip offers whose minimum deposit exceeds the principal
    #[arg(long)]
    eligible_only: bool,

    /// Write per-offer monthly trajectories to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let offers = load_offers_or(&cli.catalog, builtin_offers());

    let quotes: Vec<RateQuote> = offers
        .iter()
        .filter(|o| !cli.matching_term_only || o.term_months == cli.term)
        .filter(|o| !cli.eligible_only || o.accepts_deposit(cli.principal))
        .map(|o| RateQuote::new(&o.id, &o.name, o.rate, o.apy))
        .collect();

    if quotes.is_empty() {
        bail!("no offers to compare after filtering");
    }

    let comparison = Comparison::run(cli.principal, cli.term, &quotes);

    println!("Offer comparison: ${:.2} over {} months", cli.principal, cli.term);
    println!("{}", "=".repeat(78));
    println!(
        "{:<32} {:>8} {:>8} {:>12} {:>14}",
        "Offer", "Rate", "APY", "Interest", "Maturity"
    );
    println!("{}", "-".repeat(78));

    for entry in comparison.ranked() {
        println!(
            "{:<32} {:>7.2}% {:>7.2}% {:>12.2} {:>14.2}",
            entry.quote.institution,
            entry.quote.rate,
            entry.quote.apy,
            entry.result.interest_earned,
            entry.result.maturity_value
        );
    }

    if let (Some(best), Some(worst)) = (comparison.best(), comparison.worst()) {
        println!("\nKey insights:");
        println!(
            "  {} would earn ${:.2} more than {}",
            best.quote.institution,
            comparison.difference(),
            worst.quote.institution
        );
        if let Some(advantage) = comparison.advantage_pct() {
            println!("  Earnings advantage over the lowest offer: {:.1}%", advantage);
        }
    }

    if let Some(csv_path) = &cli.csv {
        write_trajectories_csv(csv_path, &comparison)
            .with_context(|| format!("failed to write {}", csv_path.display()))?;
        println!("\nMonthly trajectories written to: {}", csv_path.display());
    }

    Ok(())
}

fn write_trajectories_csv(path: &PathBuf, comparison: &Comparison) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "OfferId,Offer,Month,Balance")?;
    for entry in comparison.entries() {
        for (i, balance) in entry.result.monthly_compounding.iter().enumerate() {
            writeln!(
                file,
                "{},{},{},{:.2}",
                entry.quote.id,
                entry.quote.institution,
                i + 1,
                balance
            )?;
        }
    }

    Ok(())
}
