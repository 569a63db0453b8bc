//! Institution comparison built on the projection engine
//!
//! Projects every quoted rate with a shared principal and term, then ranks
//! institutions by interest earned. The entry collection keeps its insertion
//! order; that order is the tie-break for best/worst, and display ranking is
//! produced separately without disturbing it.

use crate::catalog::RateOffer;
use crate::projection::{project_certificate, ProjectionResult};
use serde::{Deserialize, Serialize};

/// One institution's quoted certificate rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateQuote {
    /// Unique quote identifier
    pub id: String,

    /// Institution name shown alongside the results
    pub institution: String,

    /// Nominal annual dividend rate, as a percentage
    pub rate: f64,

    /// Annual percentage yield, as a percentage (drives the projection)
    pub apy: f64,
}

impl RateQuote {
    pub fn new(id: &str, institution: &str, rate: f64, apy: f64) -> Self {
        Self {
            id: id.to_string(),
            institution: institution.to_string(),
            rate,
            apy,
        }
    }

    /// Quote a catalog offer under the issuing institution's name
    pub fn from_offer(offer: &RateOffer, institution: &str) -> Self {
        Self {
            id: offer.id.clone(),
            institution: format!("{} - {}", institution, offer.name),
            rate: offer.rate,
            apy: offer.apy,
        }
    }
}

/// A quote paired with its projection at the comparison's shared inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub quote: RateQuote,
    pub result: ProjectionResult,
}

/// Earnings comparison across institutions at a shared principal and term
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    principal: f64,
    term_months: u32,
    entries: Vec<ComparisonEntry>,
}

impl Comparison {
    /// Project every quote at the shared principal and term
    pub fn run(principal: f64, term_months: u32, quotes: &[RateQuote]) -> Self {
        let entries = quotes
            .iter()
            .map(|quote| ComparisonEntry {
                quote: quote.clone(),
                result: project_certificate(principal, quote.apy, term_months),
            })
            .collect();

        Self {
            principal,
            term_months,
            entries,
        }
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn term_months(&self) -> u32 {
        self.term_months
    }

    /// Entries in insertion order (the canonical order for tie-breaking)
    pub fn entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    /// Entry with the highest interest earned; earliest entry wins ties
    pub fn best(&self) -> Option<&ComparisonEntry> {
        self.entries.iter().reduce(|best, entry| {
            if entry.result.interest_earned > best.result.interest_earned {
                entry
            } else {
                best
            }
        })
    }

    /// Entry with the lowest interest earned; earliest entry wins ties
    pub fn worst(&self) -> Option<&ComparisonEntry> {
        self.entries.iter().reduce(|worst, entry| {
            if entry.result.interest_earned < worst.result.interest_earned {
                entry
            } else {
                worst
            }
        })
    }

    /// Interest-earned gap between the best and worst entries, >= 0
    pub fn difference(&self) -> f64 {
        match (self.best(), self.worst()) {
            (Some(best), Some(worst)) => best.result.interest_earned - worst.result.interest_earned,
            _ => 0.0,
        }
    }

    /// Earnings advantage of best over worst, as a percentage of the worst's
    /// interest earned. `None` when the worst entry earned nothing (the ratio
    /// is undefined, and callers suppress it rather than divide by zero).
    pub fn advantage_pct(&self) -> Option<f64> {
        let worst = self.worst()?.result.interest_earned;
        if worst == 0.0 {
            return None;
        }
        Some(self.difference() / worst * 100.0)
    }

    /// Entries sorted by interest earned, highest first. Presentation only;
    /// the canonical insertion order in [`Self::entries`] is untouched.
    pub fn ranked(&self) -> Vec<&ComparisonEntry> {
        let mut ranked: Vec<&ComparisonEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.result.interest_earned.total_cmp(&a.result.interest_earned));
        ranked
    }
}
