//! Projection output structures

use serde::{Deserialize, Serialize};

/// Result of projecting one certificate to maturity
///
/// All dollar figures are rounded to 2 decimal places. `monthly_compounding`
/// holds the balance recorded at the end of each month, in order, with exactly
/// one entry per month of the term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Total dividends earned over the term
    pub interest_earned: f64,

    /// Balance at the end of the term
    pub maturity_value: f64,

    /// End-of-month balances, one per month of the term
    pub monthly_compounding: Vec<f64>,
}

impl ProjectionResult {
    /// Number of months projected
    pub fn term_months(&self) -> u32 {
        self.monthly_compounding.len() as u32
    }

    /// Balance after a given month (1-based), if within the term
    pub fn balance_after_month(&self, month: u32) -> Option<f64> {
        if month == 0 {
            return None;
        }
        self.monthly_compounding.get(month as usize - 1).copied()
    }
}
