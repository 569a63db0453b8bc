//! Rate offer data structures matching the published rate sheet format

use serde::{Deserialize, Serialize};

/// A single certificate offering from the rate catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateOffer {
    /// Unique offer identifier
    pub id: String,

    /// Display name (e.g. "18 Month Certificate")
    pub name: String,

    /// Certificate term in whole months
    pub term_months: u32,

    /// Minimum opening deposit in dollars
    pub minimum_deposit: f64,

    /// Nominal annual dividend rate, as a percentage
    pub rate: f64,

    /// Annual percentage yield, as a percentage
    pub apy: f64,

    /// Whether this is a specialty certificate (prize-linked, add-on, etc.)
    pub is_specialty: bool,

    /// Marketing description of specialty features
    #[serde(default)]
    pub special_features: Option<String>,

    /// When the backing store row was last touched (ISO 8601 text)
    #[serde(default)]
    pub last_updated: Option<String>,
}

impl RateOffer {
    /// Create a standard (non-specialty) offer
    pub fn standard(id: &str, name: &str, term_months: u32, minimum_deposit: f64, rate: f64, apy: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            term_months,
            minimum_deposit,
            rate,
            apy,
            is_specialty: false,
            special_features: None,
            last_updated: None,
        }
    }

    /// Create a specialty offer with a feature description
    pub fn specialty(
        id: &str,
        name: &str,
        term_months: u32,
        minimum_deposit: f64,
        rate: f64,
        apy: f64,
        features: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            term_months,
            minimum_deposit,
            rate,
            apy,
            is_specialty: true,
            special_features: Some(features.to_string()),
            last_updated: None,
        }
    }

    /// Whether a deposit satisfies this offer's minimum.
    ///
    /// The projection engine does not validate deposits; callers gate on this
    /// before projecting.
    pub fn accepts_deposit(&self, principal: f64) -> bool {
        principal >= self.minimum_deposit
    }
}

/// Built-in fallback offer list, used when the catalog backing store cannot
/// be read.
///
/// Returned as a plain value so the consuming layer owns it: construct once at
/// startup and pass it where a fallback is needed, rather than reaching for a
/// hidden global.
pub fn builtin_offers() -> Vec<RateOffer> {
    vec![
        // Standard share certificates
        RateOffer::standard("cert-6mo", "6 Month Certificate", 6, 500.0, 3.78, 3.85),
        RateOffer::standard("cert-18mo", "18 Month Certificate", 18, 500.0, 3.88, 3.95),
        RateOffer::standard("cert-36mo", "36 Month Certificate", 36, 500.0, 3.70, 3.76),
        RateOffer::standard("cert-48mo", "48 Month Certificate", 48, 500.0, 3.25, 3.30),
        // Specialty share certificates
        RateOffer::specialty(
            "save-to-win-12mo",
            "Save-To-Win Certificate",
            12,
            25.0,
            3.45,
            3.50,
            "Quarterly prize drawings for savers",
        ),
        RateOffer::specialty(
            "add-on-12mo",
            "Add-On Certificate",
            12,
            500.0,
            3.93,
            4.00,
            "Add more funds anytime during the term",
        ),
        RateOffer::specialty(
            "bump-up-24mo",
            "Bump-Up Certificate",
            24,
            500.0,
            3.64,
            3.70,
            "Option to raise rate once per term if rates increase",
        ),
        RateOffer::specialty(
            "mini-jumbo-60mo",
            "Mini Jumbo Certificate",
            60,
            10000.0,
            3.30,
            3.35,
            "Higher minimum deposit for premium rates",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_deposit_boundary() {
        let offer = RateOffer::standard("cert-6mo", "6 Month Certificate", 6, 500.0, 3.78, 3.85);

        assert!(!offer.accepts_deposit(499.99));
        assert!(offer.accepts_deposit(500.0));
        assert!(offer.accepts_deposit(10_000.0));
    }

    #[test]
    fn test_builtin_offers_shape() {
        let offers = builtin_offers();

        assert_eq!(offers.len(), 8);
        assert!(offers.iter().all(|o| o.term_months > 0));
        assert!(offers.iter().all(|o| o.apy >= o.rate));

        // Specialty offers carry a feature description, standard ones don't
        for offer in &offers {
            assert_eq!(offer.is_specialty, offer.special_features.is_some());
        }
    }

    #[test]
    fn test_builtin_offer_ids_unique() {
        let offers = builtin_offers();
        let mut ids: Vec<&str> = offers.iter().map(|o| o.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), offers.len());
    }
}
