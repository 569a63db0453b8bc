//! Load and maintain the certificate rate catalog backed by a CSV file
//!
//! The backing file mirrors the marketing team's rate sheet, one offer per
//! row. Load failures are expected in the field (missing file, malformed
//! export), so consumers usually go through [`load_offers_or`] and degrade to
//! a fallback list rather than aborting.

use super::RateOffer;
use chrono::Utc;
use csv::{Reader, Writer, WriterBuilder};
use std::fs::OpenOptions;
use std::path::Path;
use thiserror::Error;

/// Errors from catalog load and maintenance operations
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog row: {0}")]
    Csv(#[from] csv::Error),

    #[error("offer '{id}' has a non-positive term of {term_months} months")]
    InvalidTerm { id: String, term_months: i64 },

    #[error(
        "updating offers in place is not supported; edit the rate sheet \
         backing store directly and reload"
    )]
    UpdateUnsupported,
}

/// Raw CSV row matching the rate sheet columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Certificate Name")]
    certificate_name: String,
    #[serde(rename = "Term (Months)")]
    term_months: i64,
    #[serde(rename = "Minimum Deposit")]
    minimum_deposit: f64,
    #[serde(rename = "Dividend Rate (%)")]
    dividend_rate: f64,
    #[serde(rename = "APY (%)")]
    apy: f64,
    #[serde(rename = "Is Specialty")]
    is_specialty: String,
    #[serde(rename = "Special Features")]
    special_features: String,
    #[serde(rename = "Last Updated")]
    last_updated: String,
}

const HEADERS: [&str; 8] = [
    "Certificate Name",
    "Term (Months)",
    "Minimum Deposit",
    "Dividend Rate (%)",
    "APY (%)",
    "Is Specialty",
    "Special Features",
    "Last Updated",
];

impl CsvRow {
    /// Convert to an offer. Row position supplies the id so repeated loads of
    /// the same file produce identical catalogs.
    fn into_offer(self, index: usize) -> Result<RateOffer, CatalogError> {
        let id = format!("row-{}", index + 1);

        if self.term_months <= 0 {
            return Err(CatalogError::InvalidTerm {
                id,
                term_months: self.term_months,
            });
        }

        let special_features = if self.special_features.trim().is_empty() {
            None
        } else {
            Some(self.special_features)
        };
        let last_updated = if self.last_updated.trim().is_empty() {
            None
        } else {
            Some(self.last_updated)
        };

        Ok(RateOffer {
            id,
            name: self.certificate_name,
            term_months: self.term_months as u32,
            minimum_deposit: self.minimum_deposit,
            rate: self.dividend_rate,
            apy: self.apy,
            is_specialty: self.is_specialty.trim().eq_ignore_ascii_case("true"),
            special_features,
            last_updated,
        })
    }
}

/// Load all offers from a catalog CSV file
pub fn load_offers<P: AsRef<Path>>(path: P) -> Result<Vec<RateOffer>, CatalogError> {
    let reader = Reader::from_path(path)?;
    collect_offers(reader)
}

/// Load offers from any reader (e.g. string buffer, test fixture)
pub fn load_offers_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<RateOffer>, CatalogError> {
    collect_offers(Reader::from_reader(reader))
}

fn collect_offers<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<RateOffer>, CatalogError> {
    let mut offers = Vec::new();

    for (index, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        // Blank-name rows are padding from spreadsheet exports
        if row.certificate_name.trim().is_empty() {
            continue;
        }
        offers.push(row.into_offer(index)?);
    }

    Ok(offers)
}

/// Load offers from a catalog file, falling back to the given list when the
/// file cannot be read or parsed.
///
/// The fallback is injected by the caller (typically [`super::builtin_offers`]
/// built at startup), keeping the degraded-mode data an explicit input.
pub fn load_offers_or<P: AsRef<Path>>(path: P, fallback: Vec<RateOffer>) -> Vec<RateOffer> {
    match load_offers(&path) {
        Ok(offers) if !offers.is_empty() => offers,
        Ok(_) => {
            log::warn!(
                "catalog {} is empty, using {} built-in offers",
                path.as_ref().display(),
                fallback.len()
            );
            fallback
        }
        Err(err) => {
            log::warn!(
                "failed to load catalog {}: {}; using {} built-in offers",
                path.as_ref().display(),
                err,
                fallback.len()
            );
            fallback
        }
    }
}

/// Append a new offer to the catalog file, creating it (with headers) if
/// missing. Stamps the Last Updated column with the current UTC time.
pub fn append_offer<P: AsRef<Path>>(path: P, offer: &RateOffer) -> Result<(), CatalogError> {
    let path = path.as_ref();
    let write_headers = !path.exists();

    if write_headers {
        let mut writer = Writer::from_path(path)?;
        writer.write_record(HEADERS)?;
        write_offer_row(&mut writer, offer)?;
        writer.flush()?;
    } else {
        let file = OpenOptions::new().append(true).open(path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        write_offer_row(&mut writer, offer)?;
        writer.flush()?;
    }

    Ok(())
}

fn write_offer_row<W: std::io::Write>(writer: &mut Writer<W>, offer: &RateOffer) -> Result<(), CatalogError> {
    let last_updated = offer
        .last_updated
        .clone()
        .unwrap_or_else(|| Utc::now().to_rfc3339());
    let term_months = offer.term_months.to_string();
    let minimum_deposit = offer.minimum_deposit.to_string();
    let rate = offer.rate.to_string();
    let apy = offer.apy.to_string();
    let is_specialty = offer.is_specialty.to_string();

    writer.write_record([
        offer.name.as_str(),
        term_months.as_str(),
        minimum_deposit.as_str(),
        rate.as_str(),
        apy.as_str(),
        is_specialty.as_str(),
        offer.special_features.as_deref().unwrap_or(""),
        last_updated.as_str(),
    ])?;

    Ok(())
}

/// Update an existing offer in place.
///
/// Always fails: the rate sheet is the source of truth and in-place edits
/// through the tool are deliberately unsupported. Operators edit the backing
/// store directly and reload.
pub fn update_offer<P: AsRef<Path>>(_path: P, _id: &str, _offer: &RateOffer) -> Result<(), CatalogError> {
    Err(CatalogError::UpdateUnsupported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_offers;

    const SAMPLE_CSV: &str = "\
Certificate Name,Term (Months),Minimum Deposit,Dividend Rate (%),APY (%),Is Specialty,Special Features,Last Updated
12 Month Certificate,12,500,4.17,4.25,false,,2025-06-01
Save-To-Win Certificate,12,25,3.45,3.50,TRUE,Quarterly prize drawings for savers,
";

    #[test]
    fn test_load_offers_from_reader() {
        let offers = load_offers_from_reader(SAMPLE_CSV.as_bytes()).unwrap();

        assert_eq!(offers.len(), 2);

        let standard = &offers[0];
        assert_eq!(standard.id, "row-1");
        assert_eq!(standard.name, "12 Month Certificate");
        assert_eq!(standard.term_months, 12);
        assert_eq!(standard.minimum_deposit, 500.0);
        assert_eq!(standard.rate, 4.17);
        assert_eq!(standard.apy, 4.25);
        assert!(!standard.is_specialty);
        assert_eq!(standard.special_features, None);
        assert_eq!(standard.last_updated.as_deref(), Some("2025-06-01"));

        let specialty = &offers[1];
        assert_eq!(specialty.id, "row-2");
        assert!(specialty.is_specialty);
        assert_eq!(
            specialty.special_features.as_deref(),
            Some("Quarterly prize drawings for savers")
        );
        assert_eq!(specialty.last_updated, None);
    }

    #[test]
    fn test_blank_name_rows_skipped() {
        let csv = "\
Certificate Name,Term (Months),Minimum Deposit,Dividend Rate (%),APY (%),Is Specialty,Special Features,Last Updated
,0,0,0,0,false,,
6 Month Certificate,6,500,3.78,3.85,false,,
";
        let offers = load_offers_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(offers.len(), 1);
        // Id reflects the row's position in the file, including skipped rows
        assert_eq!(offers[0].id, "row-2");
        assert_eq!(offers[0].name, "6 Month Certificate");
    }

    #[test]
    fn test_non_positive_term_rejected() {
        let csv = "\
Certificate Name,Term (Months),Minimum Deposit,Dividend Rate (%),APY (%),Is Specialty,Special Features,Last Updated
Broken Certificate,0,500,3.78,3.85,false,,
";
        let err = load_offers_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidTerm { term_months: 0, .. }));
    }

    #[test]
    fn test_fallback_on_missing_file() {
        let offers = load_offers_or("/nonexistent/rates.csv", builtin_offers());
        assert_eq!(offers, builtin_offers());
    }

    #[test]
    fn test_update_offer_unsupported() {
        let offer = &builtin_offers()[0];
        let err = update_offer("rates.csv", &offer.id, offer).unwrap_err();
        assert!(matches!(err, CatalogError::UpdateUnsupported));
    }

    #[test]
    fn test_append_then_load_round_trip() {
        let dir = std::env::temp_dir().join("cert_calc_catalog_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("rates.csv");
        let _ = std::fs::remove_file(&path);

        let offers = builtin_offers();
        append_offer(&path, &offers[0]).unwrap();
        append_offer(&path, &offers[4]).unwrap();

        let loaded = load_offers(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].name, offers[0].name);
        assert_eq!(loaded[0].apy, offers[0].apy);
        assert_eq!(loaded[1].name, offers[4].name);
        assert_eq!(loaded[1].special_features, offers[4].special_features);
        // Appends stamp the row with a timestamp
        assert!(loaded[0].last_updated.is_some());

        std::fs::remove_file(&path).unwrap();
    }
}
