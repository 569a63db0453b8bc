//! Certificate rate catalog: offer data and the CSV-backed store

mod offer;
pub mod loader;

pub use offer::{builtin_offers, RateOffer};
pub use loader::{append_offer, load_offers, load_offers_from_reader, load_offers_or, update_offer, CatalogError};
