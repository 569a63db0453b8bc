//! Certificate Calculator - share certificate earnings projection and comparison
//!
//! This library provides:
//! - Monthly compounding projections for share certificates
//! - Institution-vs-institution earnings comparison and ranking
//! - A CSV-backed rate catalog with a built-in fallback offer list

pub mod catalog;
pub mod comparison;
pub mod projection;

// Re-export commonly used types
pub use catalog::{builtin_offers, RateOffer};
pub use comparison::{Comparison, ComparisonEntry, RateQuote};
pub use projection::{project_certificate, ProjectionResult};
