//! Monthly compounding projection engine

mod engine;
mod result;

pub use engine::{project_certificate, round2};
pub use result::ProjectionResult;
