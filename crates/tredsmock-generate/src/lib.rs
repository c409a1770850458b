//! Randomized invoice-record synthesis for TReDS pipeline testing.
//!
//! This crate consumes a validated parameter set plus optional counterparty
//! identifier sets and produces ordered, CSV-ready invoice rows for the
//! supported upstream feeds (C2FO, ERP, Buyer Self Upload).

pub mod dates;
pub mod engine;
pub mod errors;
pub mod ids;
pub mod model;
pub mod output;
pub mod random;
pub mod schema;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{C2foDateVariant, GenerateOptions, GenerationReport};
