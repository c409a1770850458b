//! Core contracts for tredsmock.
//!
//! This crate defines the generation parameters, the counterparty identifier
//! model, and the combination expansion shared by the synthesis engine and
//! the CLI.

pub mod combine;
pub mod counterparty;
pub mod error;
pub mod params;

pub use combine::{IdentifierCombination, expand};
pub use counterparty::{CounterpartyIdentifiers, DirectoryEntry};
pub use error::{Error, Result};
pub use params::{GenerationParameters, InvoiceType, MAX_RECORD_COUNT, ProductType};
