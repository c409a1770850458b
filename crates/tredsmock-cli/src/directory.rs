use std::fs;
use std::path::Path;

use thiserror::Error;

use tredsmock_core::{CounterpartyIdentifiers, DirectoryEntry};

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("buyer '{0}' not found in directory")]
    UnknownBuyer(String),
}

/// Load a counterparty directory export: a JSON array of entries with a
/// buyer name and comma-separated identifier fields.
pub fn load(path: &Path) -> Result<Vec<DirectoryEntry>, DirectoryError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Resolve one buyer's identifier sets by name.
pub fn identifiers_for(
    entries: &[DirectoryEntry],
    buyer: &str,
) -> Result<CounterpartyIdentifiers, DirectoryError> {
    entries
        .iter()
        .find(|entry| entry.buyer_name.trim() == buyer)
        .map(CounterpartyIdentifiers::from_entry)
        .ok_or_else(|| DirectoryError::UnknownBuyer(buyer.to_string()))
}
