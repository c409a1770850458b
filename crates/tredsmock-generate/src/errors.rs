use thiserror::Error;

/// Errors emitted by the synthesis engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("validation failed: {0}")]
    Validation(#[from] tredsmock_core::Error),
    #[error("no valid identifier combinations for the selected counterparty")]
    NoCombinations,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
