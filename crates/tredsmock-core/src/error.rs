use thiserror::Error;

/// Core error type shared across tredsmock crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A user-supplied parameter is missing, unknown, or out of range.
    #[error("invalid parameters: {0}")]
    Validation(String),
    /// The counterparty directory contents could not be interpreted.
    #[error("invalid counterparty directory: {0}")]
    Directory(String),
}

/// Convenience alias for results returned by tredsmock crates.
pub type Result<T> = std::result::Result<T, Error>;
