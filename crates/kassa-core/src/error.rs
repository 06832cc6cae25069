//! Error types for building Kassa records locally.

/// Result type for model construction.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while building request records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A monetary value could not be parsed as a fixed-point decimal.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A currency code is not a three-letter ISO 4217 code.
    #[error("invalid currency code: {0}")]
    InvalidCurrency(String),
}
