//! Domain errors

use thiserror::Error;

/// Errors raised while building domain values
#[derive(Error, Debug)]
pub enum DomainError {
    /// Catalog file could not be read
    #[error("Failed to read catalog: {0}")]
    CatalogIo(#[from] std::io::Error),

    /// Catalog file is not valid catalog JSON
    #[error("Failed to parse catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// Unrecognized temperature unit name
    #[error("Invalid temperature unit: {0}")]
    InvalidUnit(String),
}

/// Result alias for domain operations
pub type Result<T> = std::result::Result<T, DomainError>;
