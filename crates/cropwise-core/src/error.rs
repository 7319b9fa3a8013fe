use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CropwiseError {
    #[error("failed to load catalog from {path}: {reason}")]
    CatalogLoad { path: PathBuf, reason: String },

    #[error("invalid catalog: {0}")]
    CatalogInvalid(String),

    #[error("invalid crop record: {0}")]
    CropInvalid(String),

    #[error("loan principal must be greater than zero (got {0})")]
    InvalidPrincipal(f64),

    #[error("annual interest rate must not be negative (got {0})")]
    InvalidRate(f64),

    #[error("loan term must be at least one month")]
    InvalidTerm,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
