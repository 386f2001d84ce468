//! Search Error Types
//!
//! Only catalog and configuration loading can fail. Matching itself is total.

use thiserror::Error;

use crate::core::preprocess::PreprocessError;

/// Search operation errors
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unrecognized catalog format: {0}")]
    CatalogFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Preprocessing error: {0}")]
    Preprocess(#[from] PreprocessError),
}

/// Result type alias for search operations
pub type Result<T> = std::result::Result<T, SearchError>;
