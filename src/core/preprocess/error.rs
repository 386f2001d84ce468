//! Preprocessing Error Types
//!
//! Query preprocessing itself never fails; these errors only come from
//! loading dictionaries and configuration from disk.

use thiserror::Error;

/// Errors that can occur while loading preprocessing resources
#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("Synonym dictionary parse failed: {0}")]
    SynonymParse(String),

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for preprocessing operations
pub type PreprocessResult<T> = Result<T, PreprocessError>;
