//! Preprocessing Configuration
//!
//! Configuration for synonym expansion and the layout-mismatch advisor.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::error::{PreprocessError, PreprocessResult};

/// Overall preprocessing configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PreprocessConfig {
    /// Synonym expansion configuration
    #[serde(default)]
    pub synonyms: SynonymConfig,

    /// Layout-mismatch advisor configuration
    #[serde(default)]
    pub advisor: AdvisorConfig,
}

impl PreprocessConfig {
    /// Load configuration from TOML file
    pub fn from_toml_file(path: &std::path::Path) -> PreprocessResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load from TOML string
    pub fn from_toml_str(content: &str) -> PreprocessResult<Self> {
        toml::from_str(content).map_err(|e| PreprocessError::ConfigParse(e.to_string()))
    }
}

/// Synonym expansion configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SynonymConfig {
    /// Whether synonym expansion is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether the built-in cosmetics dictionary is loaded
    #[serde(default = "default_true")]
    pub use_default_dictionary: bool,

    /// Extra dictionary entries, merged after the built-in ones
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for SynonymConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            use_default_dictionary: true,
            path: None,
        }
    }
}

/// Layout-mismatch advisor configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Also surface a hint when Cyrillic input re-keys to a known English
    /// product term. Off by default: only the QWERTY → ЙЦУКЕН direction is
    /// shown to shoppers today.
    #[serde(default)]
    pub suggest_latin_corrections: bool,
}

fn default_true() -> bool { true }
