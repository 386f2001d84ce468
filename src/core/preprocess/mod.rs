//! Query Preprocessing Module
//!
//! Expands a shopper's raw query into every spelling worth matching against
//! the catalog, and spots queries typed with the wrong keyboard layout.
//!
//! ## Architecture
//!
//! ```text
//! User Query: "ifvgeym"
//!        │
//!        ▼
//! ┌──────────────────────────────┐
//! │  1. Normalize                │  → "ifvgeym"
//! │     (trim, NFC, lowercase)   │
//! └──────────────┬───────────────┘
//!                ▼
//! ┌──────────────────────────────┐
//! │  2. Layout Re-keying         │  "ifvgeym" → "шампунь"
//! │     (QWERTY ↔ ЙЦУКЕН)        │
//! └──────────────┬───────────────┘
//!                ▼
//! ┌──────────────────────────────┐
//! │  3. Transliteration          │  "шампунь" → "shampun"
//! │     (phonetic, both ways)    │
//! └──────────────┬───────────────┘
//!                ▼
//! ┌──────────────────────────────┐
//! │  4. Synonym Expansion        │  "шампунь" → "shampoo"
//! │     (cosmetics dictionary)   │
//! └──────────────┬───────────────┘
//!                ▼
//! ┌──────────────────────────────────────────────────┐
//! │  5. Output                                        │
//! │  ┌─────────────────┐  ┌────────────────────────┐ │
//! │  │ QueryVariants   │  │ Layout hint            │ │
//! │  │ (fuzzy search)  │  │ "Возможно вы имели..." │ │
//! │  └─────────────────┘  └────────────────────────┘ │
//! └──────────────────────────────────────────────────┘
//! ```

pub mod advisor;
pub mod config;
pub mod error;
pub mod layout;
pub mod pipeline;
pub mod synonyms;
pub mod translit;

// Re-export primary types
pub use advisor::{LayoutAdvisor, LayoutMismatch};
pub use config::{AdvisorConfig, PreprocessConfig, SynonymConfig};
pub use error::{PreprocessError, PreprocessResult};
pub use layout::LayoutDirection;
pub use pipeline::{normalize_text, QueryPipeline, QueryVariants, MIN_VARIANT_CHARS};
pub use synonyms::{build_default_cosmetics_synonyms, SynonymMap};
