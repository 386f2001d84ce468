//! Product Search Module
//!
//! Catalog-side half of storefront search: loads products, enriches them
//! into a memoized index, scores query variants against it and renders the
//! ranked rows.
//!
//! ```text
//!  catalog.json ──► load_catalog ──► MemoizedIndex (enrich on change)
//!                                          │
//!  QueryVariants ─────────────────► FuzzyMatcher ──► top-N ScoredMatch
//!                                                          │
//!                                          SearchSession ──► ResultRow + hint
//! ```

pub mod catalog;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod matcher;
pub mod models;
pub mod session;

pub use catalog::{load_catalog, parse_catalog};
pub use error::{Result, SearchError};
pub use fuzzy::{FieldWeights, FuzzyOptions, FuzzyScorer};
pub use index::{MemoizedIndex, ProductIndex};
pub use matcher::{FuzzyMatcher, DEFAULT_RESULT_LIMIT};
pub use models::{
    format_rub, EnrichedProduct, Product, ProductVideo, ResultRow, ScoredMatch, SearchField,
    VideoKind,
};
pub use session::{SearchSession, SearchSettings, POPULAR_QUERIES};
