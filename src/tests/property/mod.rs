//! Property-based tests for Storefront Search
//!
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! ```sh
//! cargo test property --release
//! ```
//!
//! ## Test Modules
//!
//! - `variants_props`: query expansion
//!   - Normalized query is always a variant
//!   - No variant shorter than two characters
//!   - Deterministic
//!   - Bounded by the synonym dictionary size
//!
//! - `matcher_props`: fuzzy scoring and ranking
//!   - At most `limit` results, one per product
//!   - Sorted ascending, scores in (0, 1]
//!   - Exact substring always scores zero
//!
//! By default proptest runs 256 cases per property; override with
//! `PROPTEST_CASES`.

mod matcher_props;
mod variants_props;
