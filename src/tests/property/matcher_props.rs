//! Property-based tests for the Fuzzy Matcher
//!
//! Tests invariants:
//! - At most `limit` results, at most one per product id
//! - Results sorted by score ascending, every score in (0, 1]
//! - A pattern contained in a field always has distance zero
//! - Distance never exceeds the pattern length
//! - The bit-parallel scan agrees with the full edit table

use std::collections::HashSet;

use proptest::prelude::*;

use crate::core::preprocess::QueryPipeline;
use crate::core::search::fuzzy::{substring_distance, table_distance};
use crate::core::search::{FuzzyMatcher, Product, ProductIndex};

// ============================================================================
// Strategies
// ============================================================================

fn arb_word() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Matcha", "Biome", "Toner", "Cream", "Крем", "Шампунь", "Тушь", "Патчи", "Balm",
        "All", "Clean", "Moringa", "Сыворотка", "Heimish", "Marine", "Care",
    ])
    .prop_map(str::to_string)
}

fn arb_title() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_word(), 1..4).prop_map(|words| words.join(" "))
}

/// Catalog with ids drawn from a small pool so duplicates occur
fn arb_catalog() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec((0u8..12, arb_title(), arb_title()), 0..20).prop_map(|rows| {
        rows.into_iter()
            .map(|(id, title, description)| Product {
                id: id.to_string(),
                title,
                description,
                ..Default::default()
            })
            .collect()
    })
}

fn arb_query() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_word(),
        "[a-zа-я]{1,8}",
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: results are bounded, unique and sorted
    #[test]
    fn prop_results_bounded_unique_sorted(
        catalog in arb_catalog(),
        query in arb_query(),
        limit in 0usize..10
    ) {
        let index = ProductIndex::build(&catalog);
        let variants = QueryPipeline::new_minimal().variants(&query);
        let results = FuzzyMatcher::default().search(&index, &variants, limit);

        prop_assert!(results.len() <= limit);

        let ids: HashSet<&str> = results.iter().map(|m| m.id()).collect();
        prop_assert_eq!(ids.len(), results.len());

        for pair in results.windows(2) {
            prop_assert!(pair[0].score <= pair[1].score);
        }
        for hit in &results {
            prop_assert!(hit.score > 0.0 && hit.score <= 1.0, "score {}", hit.score);
        }
    }

    /// Property: a product whose title contains the query is always found
    #[test]
    fn prop_title_substring_found(title in arb_title()) {
        let catalog = vec![Product {
            id: "only".to_string(),
            title: title.clone(),
            ..Default::default()
        }];
        let index = ProductIndex::build(&catalog);
        let variants = QueryPipeline::new_minimal().variants(&title);
        let results = FuzzyMatcher::default().search(&index, &variants, 8);
        prop_assert_eq!(results.len(), 1);
    }

    /// Property: substring hits cost nothing
    #[test]
    fn prop_substring_distance_zero(
        prefix in "[a-z ]{0,8}",
        pattern in "[a-zа-я]{1,8}",
        suffix in "[a-z ]{0,8}"
    ) {
        let text: Vec<char> = format!("{}{}{}", prefix, pattern, suffix).chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();
        prop_assert_eq!(substring_distance(&pattern, &text), 0);
    }

    /// Property: deleting every pattern character is always possible
    #[test]
    fn prop_substring_distance_bounded(pattern in "[a-z]{0,10}", text in "[a-z]{0,20}") {
        let pattern: Vec<char> = pattern.chars().collect();
        let text: Vec<char> = text.chars().collect();
        prop_assert!(substring_distance(&pattern, &text) <= pattern.len());
    }

    /// Property: bit-parallel and table distances agree
    #[test]
    fn prop_bit_parallel_matches_table(
        pattern in "[a-dа-гё]{1,12}",
        text in "[a-dа-гё ]{0,40}"
    ) {
        let pattern: Vec<char> = pattern.chars().collect();
        let text: Vec<char> = text.chars().collect();
        prop_assert_eq!(substring_distance(&pattern, &text), table_distance(&pattern, &text));
    }
}
