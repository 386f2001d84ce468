//! Property-based tests for the Query Pipeline
//!
//! Tests invariants:
//! - `variants(q)` contains lowercase(trim(q)) when it has 2+ characters
//! - Every variant has at least two characters
//! - Same query, same variants in the same order
//! - Output size is bounded by the dictionary
//! - Layout re-keying is one character in, one character out
//! - A single letter, however it expands, yields no variants

use proptest::prelude::*;

use crate::core::preprocess::{layout, translit, QueryPipeline, MIN_VARIANT_CHARS};

// ============================================================================
// Strategies
// ============================================================================

/// Mixed-script shopper input: Latin, Cyrillic, digits, spaces, punctuation
fn arb_query() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => prop::char::range('a', 'z'),
            2 => prop::char::range('A', 'Z'),
            4 => prop::char::range('а', 'я'),
            1 => prop::char::range('А', 'Я'),
            1 => Just('ё'),
            1 => prop::char::range('0', '9'),
            1 => Just(' '),
            1 => prop::sample::select(vec!['-', '+', '.', ',', ';', '[', ']', '\'']),
        ],
        0..24,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Words the built-in dictionary reacts to, possibly mistyped on QWERTY
fn arb_dictionary_query() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "cream", "крем", "ifvgeym", "matcha biome", "хеймиш", "патчи", "тушь", "serum",
    ])
    .prop_map(str::to_string)
}

/// One letter from either alphabet, any case, possibly padded with spaces
fn arb_single_letter() -> impl Strategy<Value = String> {
    let letter = prop_oneof![
        prop::char::range('a', 'z'),
        prop::char::range('A', 'Z'),
        prop::char::range('а', 'я'),
        prop::char::range('А', 'Я'),
        Just('ё'),
        Just('Ё'),
    ];
    (letter, " {0,2}", " {0,2}").prop_map(|(c, pre, post)| format!("{pre}{c}{post}"))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: the normalized query itself is always searched
    #[test]
    fn prop_contains_normalized_query(query in arb_query()) {
        let pipeline = QueryPipeline::new_minimal();
        let normalized = query.trim().to_lowercase();
        let variants = pipeline.variants(&query);

        if normalized.chars().count() >= MIN_VARIANT_CHARS {
            prop_assert!(variants.contains(&normalized));
        } else {
            prop_assert!(!variants.contains(&normalized));
        }
    }

    /// Property: the length floor holds after generation
    #[test]
    fn prop_no_short_variants(query in arb_query()) {
        let variants = QueryPipeline::new_minimal().variants(&query);
        for variant in variants.iter() {
            prop_assert!(
                variant.chars().count() >= MIN_VARIANT_CHARS,
                "variant {:?} of {:?} is too short", variant, query
            );
        }
    }

    /// Property: expansion is deterministic
    #[test]
    fn prop_variants_deterministic(query in prop_oneof![arb_query(), arb_dictionary_query()]) {
        let pipeline = QueryPipeline::new_minimal();
        let first = pipeline.variants(&query).into_vec();
        let second = pipeline.variants(&query).into_vec();
        prop_assert_eq!(first, second);
    }

    /// Property: output stays within a constant multiple of the dictionary
    #[test]
    fn prop_variants_bounded(query in prop_oneof![arb_query(), arb_dictionary_query()]) {
        let pipeline = QueryPipeline::new_minimal();
        let bound = 6 + pipeline.synonym_map().max_rewrites();
        prop_assert!(pipeline.variants(&query).len() <= bound);
    }

    /// Property: layout conversion is positional
    #[test]
    fn prop_layout_preserves_length(query in arb_query()) {
        let count = query.to_lowercase().chars().count();
        prop_assert_eq!(layout::latin_to_cyrillic(&query).chars().count(), count);
        prop_assert_eq!(layout::cyrillic_to_latin(&query).chars().count(), count);
    }

    /// Property: Cyrillic → Latin transliteration leaves no Russian letters
    #[test]
    fn prop_translit_removes_cyrillic(query in arb_query()) {
        let latin = translit::cyrillic_to_latin(&query);
        prop_assert!(!latin.chars().any(layout::is_cyrillic_letter));
    }

    /// Property: one-letter queries produce nothing to search
    #[test]
    fn prop_single_letter_has_no_variants(query in arb_single_letter()) {
        let variants = QueryPipeline::new_minimal().variants(&query);
        prop_assert!(variants.is_empty(), "{:?} expanded to {:?}", query, variants.into_vec());
    }
}
