//! Fuzzy Matcher
//!
//! Runs every query variant over the whole index and keeps each product's
//! best score.

use indexmap::IndexMap;

use crate::core::preprocess::QueryVariants;

use super::fuzzy::{CompiledPattern, FuzzyOptions, FuzzyScorer};
use super::index::ProductIndex;
use super::models::ScoredMatch;

/// Results shown in the search dropdown.
pub const DEFAULT_RESULT_LIMIT: usize = 8;

#[derive(Debug, Clone, Default)]
pub struct FuzzyMatcher {
    scorer: FuzzyScorer,
}

impl FuzzyMatcher {
    pub fn new(options: &FuzzyOptions) -> Self {
        Self {
            scorer: FuzzyScorer::new(options),
        }
    }

    /// Rank products against all variants, best first, at most `limit`.
    ///
    /// A product hit by several variants appears once, with its lowest
    /// score. Equal scores keep catalog order. No variants means no results.
    pub fn search(
        &self,
        index: &ProductIndex,
        variants: &QueryVariants,
        limit: usize,
    ) -> Vec<ScoredMatch> {
        if variants.is_empty() || limit == 0 {
            return Vec::new();
        }

        // id -> (catalog position, best score)
        let mut best: IndexMap<&str, (usize, f64)> = IndexMap::new();

        for variant in variants.iter() {
            let pattern = CompiledPattern::new(variant);
            for (position, product) in index.products().iter().enumerate() {
                let Some(score) = self.scorer.score_product(&pattern, product) else {
                    continue;
                };
                best.entry(product.id())
                    .and_modify(|entry| {
                        if score < entry.1 {
                            *entry = (position, score);
                        }
                    })
                    .or_insert((position, score));
            }
        }

        let mut ranked: Vec<(usize, f64)> = best.into_values().collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        ranked.truncate(limit);

        log::debug!(
            "{} variants matched {} products",
            variants.len(),
            ranked.len()
        );

        ranked
            .into_iter()
            .map(|(position, score)| ScoredMatch {
                product: index.products()[position].clone(),
                score,
            })
            .collect()
    }
}
