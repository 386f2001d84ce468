//! Layout-Mismatch Advisor
//!
//! Spots queries that were most likely typed with the wrong keyboard layout
//! and offers the re-keyed text as a "did you mean" hint. The hint is only
//! advice; the search itself already covers the re-keyed spelling.

use super::config::AdvisorConfig;
use super::layout::{self, is_cyrillic_letter, is_latin_letter};

/// Consecutive Cyrillic letters needed before re-keyed Latin input counts as
/// a Russian word.
const MIN_CYRILLIC_RUN: usize = 3;

/// English product terms that identify re-keyed Cyrillic input.
const LATIN_PRODUCT_TERMS: &[&str] = &[
    "cream", "serum", "balm", "mask", "toner", "shampoo", "mascara", "biome", "matcha",
];

const HINT_PREFIX: &str = "Возможно вы имели в виду";

/// Which way the user's layout was wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutMismatch {
    /// Latin keys, Russian intent: `ifvgeym` → `шампунь`.
    LatinMeantCyrillic { suggestion: String },
    /// Russian keys, English intent: `скуфь` → `cream`.
    CyrillicMeantLatin { suggestion: String },
}

impl LayoutMismatch {
    pub fn suggestion(&self) -> &str {
        match self {
            LayoutMismatch::LatinMeantCyrillic { suggestion }
            | LayoutMismatch::CyrillicMeantLatin { suggestion } => suggestion,
        }
    }
}

/// Heuristic wrong-layout detector.
#[derive(Debug, Clone, Default)]
pub struct LayoutAdvisor {
    config: AdvisorConfig,
}

impl LayoutAdvisor {
    pub fn new(config: AdvisorConfig) -> Self {
        Self { config }
    }

    /// Classify a raw query.
    ///
    /// - only Latin letters, and re-keying yields a run of 3+ Cyrillic
    ///   letters → [`LayoutMismatch::LatinMeantCyrillic`]
    /// - only Cyrillic letters, and re-keying yields a known English product
    ///   term → [`LayoutMismatch::CyrillicMeantLatin`]
    ///
    /// Digits, spaces and punctuation do not count either way.
    pub fn detect(&self, query: &str) -> Option<LayoutMismatch> {
        let text = query.to_lowercase();
        let cyrillic = text.chars().filter(|&c| is_cyrillic_letter(c)).count();
        let latin = text.chars().filter(|&c| is_latin_letter(c)).count();

        if latin > 0 && cyrillic == 0 {
            let rekeyed = layout::latin_to_cyrillic(&text);
            if longest_run(&rekeyed, is_cyrillic_letter) >= MIN_CYRILLIC_RUN {
                return Some(LayoutMismatch::LatinMeantCyrillic { suggestion: rekeyed });
            }
        }

        if cyrillic > 0 && latin == 0 {
            let rekeyed = layout::cyrillic_to_latin(&text);
            if LATIN_PRODUCT_TERMS.iter().any(|term| rekeyed.contains(term)) {
                return Some(LayoutMismatch::CyrillicMeantLatin { suggestion: rekeyed });
            }
        }

        None
    }

    /// The correction to show the shopper, if any.
    ///
    /// Only the QWERTY → ЙЦУКЕН direction is surfaced unless
    /// `suggest_latin_corrections` is set.
    pub fn suggestion(&self, query: &str) -> Option<String> {
        match self.detect(query)? {
            LayoutMismatch::LatinMeantCyrillic { suggestion } => Some(suggestion),
            LayoutMismatch::CyrillicMeantLatin { suggestion } => {
                if self.config.suggest_latin_corrections {
                    Some(suggestion)
                } else {
                    log::debug!("Layout mismatch {:?} detected but not surfaced", suggestion);
                    None
                }
            }
        }
    }

    /// [`suggestion`](Self::suggestion) rendered as the user-facing hint line.
    pub fn hint(&self, query: &str) -> Option<String> {
        self.suggestion(query)
            .map(|suggestion| format!("{}: \"{}\"", HINT_PREFIX, suggestion))
    }
}

fn longest_run(text: &str, pred: impl Fn(char) -> bool) -> usize {
    let mut best = 0;
    let mut current = 0;
    for c in text.chars() {
        if pred(c) {
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
    }
    best
}
