//! Query Pipeline
//!
//! Turns one raw query into the set of spellings worth searching for:
//! 1. Normalize input (NFC, lowercase, trim)
//! 2. Re-key for the other keyboard layout, both directions
//! 3. Transliterate, both directions, plus re-keyed → Latin
//! 4. Synonym rewrites of the query and of its re-keyed form
//! 5. Deduplicate and drop anything shorter than two characters

use indexmap::IndexSet;
use unicode_normalization::UnicodeNormalization;

use super::config::PreprocessConfig;
use super::error::PreprocessResult;
use super::layout;
use super::synonyms::{build_default_cosmetics_synonyms, SynonymMap};
use super::translit;

/// Variants shorter than this (in characters) are discarded.
pub const MIN_VARIANT_CHARS: usize = 2;

/// Query variant generator.
pub struct QueryPipeline {
    synonym_map: SynonymMap,
    config: PreprocessConfig,
}

/// Distinct spellings derived from one raw query, in generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryVariants {
    variants: IndexSet<String>,
}

impl QueryPipeline {
    /// Create pipeline with the given configuration.
    pub fn new(config: PreprocessConfig) -> PreprocessResult<Self> {
        let mut synonym_map = if config.synonyms.use_default_dictionary {
            build_default_cosmetics_synonyms()
        } else {
            SynonymMap::new()
        };

        if let Some(ref path) = config.synonyms.path {
            if path.exists() {
                let extra = SynonymMap::from_toml_file(path)?;
                log::info!(
                    "Loaded {} synonym entries from {}",
                    extra.len(),
                    path.display()
                );
                synonym_map.merge(&extra);
            } else {
                log::warn!("Synonym file {} not found, skipping", path.display());
            }
        }

        Ok(Self {
            synonym_map,
            config,
        })
    }

    /// Create pipeline with an explicit synonym map.
    pub fn from_components(synonym_map: SynonymMap) -> Self {
        Self {
            synonym_map,
            config: PreprocessConfig::default(),
        }
    }

    /// Pipeline with the built-in dictionary and default settings.
    pub fn new_minimal() -> Self {
        Self::from_components(build_default_cosmetics_synonyms())
    }

    /// Generate every search variant of a raw query.
    ///
    /// Total and deterministic: the same input always yields the same set in
    /// the same order. A query of fewer than [`MIN_VARIANT_CHARS`]
    /// characters yields an empty set.
    pub fn variants(&self, raw_query: &str) -> QueryVariants {
        let query = normalize_text(raw_query.trim());
        if query.chars().count() < MIN_VARIANT_CHARS {
            log::debug!("Query {:?} too short to expand", raw_query);
            return QueryVariants::default();
        }

        let mut variants = IndexSet::new();

        variants.insert(query.clone());

        let rekeyed = layout::latin_to_cyrillic(&query);
        variants.insert(rekeyed.clone());
        variants.insert(layout::cyrillic_to_latin(&query));

        variants.insert(translit::cyrillic_to_latin(&query));
        variants.insert(translit::latin_to_cyrillic(&query));
        // wrong layout *and* phonetic spelling, e.g. QWERTY-typed Cyrillic
        // for a product whose title is Latin
        variants.insert(translit::cyrillic_to_latin(&rekeyed));

        if self.config.synonyms.enabled {
            variants.extend(self.synonym_map.expand(&query, &rekeyed));
        }

        variants.retain(|v| v.chars().count() >= MIN_VARIANT_CHARS);

        log::debug!("Query {:?} expanded to {} variants", raw_query, variants.len());

        QueryVariants { variants }
    }

    /// Add a synonym entry at runtime
    pub fn add_synonyms(&mut self, term: &str, equivalents: &[&str]) {
        self.synonym_map.add_entry(term, equivalents);
    }

    /// Get a reference to the synonym map
    pub fn synonym_map(&self) -> &SynonymMap {
        &self.synonym_map
    }

    pub fn config(&self) -> &PreprocessConfig {
        &self.config
    }
}

impl QueryVariants {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(String::as_str)
    }

    pub fn contains(&self, variant: &str) -> bool {
        self.variants.contains(variant)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.variants.into_iter().collect()
    }
}

/// Canonical form used on both sides of a comparison: NFC, then lowercase.
pub fn normalize_text(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}
