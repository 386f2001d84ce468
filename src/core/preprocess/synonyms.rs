//! Synonym Expansion for Storefront Search
//!
//! Rewrites a query by swapping domain terms for their equivalents across
//! languages: "cream" ↔ "крем", "heimish" ↔ "хеймиш", and so on.
//!
//! Each firing entry contributes its own rewrites of the query. Rewrites are
//! never combined with each other, so a query with two dictionary terms gets
//! one variant per substitution, not the cartesian product.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::error::{PreprocessError, PreprocessResult};

/// Ordered dictionary of `term → equivalents`.
///
/// Lookups are substring-based: the key fires when it occurs anywhere in the
/// query, and an equivalent fires the reverse rewrite back to its key.
/// Insertion order is kept so expansion output is deterministic.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SynonymMap {
    entries: IndexMap<String, Vec<String>>,
}

impl SynonymMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from TOML configuration file.
    ///
    /// Expected format:
    /// ```toml
    /// [entries]
    /// toner = ["тонер", "тоник"]
    /// "патчи" = ["patch", "patches"]
    /// ```
    pub fn from_toml_file(path: &Path) -> PreprocessResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load from TOML string.
    pub fn from_toml_str(content: &str) -> PreprocessResult<Self> {
        #[derive(Deserialize)]
        struct TomlSynonyms {
            #[serde(default)]
            entries: IndexMap<String, Vec<String>>,
        }

        let parsed: TomlSynonyms = toml::from_str(content)
            .map_err(|e| PreprocessError::SynonymParse(e.to_string()))?;

        let mut map = SynonymMap::new();
        for (key, values) in parsed.entries {
            let values: Vec<&str> = values.iter().map(String::as_str).collect();
            map.add_entry(&key, &values);
        }
        Ok(map)
    }

    /// Add equivalents for a term. Extends an existing entry.
    pub fn add_entry(&mut self, term: &str, equivalents: &[&str]) {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return;
        }

        let values = self.entries.entry(term).or_default();
        for equivalent in equivalents {
            let equivalent = equivalent.trim().to_lowercase();
            if !equivalent.is_empty() && !values.contains(&equivalent) {
                values.push(equivalent);
            }
        }
    }

    /// Merge another map into this one, keeping this map's entry order.
    pub fn merge(&mut self, other: &SynonymMap) {
        for (term, equivalents) in &other.entries {
            let equivalents: Vec<&str> = equivalents.iter().map(String::as_str).collect();
            self.add_entry(term, &equivalents);
        }
    }

    /// Equivalents registered for `term`, if any.
    pub fn equivalents(&self, term: &str) -> Option<&[String]> {
        self.entries.get(&term.to_lowercase()).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Produce synonym rewrites of a query.
    ///
    /// For every entry:
    /// - key found in `query` → one rewrite per equivalent
    /// - key found in `layout_converted` → one rewrite of that string per equivalent
    /// - equivalent found in `query` → one rewrite back to the key
    ///
    /// Only the first occurrence is substituted. Both inputs are expected to
    /// be normalized already.
    pub fn expand(&self, query: &str, layout_converted: &str) -> Vec<String> {
        let mut rewrites = Vec::new();

        for (term, equivalents) in &self.entries {
            if query.contains(term.as_str()) {
                for equivalent in equivalents {
                    rewrites.push(query.replacen(term.as_str(), equivalent, 1));
                }
            }
            if layout_converted.contains(term.as_str()) {
                for equivalent in equivalents {
                    rewrites.push(layout_converted.replacen(term.as_str(), equivalent, 1));
                }
            }
            for equivalent in equivalents {
                if query.contains(equivalent.as_str()) {
                    rewrites.push(query.replacen(equivalent.as_str(), term, 1));
                }
            }
        }

        rewrites
    }

    /// Upper bound on the number of rewrites [`expand`](Self::expand) can
    /// return for any input.
    pub fn max_rewrites(&self) -> usize {
        self.entries.values().map(|v| 3 * v.len()).sum()
    }
}

/// Built-in cosmetics dictionary: product types (EN ↔ RU) and brand/line
/// names with their Cyrillic spellings.
pub fn build_default_cosmetics_synonyms() -> SynonymMap {
    let mut map = SynonymMap::new();

    // Product types, English → Russian
    map.add_entry("balm", &["бальзам"]);
    map.add_entry("cream", &["крем"]);
    map.add_entry("serum", &["сыворотка", "серум"]);
    map.add_entry("toner", &["тонер", "тоник"]);
    map.add_entry("cleanser", &["очищение", "клинзер"]);
    map.add_entry("mask", &["маска"]);
    map.add_entry("shampoo", &["шампунь"]);
    map.add_entry("moisturizer", &["увлажняющий", "крем"]);
    map.add_entry("sunscreen", &["солнцезащитный", "spf"]);
    map.add_entry("mascara", &["тушь"]);
    map.add_entry("powder", &["пудра"]);
    map.add_entry("cushion", &["кушон"]);

    // Product types, Russian → English
    map.add_entry("патчи", &["patch", "patches", "eye patch"]);
    map.add_entry("бальзам", &["balm", "cleansing balm"]);
    map.add_entry("крем", &["cream", "moisturizer"]);
    map.add_entry("сыворотка", &["serum"]);
    map.add_entry("шампунь", &["shampoo"]);
    map.add_entry("тушь", &["mascara"]);

    // Brand and line names
    map.add_entry("heimish", &["хеймиш", "хаймиш"]);
    map.add_entry("matcha", &["матча", "маття"]);
    map.add_entry("biome", &["биом"]);
    map.add_entry("ceramide", &["церамид", "керамид"]);
    map.add_entry("moringa", &["моринга"]);

    map
}
