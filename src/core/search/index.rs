//! Product Index
//!
//! Enriches catalog products with the derived strings the matcher searches,
//! and memoizes that work so it only reruns when the catalog changes.

use crate::core::preprocess::{normalize_text, translit};

use super::models::{EnrichedProduct, Product};

/// Enriched view of one catalog snapshot, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct ProductIndex {
    products: Vec<EnrichedProduct>,
}

impl ProductIndex {
    pub fn build(products: &[Product]) -> Self {
        Self {
            products: products.iter().map(enrich).collect(),
        }
    }

    pub fn products(&self) -> &[EnrichedProduct] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Derive the searchable strings of one product.
pub fn enrich(product: &Product) -> EnrichedProduct {
    let search_title = normalize_text(&product.title);
    let title_latin = translit::cyrillic_to_latin(&search_title);
    let title_cyrillic = translit::latin_to_cyrillic(&search_title);

    EnrichedProduct {
        search_category: with_transliteration(&product.category),
        search_line: with_transliteration(&product.line),
        raw_title: product.title.to_lowercase(),
        description: normalize_text(&product.description),
        search_title,
        title_latin,
        title_cyrillic,
        product: product.clone(),
    }
}

/// `"Кремы"` → `"кремы kremy"`
fn with_transliteration(label: &str) -> String {
    let label = normalize_text(label.trim());
    if label.is_empty() {
        return label;
    }
    let latin = translit::cyrillic_to_latin(&label);
    format!("{} {}", label, latin)
}

/// A [`ProductIndex`] that is rebuilt only when the catalog content changes.
///
/// The catalog is fingerprinted with BLAKE3 over its JSON form; a bumped
/// [`version`](Self::version) tells callers the index was replaced.
#[derive(Debug, Default)]
pub struct MemoizedIndex {
    fingerprint: Option<blake3::Hash>,
    version: u64,
    index: ProductIndex,
}

impl MemoizedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the index reflect `products`. Returns `true` if it was rebuilt.
    pub fn update(&mut self, products: &[Product]) -> bool {
        let fingerprint = fingerprint(products);

        if fingerprint.is_some() && fingerprint == self.fingerprint {
            log::debug!("Catalog unchanged, reusing index v{}", self.version);
            return false;
        }

        self.index = ProductIndex::build(products);
        self.fingerprint = fingerprint;
        self.version += 1;
        log::info!(
            "Built product index v{} with {} products",
            self.version,
            self.index.len()
        );
        true
    }

    pub fn index(&self) -> &ProductIndex {
        &self.index
    }

    /// Number of rebuilds so far; `0` before the first catalog.
    pub fn version(&self) -> u64 {
        self.version
    }
}

fn fingerprint(products: &[Product]) -> Option<blake3::Hash> {
    let mut hasher = blake3::Hasher::new();
    match serde_json::to_writer(&mut hasher, products) {
        Ok(()) => Some(hasher.finalize()),
        Err(e) => {
            log::warn!("Could not fingerprint catalog, forcing rebuild: {}", e);
            None
        }
    }
}
