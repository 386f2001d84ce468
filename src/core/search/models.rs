//! Search Models
//!
//! Storefront product records, their enriched search form, and the rendered
//! result rows handed back to the UI.

use serde::{Deserialize, Serialize};

/// Image shown when a product has none.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

// ============================================================================
// Product
// ============================================================================

/// Where a product video is hosted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VideoKind {
    #[default]
    Local,
    Rutube,
    Youtube,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProductVideo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: VideoKind,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// A catalog product as the storefront sees it. Read-only to search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique within a catalog
    pub id: String,
    /// URL slug; the id is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(default)]
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<f64>,
    #[serde(default)]
    pub is_on_sale: bool,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub line: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub videos: Vec<ProductVideo>,
}

impl Product {
    /// Storefront path of the product page.
    pub fn link(&self) -> String {
        let slug = self
            .handle
            .as_deref()
            .filter(|h| !h.is_empty())
            .unwrap_or(&self.id);
        format!("/product/{}", slug)
    }

    /// First image, or the placeholder.
    pub fn thumbnail(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }
}

// ============================================================================
// Enriched Product
// ============================================================================

/// A weighted field the matcher searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    /// Normalized lowercase title
    Title,
    /// Title transliterated Cyrillic → Latin
    TitleLatin,
    /// Title transliterated Latin → Cyrillic
    TitleCyrillic,
    /// Title as stored, lowercased only
    RawTitle,
    /// Category plus its transliteration
    Category,
    /// Line plus its transliteration
    Line,
    Description,
}

impl SearchField {
    pub const ALL: [SearchField; 7] = [
        SearchField::Title,
        SearchField::TitleLatin,
        SearchField::TitleCyrillic,
        SearchField::RawTitle,
        SearchField::Category,
        SearchField::Line,
        SearchField::Description,
    ];
}

/// A product plus the derived strings the matcher searches.
///
/// Built by [`ProductIndex`](super::index::ProductIndex); never mutated after.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedProduct {
    pub product: Product,
    pub search_title: String,
    pub title_latin: String,
    pub title_cyrillic: String,
    pub search_category: String,
    pub search_line: String,
    pub(crate) raw_title: String,
    pub(crate) description: String,
}

impl EnrichedProduct {
    pub fn id(&self) -> &str {
        &self.product.id
    }

    /// Lowercase text of one searchable field.
    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::Title => &self.search_title,
            SearchField::TitleLatin => &self.title_latin,
            SearchField::TitleCyrillic => &self.title_cyrillic,
            SearchField::RawTitle => &self.raw_title,
            SearchField::Category => &self.search_category,
            SearchField::Line => &self.search_line,
            SearchField::Description => &self.description,
        }
    }
}

// ============================================================================
// Results
// ============================================================================

/// One product's best score across all query variants. Lower is better.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMatch {
    pub product: EnrichedProduct,
    pub score: f64,
}

impl ScoredMatch {
    pub fn id(&self) -> &str {
        self.product.id()
    }

    pub fn to_row(&self) -> ResultRow {
        ResultRow::from(&self.product.product)
    }
}

/// Everything the search dropdown needs to render one hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub id: String,
    pub link: String,
    pub title: String,
    pub image: String,
    pub category: String,
    pub line: String,
    pub price_display: String,
    /// Crossed-out price, only for products on sale
    pub old_price_display: Option<String>,
}

impl From<&Product> for ResultRow {
    fn from(product: &Product) -> Self {
        let old_price_display = match (product.is_on_sale, product.old_price) {
            (true, Some(old)) if old > 0.0 => Some(format_rub(old)),
            _ => None,
        };

        Self {
            id: product.id.clone(),
            link: product.link(),
            title: product.title.clone(),
            image: product.thumbnail().to_string(),
            category: product.category.clone(),
            line: product.line.clone(),
            price_display: format_rub(product.price),
            old_price_display,
        }
    }
}

/// Format a ruble amount the way ru-RU locales do: `1 290 ₽`, `99,5 ₽`.
///
/// Groups of three digits are separated by a no-break space, the decimal
/// separator is a comma, and at most three fraction digits are kept with
/// trailing zeros dropped.
pub fn format_rub(amount: f64) -> String {
    if !amount.is_finite() {
        return "0\u{a0}₽".to_string();
    }

    let millis = (amount.abs() * 1000.0).round() as u64;
    let whole = millis / 1000;
    let frac = millis % 1000;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(c);
    }

    let mut out = String::new();
    if amount < 0.0 && millis > 0 {
        out.push('-');
    }
    out.push_str(&grouped);
    if frac > 0 {
        let frac = format!("{:03}", frac);
        out.push(',');
        out.push_str(frac.trim_end_matches('0'));
    }
    out.push_str("\u{a0}₽");
    out
}
