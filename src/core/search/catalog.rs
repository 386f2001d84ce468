//! Catalog Loading
//!
//! Reads the product list from disk. Two shapes are accepted:
//!
//! - a headless-CMS items export, `{ "data": [ ... ] }`, with decimal strings
//!   for money and `0|1` flags
//! - a plain array of [`Product`] records (the storefront's bundled fallback)

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::error::{Result, SearchError};
use super::models::{Product, ProductVideo, VideoKind};

// ============================================================================
// CMS wire types
// ============================================================================

#[derive(Debug, Deserialize)]
struct CmsResponse {
    data: Vec<CmsProduct>,
}

#[derive(Debug, Deserialize)]
struct CmsProduct {
    id: CmsId,
    title: String,
    #[serde(default)]
    price: Option<Decimal>,
    #[serde(default)]
    old_price: Option<Decimal>,
    #[serde(default)]
    is_on_sale: Option<Flag>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    line: Option<String>,
    #[serde(default)]
    rating: Option<Decimal>,
    #[serde(default)]
    reviews_count: Option<u32>,
    #[serde(default)]
    in_stock: Option<Flag>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    images: Option<Vec<String>>,
    #[serde(default)]
    videos: Option<Vec<CmsVideo>>,
}

#[derive(Debug, Deserialize)]
struct CmsVideo {
    id: CmsId,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    youtube_url: Option<String>,
    #[serde(default)]
    is_active: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CmsId {
    Number(i64),
    Text(String),
}

impl CmsId {
    fn into_string(self) -> String {
        match self {
            CmsId::Number(n) => n.to_string(),
            CmsId::Text(s) => s,
        }
    }
}

/// Money and ratings arrive as decimal strings, occasionally as numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Decimal {
    Number(f64),
    Text(String),
}

impl Decimal {
    fn value(&self) -> Option<f64> {
        match self {
            Decimal::Number(n) => Some(*n),
            Decimal::Text(s) => s.trim().parse::<f64>().ok(),
        }
        .filter(|v| v.is_finite())
    }
}

/// Booleans stored as `0|1` or `true|false`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(i64),
}

impl Flag {
    fn is_set(&self) -> bool {
        matches!(self, Flag::Bool(true) | Flag::Int(1))
    }
}

impl From<CmsProduct> for Product {
    fn from(cms: CmsProduct) -> Self {
        let id = cms.id.into_string();

        let images = match cms.images {
            Some(images) if !images.is_empty() => images,
            _ => cms.image_url.into_iter().filter(|u| !u.is_empty()).collect(),
        };

        let videos = cms
            .videos
            .unwrap_or_default()
            .into_iter()
            .filter(|v| v.is_active)
            .map(|v| {
                let (kind, url) = match v.youtube_url {
                    Some(url) if !url.is_empty() => (VideoKind::Youtube, url),
                    _ => (VideoKind::Local, String::new()),
                };
                ProductVideo {
                    id: Some(v.id.into_string()),
                    title: v.title,
                    kind,
                    url,
                    thumbnail: None,
                }
            })
            .collect();

        Product {
            handle: Some(id.clone()),
            code: id.clone(),
            id,
            title: cms.title,
            price: cms.price.as_ref().and_then(Decimal::value).unwrap_or(0.0),
            old_price: cms
                .old_price
                .as_ref()
                .and_then(Decimal::value)
                .filter(|v| *v != 0.0),
            is_on_sale: cms.is_on_sale.map(|f| f.is_set()).unwrap_or(false),
            category: cms.category.unwrap_or_default(),
            line: cms.line.unwrap_or_default(),
            images,
            description: cms.description.unwrap_or_default(),
            rating: cms.rating.as_ref().and_then(Decimal::value).unwrap_or(0.0),
            reviews: cms.reviews_count.unwrap_or(0),
            in_stock: cms.in_stock.map(|f| f.is_set()).unwrap_or(false),
            videos,
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load a catalog file.
pub fn load_catalog(path: &Path) -> Result<Vec<Product>> {
    let content = std::fs::read_to_string(path)?;
    let products = parse_catalog(&content)?;
    log::info!("Loaded {} products from {}", products.len(), path.display());
    Ok(products)
}

/// Parse catalog JSON in either accepted shape.
pub fn parse_catalog(content: &str) -> Result<Vec<Product>> {
    let value: Value = serde_json::from_str(content)?;

    let products: Vec<Product> = match value {
        Value::Array(_) => serde_json::from_value(value)?,
        Value::Object(ref map) if map.get("data").map_or(false, Value::is_array) => {
            let response: CmsResponse = serde_json::from_value(value)?;
            response.data.into_iter().map(Product::from).collect()
        }
        Value::Object(_) => {
            return Err(SearchError::CatalogFormat(
                "expected an array or an object with a \"data\" array".to_string(),
            ))
        }
        other => {
            return Err(SearchError::CatalogFormat(format!(
                "expected an array or object, got {}",
                json_kind(&other)
            )))
        }
    };

    warn_on_duplicate_ids(&products);
    Ok(products)
}

fn warn_on_duplicate_ids(products: &[Product]) {
    let mut seen = HashSet::new();
    for product in products {
        if !seen.insert(product.id.as_str()) {
            log::warn!("Duplicate product id {:?} in catalog", product.id);
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
