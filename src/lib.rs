/// Storefront Search
///
/// Typo- and layout-tolerant product search for a bilingual (RU/EN)
/// cosmetics storefront: query expansion, fuzzy matching and
/// "did you mean" hints over an in-memory catalog.

pub mod config;
pub mod core;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
