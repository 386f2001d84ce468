//! End-to-end tests for storefront search.
//!
//! Each test drives the public API the way the storefront does: load a
//! catalog, type a query into a session, read back ranked rows and the
//! layout hint.

use std::path::PathBuf;

use storefront_search::config::AppConfig;
use storefront_search::core::preprocess::{LayoutAdvisor, QueryPipeline};
use storefront_search::core::search::{
    load_catalog, parse_catalog, FuzzyMatcher, Product, ProductIndex, SearchSession,
};

fn product(id: &str, title: &str) -> Product {
    Product {
        id: id.to_string(),
        title: title.to_string(),
        price: 1000.0,
        ..Default::default()
    }
}

fn session_with(catalog: &[Product]) -> SearchSession {
    let mut session = SearchSession::new_minimal();
    session.set_catalog(catalog);
    session
}

fn result_ids(session: &SearchSession) -> Vec<String> {
    session.results().iter().map(|m| m.id().to_string()).collect()
}

fn sample_catalog() -> Vec<Product> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/sample_catalog.json");
    load_catalog(&path).expect("bundled sample catalog loads")
}

// ============================================================================
// Query expansion end to end
// ============================================================================

#[test]
fn wrong_layout_query_finds_cyrillic_title() {
    let mut session = session_with(&[
        product("1", "Крем для лица"),
        product("2", "Шампунь"),
        product("3", "Matcha Biome Toner"),
    ]);

    session.set_query("ifvgeym");

    assert_eq!(result_ids(&session)[0], "2");
    assert_eq!(
        session.hint(),
        Some("Возможно вы имели в виду: \"шампунь\"")
    );
}

#[test]
fn english_term_finds_russian_title_through_synonyms() {
    let mut session = session_with(&[product("1", "Крем для лица"), product("2", "Шампунь")]);

    session.set_query("cream");

    assert!(result_ids(&session).contains(&"1".to_string()));
}

#[test]
fn exact_title_substring_ranks_first() {
    let mut matcha_in_description = product("1", "Marine Care Cream");
    matcha_in_description.description = "with fermented matcha".into();

    let mut session = session_with(&[
        matcha_in_description,
        product("2", "Шампунь"),
        product("3", "Matcha Biome Toner"),
    ]);

    session.set_query("matcha");

    assert_eq!(result_ids(&session)[0], "3");
}

#[test]
fn title_match_beats_description_only_match() {
    let mut description_only = product("1", "Glow Base");
    description_only.description = "apply after toner".into();

    let mut session = session_with(&[description_only, product("2", "Toner Pads")]);

    session.set_query("toner");

    assert_eq!(result_ids(&session), vec!["2".to_string(), "1".to_string()]);
    assert!(session.results()[0].score < session.results()[1].score);
}

#[test]
fn single_character_query_yields_nothing() {
    let pipeline = QueryPipeline::new_minimal();
    assert!(pipeline.variants("к").is_empty());

    let index = ProductIndex::build(&[product("1", "Крем")]);
    let results = FuzzyMatcher::default().search(&index, &pipeline.variants("к"), 8);
    assert!(results.is_empty());

    let mut session = session_with(&[product("1", "Крем")]);
    session.set_query("к");
    assert!(session.results().is_empty());
}

#[test]
fn advisor_hint_is_converted_text() {
    let advisor = LayoutAdvisor::default();
    assert_eq!(advisor.suggestion("ifvgeym").as_deref(), Some("шампунь"));
}

// ============================================================================
// Bundled catalog
// ============================================================================

#[test]
fn sample_catalog_wrong_layout_shampoo() {
    let mut session = session_with(&sample_catalog());
    session.set_query("ifvgeym");

    let rows = session.rows();
    assert_eq!(rows[0].title, "Шампунь Moringa Ceramide");
    assert_eq!(rows[0].link, "/product/moringa-shampoo");
}

#[test]
fn sample_catalog_cream_finds_creams() {
    let mut session = session_with(&sample_catalog());
    session.set_query("cream");

    let ids = result_ids(&session);
    assert!(ids.len() <= 8);
    assert!(ids.contains(&"4".to_string()));
    assert!(ids.contains(&"5".to_string()));
}

#[test]
fn sample_catalog_sale_rows_show_old_price() {
    let mut session = session_with(&sample_catalog());
    session.set_query("all clean balm");

    let row = &session.rows()[0];
    assert_eq!(row.id, "1");
    assert_eq!(row.price_display, "1\u{a0}890\u{a0}₽");
    assert_eq!(row.old_price_display.as_deref(), Some("2\u{a0}290\u{a0}₽"));
}

#[test]
fn sample_catalog_layout_hint_for_russian_word() {
    let mut session = session_with(&sample_catalog());
    // "крем" typed with the QWERTY layout active
    session.set_query("rhtv");
    assert_eq!(session.hint(), Some("Возможно вы имели в виду: \"крем\""));
    assert!(!session.results().is_empty());
}

// ============================================================================
// Configuration and catalog formats
// ============================================================================

#[test]
fn latin_corrections_can_be_enabled() {
    let config = AppConfig::from_toml_str("[preprocess.advisor]\nsuggest_latin_corrections = true")
        .unwrap();
    let mut session = SearchSession::from_config(&config).unwrap();
    session.set_catalog(&[product("1", "Cream")]);

    session.set_query("скуфь");

    assert_eq!(session.hint(), Some("Возможно вы имели в виду: \"cream\""));
    assert_eq!(result_ids(&session), vec!["1".to_string()]);
}

#[test]
fn latin_corrections_hidden_by_default() {
    let mut session = session_with(&[product("1", "Cream")]);
    session.set_query("скуфь");
    assert_eq!(session.hint(), None);
}

#[test]
fn extra_synonym_file_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let synonyms = dir.path().join("synonyms.toml");
    std::fs::write(&synonyms, "[entries]\nessence = [\"эссенция\"]\n").unwrap();

    let config = AppConfig::from_toml_str(&format!(
        "[preprocess.synonyms]\npath = {:?}\n",
        synonyms.display().to_string()
    ))
    .unwrap();

    let mut session = SearchSession::from_config(&config).unwrap();
    session.set_catalog(&[product("1", "Эссенция Matcha"), product("2", "Шампунь")]);
    session.set_query("essence");

    assert_eq!(result_ids(&session)[0], "1");
}

#[test]
fn result_limit_from_config() {
    let config = AppConfig::from_toml_str("[search]\nresult_limit = 3").unwrap();
    let mut session = SearchSession::from_config(&config).unwrap();
    let catalog: Vec<Product> = (0..10)
        .map(|i| product(&i.to_string(), &format!("Toner {}", i)))
        .collect();
    session.set_catalog(&catalog);

    session.set_query("toner");

    assert_eq!(session.results().len(), 3);
}

#[test]
fn cms_export_is_searchable() {
    let catalog = parse_catalog(
        r#"{"data": [
            {"id": 101, "title": "Тушь для ресниц", "price": "1290.00", "is_on_sale": 0, "in_stock": 1},
            {"id": 102, "title": "Heimish All Clean Balm", "price": "1890.00", "is_on_sale": 1}
        ]}"#,
    )
    .unwrap();

    let mut session = session_with(&catalog);
    session.set_query("mascara");
    assert_eq!(result_ids(&session)[0], "101");

    session.set_query("хеймиш");
    assert_eq!(result_ids(&session)[0], "102");
    assert_eq!(session.rows()[0].link, "/product/102");
}
