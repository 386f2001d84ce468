pub mod logging;

// Query side: normalization, layout/transliteration variants, synonyms, hints
pub mod preprocess;

// Catalog side: product index, fuzzy matching, search session
pub mod search;
