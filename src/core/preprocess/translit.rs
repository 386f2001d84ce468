//! Phonetic Transliteration
//!
//! Sound-based conversion between Cyrillic and Latin spellings, used to
//! match "heimish" against "хеймиш" and vice versa. Unlike
//! [`layout`](super::layout) this is not keyboard-positional.
//!
//! The transform is lossy in both directions. `шампунь` → `shampun` →
//! `шампун` does not round-trip, and it does not need to: the goal is to
//! produce a spelling close enough for the fuzzy matcher.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Cyrillic letter → Latin spelling. Hard and soft signs are dropped.
const CYRILLIC_TO_LATIN: &[(char, &str)] = &[
    ('а', "a"), ('б', "b"), ('в', "v"), ('г', "g"), ('д', "d"),
    ('е', "e"), ('ё', "yo"), ('ж', "zh"), ('з', "z"), ('и', "i"),
    ('й', "y"), ('к', "k"), ('л', "l"), ('м', "m"), ('н', "n"),
    ('о', "o"), ('п', "p"), ('р', "r"), ('с', "s"), ('т', "t"),
    ('у', "u"), ('ф', "f"), ('х', "h"), ('ц', "ts"), ('ч', "ch"),
    ('ш', "sh"), ('щ', "sch"), ('ъ', ""), ('ы', "y"), ('ь', ""),
    ('э', "e"), ('ю', "yu"), ('я', "ya"),
];

/// Latin digraphs collapsed before single letters are mapped.
const LATIN_DIGRAPHS: &[(&str, &str)] = &[
    ("sh", "ш"),
    ("ch", "ч"),
    ("zh", "ж"),
    ("th", "т"),
    ("ph", "ф"),
];

/// Latin letter → Cyrillic spelling.
const LATIN_TO_CYRILLIC: &[(char, &str)] = &[
    ('a', "а"), ('b', "б"), ('c', "к"), ('d', "д"), ('e', "е"),
    ('f', "ф"), ('g', "г"), ('h', "х"), ('i', "и"), ('j', "дж"),
    ('k', "к"), ('l', "л"), ('m', "м"), ('n', "н"), ('o', "о"),
    ('p', "п"), ('q', "к"), ('r', "р"), ('s', "с"), ('t', "т"),
    ('u', "у"), ('v', "в"), ('w', "в"), ('x', "кс"), ('y', "й"),
    ('z', "з"),
];

static CYRILLIC_TABLE: Lazy<HashMap<char, &'static str>> =
    Lazy::new(|| CYRILLIC_TO_LATIN.iter().copied().collect());

static LATIN_TABLE: Lazy<HashMap<char, &'static str>> =
    Lazy::new(|| LATIN_TO_CYRILLIC.iter().copied().collect());

/// Spell Cyrillic text with Latin letters (`матча` → `matcha`).
pub fn cyrillic_to_latin(text: &str) -> String {
    map_chars(&text.to_lowercase(), &CYRILLIC_TABLE)
}

/// Spell Latin text with Cyrillic letters (`heimish` → `хеимиш`).
pub fn latin_to_cyrillic(text: &str) -> String {
    let mut result = text.to_lowercase();
    for (digraph, replacement) in LATIN_DIGRAPHS {
        result = result.replace(digraph, replacement);
    }
    map_chars(&result, &LATIN_TABLE)
}

fn map_chars(text: &str, table: &HashMap<char, &'static str>) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match table.get(&c) {
            Some(spelling) => out.push_str(spelling),
            None => out.push(c),
        }
    }
    out
}
