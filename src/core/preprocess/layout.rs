//! Keyboard Layout Normalization
//!
//! Recovers text typed with the wrong input layout selected. The mapping is
//! positional: each key on a US QWERTY keyboard corresponds to exactly one
//! key on the Russian ЙЦУКЕН layout, so `ifvgeym` typed on QWERTY is the
//! same sequence of keystrokes as `шампунь` on ЙЦУКЕН.
//!
//! Unmapped characters (digits, spaces, symbols without a counterpart) pass
//! through untouched. Output is always lowercase.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Unshifted QWERTY keys, in physical order.
const QWERTY_KEYS: &str = "qwertyuiop[]asdfghjkl;'zxcvbnm,.`";

/// The ЙЦУКЕН character on the same physical key as [`QWERTY_KEYS`].
const JCUKEN_KEYS: &str = "йцукенгшщзхъфывапролджэячсмитьбюё";

static LATIN_TO_CYRILLIC: Lazy<HashMap<char, char>> =
    Lazy::new(|| QWERTY_KEYS.chars().zip(JCUKEN_KEYS.chars()).collect());

static CYRILLIC_TO_LATIN: Lazy<HashMap<char, char>> =
    Lazy::new(|| JCUKEN_KEYS.chars().zip(QWERTY_KEYS.chars()).collect());

/// Direction of a layout conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutDirection {
    /// Typed on QWERTY, meant ЙЦУКЕН (`ifvgeym` → `шампунь`).
    LatinToCyrillic,
    /// Typed on ЙЦУКЕН, meant QWERTY (`скуфь` → `cream`).
    CyrillicToLatin,
}

/// Re-key `text` as if the other layout had been active.
pub fn convert(text: &str, direction: LayoutDirection) -> String {
    let table = match direction {
        LayoutDirection::LatinToCyrillic => &*LATIN_TO_CYRILLIC,
        LayoutDirection::CyrillicToLatin => &*CYRILLIC_TO_LATIN,
    };

    text.to_lowercase()
        .chars()
        .map(|c| table.get(&c).copied().unwrap_or(c))
        .collect()
}

/// QWERTY → ЙЦУКЕН.
pub fn latin_to_cyrillic(text: &str) -> String {
    convert(text, LayoutDirection::LatinToCyrillic)
}

/// ЙЦУКЕН → QWERTY.
pub fn cyrillic_to_latin(text: &str) -> String {
    convert(text, LayoutDirection::CyrillicToLatin)
}

/// Lowercase Russian letter (`а`..=`я` or `ё`).
pub fn is_cyrillic_letter(c: char) -> bool {
    matches!(c, 'а'..='я' | 'ё')
}

/// Lowercase ASCII letter.
pub fn is_latin_letter(c: char) -> bool {
    c.is_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_tables_are_one_to_one() {
        assert_eq!(QWERTY_KEYS.chars().count(), JCUKEN_KEYS.chars().count());
        assert_eq!(LATIN_TO_CYRILLIC.len(), CYRILLIC_TO_LATIN.len());
    }

    #[rstest]
    #[case("ifvgeym", "шампунь")]
    #[case("rhtv", "крем")]
    #[case("neim", "тушь")]
    #[case("gfnxb", "патчи")]
    #[case("`krf", "ёлка")]
    #[case("[jkjl", "холод")]
    fn test_latin_to_cyrillic(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(latin_to_cyrillic(input), expected);
    }

    #[rstest]
    #[case("скуфь", "cream")]
    #[case("ыукгь", "serum")]
    #[case("ифдь", "balm")]
    fn test_cyrillic_to_latin(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(cyrillic_to_latin(input), expected);
    }

    #[test]
    fn test_uppercase_is_lowered_first() {
        assert_eq!(latin_to_cyrillic("IFVGEYM"), "шампунь");
    }

    #[test]
    fn test_unmapped_characters_pass_through() {
        assert_eq!(latin_to_cyrillic("spf 50+"), "ыза 50+");
        assert_eq!(cyrillic_to_latin("крем 2в1"), "rhtv 2d1");
    }
}
