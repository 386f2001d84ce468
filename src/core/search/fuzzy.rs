//! Weighted Approximate-Substring Scoring
//!
//! Scores one query variant against one enriched product. Each searchable
//! field is tested for the pattern appearing anywhere in it with at most a
//! threshold share of edits; matching fields are then combined into a single
//! product score where lower is better.
//!
//! Example:
//! - "matcha" in "matcha biome toner" → exact substring, field score 0
//! - "shampo" in "shampoo mild" → 0 edits (substring)
//! - "shamoo" in "shampoo mild" → 1 edit over 6 chars, field score 0.167

use serde::{Deserialize, Serialize};

use super::models::{EnrichedProduct, SearchField};

/// Fuzzy matcher tolerance and field weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyOptions {
    /// Largest accepted share of edits, `0.0` (exact) to `1.0` (anything)
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Fewest pattern characters that must survive unedited
    #[serde(default = "default_min_match_char_length")]
    pub min_match_char_length: usize,

    /// Skip the field-length norm that favors short fields
    #[serde(default)]
    pub ignore_field_norm: bool,

    #[serde(default)]
    pub weights: FieldWeights,
}

fn default_threshold() -> f64 { 0.5 }
fn default_min_match_char_length() -> usize { 2 }

impl Default for FuzzyOptions {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            min_match_char_length: default_min_match_char_length(),
            ignore_field_norm: false,
            weights: FieldWeights::default(),
        }
    }
}

impl FuzzyOptions {
    /// Only exact substring hits
    pub fn exact() -> Self {
        Self {
            threshold: 0.0,
            ..Default::default()
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_min_match_char_length(mut self, length: usize) -> Self {
        self.min_match_char_length = length;
        self
    }

    pub fn with_weights(mut self, weights: FieldWeights) -> Self {
        self.weights = weights;
        self
    }
}

/// Relative importance of each searchable field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    pub title: f64,
    pub title_latin: f64,
    pub title_cyrillic: f64,
    pub raw_title: f64,
    pub category: f64,
    pub line: f64,
    pub description: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title: 0.35,
            title_latin: 0.2,
            title_cyrillic: 0.2,
            raw_title: 0.1,
            category: 0.08,
            line: 0.05,
            description: 0.02,
        }
    }
}

impl FieldWeights {
    pub fn weight(&self, field: SearchField) -> f64 {
        match field {
            SearchField::Title => self.title,
            SearchField::TitleLatin => self.title_latin,
            SearchField::TitleCyrillic => self.title_cyrillic,
            SearchField::RawTitle => self.raw_title,
            SearchField::Category => self.category,
            SearchField::Line => self.line,
            SearchField::Description => self.description,
        }
    }

    /// Scale so the weights sum to 1. Negative and non-finite weights count
    /// as zero; an all-zero set falls back to the defaults.
    pub fn normalized(&self) -> Self {
        let clean = |w: f64| if w.is_finite() && w > 0.0 { w } else { 0.0 };
        let total: f64 = SearchField::ALL.iter().map(|&f| clean(self.weight(f))).sum();

        if total <= 0.0 {
            log::warn!("All field weights are zero, using defaults");
            return Self::default().normalized();
        }

        Self {
            title: clean(self.title) / total,
            title_latin: clean(self.title_latin) / total,
            title_cyrillic: clean(self.title_cyrillic) / total,
            raw_title: clean(self.raw_title) / total,
            category: clean(self.category) / total,
            line: clean(self.line) / total,
            description: clean(self.description) / total,
        }
    }
}

/// Scores variants against products with fixed options.
#[derive(Debug, Clone)]
pub struct FuzzyScorer {
    threshold: f64,
    min_match_char_length: usize,
    ignore_field_norm: bool,
    weights: FieldWeights,
}

impl Default for FuzzyScorer {
    fn default() -> Self {
        Self::new(&FuzzyOptions::default())
    }
}

impl FuzzyScorer {
    pub fn new(options: &FuzzyOptions) -> Self {
        let threshold = if options.threshold.is_finite() {
            options.threshold.clamp(0.0, 1.0)
        } else {
            default_threshold()
        };

        Self {
            threshold,
            min_match_char_length: options.min_match_char_length.max(1),
            ignore_field_norm: options.ignore_field_norm,
            weights: options.weights.normalized(),
        }
    }

    /// Score of `pattern` inside one field, `None` when it does not match.
    ///
    /// `0.0` is an exact substring hit; otherwise edits / pattern length.
    pub fn score_field(&self, pattern: &str, text: &str) -> Option<f64> {
        self.score_compiled(&CompiledPattern::new(pattern), text)
    }

    fn score_compiled(&self, pattern: &CompiledPattern<'_>, text: &str) -> Option<f64> {
        let m = pattern.len();
        if m == 0 || text.trim().is_empty() {
            return None;
        }

        if text.contains(pattern.text) {
            return (m >= self.min_match_char_length).then_some(0.0);
        }

        let distance = pattern.distance_in(text);
        let score = distance as f64 / m as f64;

        if score <= self.threshold && m.saturating_sub(distance) >= self.min_match_char_length {
            Some(score)
        } else {
            None
        }
    }

    /// Combined score of `pattern` against every field of `product`, `None`
    /// when no field matches. Always in `(0, 1]` otherwise.
    pub fn score(&self, pattern: &str, product: &EnrichedProduct) -> Option<f64> {
        self.score_product(&CompiledPattern::new(pattern), product)
    }

    pub(crate) fn score_product(
        &self,
        compiled: &CompiledPattern<'_>,
        product: &EnrichedProduct,
    ) -> Option<f64> {
        let mut total = 1.0;
        let mut matched = false;

        for field in SearchField::ALL {
            let weight = self.weights.weight(field);
            if weight <= 0.0 {
                continue;
            }

            let text = product.field(field);
            let Some(score) = self.score_compiled(compiled, text) else {
                continue;
            };

            let norm = if self.ignore_field_norm { 1.0 } else { field_norm(text) };
            let base = if score == 0.0 { f64::EPSILON } else { score };
            total *= base.powf(weight * norm);
            matched = true;
        }

        matched.then_some(total)
    }
}

// ============================================================================
// Approximate substring distance
// ============================================================================

/// Longest pattern handled by the bit-parallel scan.
const WORD_BITS: usize = u64::BITS as usize;

/// ASCII plus the basic Cyrillic block get a direct table slot.
const ASCII_SLOTS: usize = 0x80;
const CYRILLIC_START: u32 = 0x400;
const CYRILLIC_SLOTS: usize = 0x60;

/// Per-character match masks for a pattern of at most 64 characters.
#[derive(Debug, Clone)]
struct PatternMasks {
    table: [u64; ASCII_SLOTS + CYRILLIC_SLOTS],
    other: Vec<(char, u64)>,
    high_bit: u64,
}

impl PatternMasks {
    fn new(pattern: &[char]) -> Self {
        let mut masks = Self {
            table: [0; ASCII_SLOTS + CYRILLIC_SLOTS],
            other: Vec::new(),
            high_bit: 1 << (pattern.len() - 1),
        };
        for (i, &c) in pattern.iter().enumerate() {
            let bit = 1u64 << i;
            match slot(c) {
                Some(idx) => masks.table[idx] |= bit,
                None => match masks.other.iter_mut().find(|(k, _)| *k == c) {
                    Some((_, mask)) => *mask |= bit,
                    None => masks.other.push((c, bit)),
                },
            }
        }
        masks
    }

    fn get(&self, c: char) -> u64 {
        match slot(c) {
            Some(idx) => self.table[idx],
            None => self
                .other
                .iter()
                .find(|(k, _)| *k == c)
                .map_or(0, |(_, mask)| *mask),
        }
    }

    /// Myers' bit-vector edit distance, search variant: the top row is all
    /// zeros so a match may start anywhere, and the best bottom-row value
    /// over every text position is returned.
    fn distance(&self, len: usize, text: impl Iterator<Item = char>) -> usize {
        let mut pv = u64::MAX;
        let mut mv = 0u64;
        let mut score = len;
        let mut best = len;

        for c in text {
            let eq = self.get(c);
            let xv = eq | mv;
            let xh = ((eq & pv).wrapping_add(pv) ^ pv) | eq;
            let mut ph = mv | !(xh | pv);
            let mut mh = pv & xh;

            if ph & self.high_bit != 0 {
                score += 1;
            } else if mh & self.high_bit != 0 {
                score -= 1;
            }

            ph <<= 1;
            mh <<= 1;
            pv = mh | !(xv | ph);
            mv = ph & xv;

            best = best.min(score);
            if best == 0 {
                break;
            }
        }

        best
    }
}

fn slot(c: char) -> Option<usize> {
    let code = c as u32;
    if (code as usize) < ASCII_SLOTS {
        Some(code as usize)
    } else if (CYRILLIC_START..CYRILLIC_START + CYRILLIC_SLOTS as u32).contains(&code) {
        Some(ASCII_SLOTS + (code - CYRILLIC_START) as usize)
    } else {
        None
    }
}

/// A query variant prepared once and scanned against many fields.
#[derive(Debug, Clone)]
pub(crate) struct CompiledPattern<'a> {
    text: &'a str,
    chars: Vec<char>,
    masks: Option<PatternMasks>,
}

impl<'a> CompiledPattern<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let fits = !chars.is_empty() && chars.len() <= WORD_BITS;
        let masks = fits.then(|| PatternMasks::new(&chars));
        Self { text, chars, masks }
    }

    fn len(&self) -> usize {
        self.chars.len()
    }

    fn distance_in(&self, text: &str) -> usize {
        match &self.masks {
            Some(masks) => masks.distance(self.chars.len(), text.chars()),
            None => {
                let text_chars: Vec<char> = text.chars().collect();
                table_distance(&self.chars, &text_chars)
            }
        }
    }
}

/// Fewest edits needed to turn `pattern` into some substring of `text`.
///
/// Patterns up to 64 characters use a bit-parallel scan, one word operation
/// per text character; longer ones fall back to the full table.
pub fn substring_distance(pattern: &[char], text: &[char]) -> usize {
    match pattern.len() {
        0 => 0,
        m if m <= WORD_BITS => PatternMasks::new(pattern).distance(m, text.iter().copied()),
        _ => table_distance(pattern, text),
    }
}

/// Sellers' variant of the Levenshtein table: the first row is all zeros so
/// a match may start at any position, and the minimum of the last row is
/// taken so it may end at any position.
pub(crate) fn table_distance(pattern: &[char], text: &[char]) -> usize {
    let m = pattern.len();
    if m == 0 {
        return 0;
    }

    // column[i]: best cost of matching pattern[..i] ending at the current text position
    let mut column: Vec<usize> = (0..=m).collect();
    let mut best = m;

    for &tc in text {
        let mut diagonal = column[0];
        column[0] = 0;
        for i in 1..=m {
            let above = column[i];
            let cost = if pattern[i - 1] == tc { 0 } else { 1 };
            column[i] = (diagonal + cost).min(above + 1).min(column[i - 1] + 1);
            diagonal = above;
        }
        best = best.min(column[m]);
        if best == 0 {
            break;
        }
    }

    best
}

/// Field-length norm: `1 / sqrt(tokens)`, rounded to three decimals.
/// Tokens are runs of non-space characters.
pub fn field_norm(text: &str) -> f64 {
    let tokens = text.split(' ').filter(|t| !t.is_empty()).count().max(1);
    let norm = 1.0 / (tokens as f64).sqrt();
    (norm * 1000.0).round() / 1000.0
}
