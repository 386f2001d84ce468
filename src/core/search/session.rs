//! Search Session
//!
//! State behind one search box: the memoized catalog index, the current
//! query with its ranked results and layout hint, and the highlighted row.
//! Every query change recomputes everything synchronously; debouncing is up
//! to the caller.

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::core::preprocess::{LayoutAdvisor, QueryPipeline};

use super::error::Result;
use super::index::MemoizedIndex;
use super::matcher::{FuzzyMatcher, DEFAULT_RESULT_LIMIT};
use super::models::{Product, ResultRow, ScoredMatch};

/// Suggestions offered while the search box is empty.
pub const POPULAR_QUERIES: &[&str] = &[
    "All Clean", "Патчи", "Тушь", "Шампунь", "Крем", "RX", "Matcha",
];

/// Gating and size limits for the search box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Most rows returned for one query
    pub result_limit: usize,
    /// Shortest raw query that triggers a search
    pub min_query_chars: usize,
    /// Shortest raw query that can show a layout hint
    pub hint_min_chars: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
            min_query_chars: 2,
            hint_min_chars: 3,
        }
    }
}

pub struct SearchSession {
    pipeline: QueryPipeline,
    advisor: LayoutAdvisor,
    matcher: FuzzyMatcher,
    settings: SearchSettings,
    index: MemoizedIndex,
    query: String,
    results: Vec<ScoredMatch>,
    hint: Option<String>,
    selected: usize,
}

impl SearchSession {
    pub fn new(
        pipeline: QueryPipeline,
        advisor: LayoutAdvisor,
        matcher: FuzzyMatcher,
        settings: SearchSettings,
    ) -> Self {
        Self {
            pipeline,
            advisor,
            matcher,
            settings,
            index: MemoizedIndex::new(),
            query: String::new(),
            results: Vec::new(),
            hint: None,
            selected: 0,
        }
    }

    /// Session wired from application configuration.
    ///
    /// Fails only if a configured synonym file exists but cannot be read.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let pipeline = QueryPipeline::new(config.preprocess.clone())?;
        let advisor = LayoutAdvisor::new(config.preprocess.advisor.clone());
        let matcher = FuzzyMatcher::new(&config.matcher);
        Ok(Self::new(pipeline, advisor, matcher, config.search.clone()))
    }

    /// Built-in dictionary and default settings.
    pub fn new_minimal() -> Self {
        Self::new(
            QueryPipeline::new_minimal(),
            LayoutAdvisor::default(),
            FuzzyMatcher::default(),
            SearchSettings::default(),
        )
    }

    /// Replace the catalog. The index is rebuilt only if the content changed,
    /// and the current query is re-run against it.
    pub fn set_catalog(&mut self, products: &[Product]) {
        if self.index.update(products) {
            self.refresh();
        }
    }

    /// Update the query text and recompute results and hint.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.selected = 0;
        self.refresh();
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
        self.hint = None;
        self.selected = 0;
    }

    fn refresh(&mut self) {
        let length = self.query.chars().count();

        self.hint = if length >= self.settings.hint_min_chars {
            self.advisor.hint(&self.query)
        } else {
            None
        };

        self.results = if self.query.trim().is_empty() || length < self.settings.min_query_chars {
            Vec::new()
        } else {
            let variants = self.pipeline.variants(&self.query);
            self.matcher
                .search(self.index.index(), &variants, self.settings.result_limit)
        };

        if self.selected >= self.results.len() {
            self.selected = 0;
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[ScoredMatch] {
        &self.results
    }

    /// Results rendered for display.
    pub fn rows(&self) -> Vec<ResultRow> {
        self.results.iter().map(ScoredMatch::to_row).collect()
    }

    /// "Did you mean" line for a wrong-layout query.
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// `true` when a real query found nothing ("Ничего не найдено").
    pub fn is_empty_state(&self) -> bool {
        self.query.chars().count() >= self.settings.min_query_chars && self.results.is_empty()
    }

    pub fn select_next(&mut self) {
        if !self.results.is_empty() {
            self.selected = (self.selected + 1).min(self.results.len() - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&ScoredMatch> {
        self.results.get(self.selected)
    }

    pub fn popular_queries(&self) -> &'static [&'static str] {
        POPULAR_QUERIES
    }

    /// Number of times the index has been rebuilt.
    pub fn index_version(&self) -> u64 {
        self.index.version()
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }
}
