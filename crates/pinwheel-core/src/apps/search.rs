//! Fuzzy application search.

use crate::shortcuts::AppInfo;
use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use std::cmp::Reverse;
use tracing::debug;

const DEFAULT_LIMIT: usize = 20;

/// Bonus keeping name matches ahead of id-only matches.
const NAME_WEIGHT: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppMatch<'a> {
    pub app: &'a AppInfo,
    pub score: u32,
}

/// Fuzzy search over installed applications, as typed in the menu's search box.
pub struct AppSearch {
    matcher: Matcher,
    limit: usize,
}

impl AppSearch {
    #[must_use]
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
            limit: DEFAULT_LIMIT,
        }
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Best matches first; ties keep input order. An empty query matches
    /// nothing.
    pub fn search<'a>(
        &mut self,
        query: &str,
        apps: impl IntoIterator<Item = &'a AppInfo>,
    ) -> Vec<AppMatch<'a>> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let pattern = Pattern::new(
            query,
            CaseMatching::Smart,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );

        let mut results: Vec<AppMatch<'a>> = apps
            .into_iter()
            .filter_map(|app| {
                self.score(&pattern, app)
                    .map(|score| AppMatch { app, score })
            })
            .collect();

        results.sort_by_key(|m| Reverse(m.score));
        results.truncate(self.limit);
        debug!("App search '{query}': {} results", results.len());
        results
    }

    fn score(&mut self, pattern: &Pattern, app: &AppInfo) -> Option<u32> {
        let mut buf = Vec::new();
        let name_score = pattern
            .score(Utf32Str::new(&app.name, &mut buf), &mut self.matcher)
            .map(|s| s.saturating_mul(NAME_WEIGHT));

        let mut id_buf = Vec::new();
        let id_score = pattern.score(Utf32Str::new(&app.id, &mut id_buf), &mut self.matcher);

        match (name_score, id_score) {
            (None, None) => None,
            (a, b) => Some(a.unwrap_or(0).max(b.unwrap_or(0))),
        }
    }
}

impl Default for AppSearch {
    fn default() -> Self {
        Self::new()
    }
}
