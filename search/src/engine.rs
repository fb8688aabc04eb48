//! Search engine scanning item names on every fresh query.

use crate::config::SearchConfig;
use crate::results::{SearchHit, SearchResults};
use gaveta_core::Organizer;
use nucleo::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo::{Config as NucleoConfig, Matcher, Utf32Str};

/// Outcome of one live query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Same query as the previous call; keep whatever is displayed.
    Unchanged,
    /// Query below the minimum length; clear displayed results.
    Cleared,
    /// Fresh results for a new query. May contain zero hits.
    Matched(SearchResults),
}

/// Live search over item names.
///
/// Remembers the previous normalized query so repeated identical input never
/// re-runs the scan or flickers highlights.
pub struct SearchEngine {
    matcher: Matcher,
    config: SearchConfig,
    last_query: Option<String>,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            matcher: Matcher::new(NucleoConfig::DEFAULT),
            config,
            last_query: None,
        }
    }

    /// Runs one query against the organizer.
    ///
    /// The query is normalized (trimmed, lowercased) before the duplicate
    /// check and before matching.
    pub fn query(&mut self, organizer: &Organizer, raw: &str) -> QueryOutcome {
        let normalized = raw.trim().to_lowercase();
        if self.last_query.as_deref() == Some(normalized.as_str()) {
            return QueryOutcome::Unchanged;
        }

        if normalized.chars().count() < self.config.min_query_len {
            self.last_query = Some(normalized);
            return QueryOutcome::Cleared;
        }

        let results = self.scan(organizer, &normalized);
        self.last_query = Some(normalized);
        QueryOutcome::Matched(results)
    }

    /// Forgets the previous query so the next call always runs.
    pub fn reset(&mut self) {
        self.last_query = None;
    }

    fn scan(&mut self, organizer: &Organizer, query: &str) -> SearchResults {
        // Substring atoms, one per whitespace token; the pattern scores None
        // unless every atom matches somewhere in the haystack.
        let pattern = Pattern::new(
            query,
            CaseMatching::Ignore,
            Normalization::Never,
            AtomKind::Substring,
        );

        let mut buf = Vec::new();
        let mut hits = Vec::new();
        for (id, drawer) in organizer.drawers() {
            for (index, item) in drawer.items().iter().enumerate() {
                let haystack = Utf32Str::new(item.lower(), &mut buf);
                if pattern.score(haystack, &mut self.matcher).is_some() {
                    hits.push(SearchHit {
                        drawer: id,
                        item: index,
                    });
                }
            }
        }

        SearchResults::new(hits)
    }
}
