//! Listing filters and the debounced search state machine.
//!
//! Keystrokes update the search term right away so the input can echo it, but
//! the term only becomes the committed `keyword` after the input has been
//! quiet for the debounce delay. Category changes and resets commit
//! immediately. The host owns the clock: every time-dependent call takes the
//! current time in milliseconds, and [`FilterState::next_deadline`] says when
//! to call [`FilterState::poll`] next.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{config::DEFAULT_SEARCH_DEBOUNCE, Category, CategoryId};

/// Committed filter pair sent to `GET /recipes`. The catalog ANDs both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeFilters {
    /// Restrict to one category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    /// Free-text search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl RecipeFilters {
    /// Build filters from raw user input; blank values mean "no filter".
    pub fn from_parts(category_id: Option<String>, keyword: Option<String>) -> Self {
        let present = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        Self {
            category_id: present(category_id),
            keyword: present(keyword),
        }
    }

    /// No category and no keyword.
    pub fn is_empty(&self) -> bool {
        self.category_id.is_none() && self.keyword.is_none()
    }

    /// Query parameters for the present filters. Absent filters are left
    /// out entirely rather than sent empty.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(category_id) = self.category_id.as_deref() {
            pairs.push(("categoryId", category_id));
        }
        if let Some(keyword) = self.keyword.as_deref() {
            pairs.push(("keyword", keyword));
        }
        pairs
    }
}

/// Pending keyword commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Debounce {
    /// Nothing waiting.
    Idle,
    /// The search term commits once the clock reaches `deadline_ms`.
    PendingCommit {
        /// Absolute time in milliseconds.
        deadline_ms: u64,
    },
}

/// One entry in the "active filters" strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveFilter {
    /// The committed keyword.
    Keyword(String),
    /// The selected category, with its display name when known.
    Category {
        /// Category id.
        id: CategoryId,
        /// Category name, or the id when the category list lacks it.
        label: String,
    },
}

impl ActiveFilter {
    /// Tag text, e.g. `Search: kebab` or `Category: Breakfast`.
    pub fn label(&self) -> String {
        match self {
            ActiveFilter::Keyword(keyword) => format!("Search: {keyword}"),
            ActiveFilter::Category {
                label, ..
            } => format!("Category: {label}"),
        }
    }
}

/// Filter state of the listing view.
#[derive(Debug, Clone)]
pub struct FilterState {
    filters: RecipeFilters,
    search_term: String,
    debounce: Debounce,
    delay_ms: u64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::with_delay(DEFAULT_SEARCH_DEBOUNCE)
    }
}

impl FilterState {
    /// Empty filters with the default 500 ms debounce.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty filters with a custom debounce delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            filters: RecipeFilters::default(),
            search_term: String::new(),
            debounce: Debounce::Idle,
            delay_ms: u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Currently committed filters.
    pub fn filters(&self) -> &RecipeFilters {
        &self.filters
    }

    /// Raw search input, committed or not.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Debounce machine state.
    pub fn debounce(&self) -> Debounce {
        self.debounce
    }

    /// When the host should call [`FilterState::poll`] next, if at all.
    pub fn next_deadline(&self) -> Option<u64> {
        match self.debounce {
            Debounce::Idle => None,
            Debounce::PendingCommit {
                deadline_ms,
            } => Some(deadline_ms),
        }
    }

    /// Record a keystroke. Restarts the quiet period.
    pub fn input(&mut self, term: impl Into<String>, now_ms: u64) {
        self.search_term = term.into();
        self.debounce = Debounce::PendingCommit {
            deadline_ms: now_ms.saturating_add(self.delay_ms),
        };
    }

    /// Commit the search term if its quiet period is over.
    ///
    /// Returns the new filters when the committed keyword changed, `None`
    /// when nothing is due or the keyword is unchanged. A term that is empty
    /// or only whitespace commits as no keyword, so `"   "` is never sent to
    /// the catalog.
    pub fn poll(&mut self, now_ms: u64) -> Option<RecipeFilters> {
        let Debounce::PendingCommit {
            deadline_ms,
        } = self.debounce
        else {
            return None;
        };
        if now_ms < deadline_ms {
            return None;
        }

        self.debounce = Debounce::Idle;
        let keyword = if self.search_term.trim().is_empty() {
            None
        } else {
            Some(self.search_term.clone())
        };
        if keyword == self.filters.keyword {
            return None;
        }
        self.filters.keyword = keyword;
        Some(self.filters.clone())
    }

    /// Select a category (or "all" with `None`). Commits at once and leaves
    /// any pending keyword commit untouched.
    pub fn set_category(&mut self, category_id: Option<CategoryId>) -> Option<RecipeFilters> {
        let category_id = category_id.filter(|id| !id.trim().is_empty());
        if category_id == self.filters.category_id {
            return None;
        }
        self.filters.category_id = category_id;
        Some(self.filters.clone())
    }

    /// Drop the category filter.
    pub fn clear_category(&mut self) -> Option<RecipeFilters> {
        self.set_category(None)
    }

    /// Empty the search input. The keyword is dropped through the usual
    /// debounced path.
    pub fn clear_keyword(&mut self, now_ms: u64) {
        self.input(String::new(), now_ms);
    }

    /// Clear everything and cancel a pending keyword commit. Always yields
    /// the (empty) filters so the caller refetches the unscoped list.
    pub fn reset(&mut self) -> RecipeFilters {
        self.filters = RecipeFilters::default();
        self.search_term.clear();
        self.debounce = Debounce::Idle;
        self.filters.clone()
    }

    /// Whether the reset action has anything to clear.
    pub fn can_reset(&self) -> bool {
        self.filters.category_id.is_some() || !self.search_term.is_empty()
    }

    /// Tags describing the committed filters, keyword first.
    pub fn active_filters(&self, categories: &[Category]) -> Vec<ActiveFilter> {
        let mut active = Vec::new();
        if let Some(keyword) = self.filters.keyword.as_ref() {
            active.push(ActiveFilter::Keyword(keyword.clone()));
        }
        if let Some(id) = self.filters.category_id.as_ref() {
            let label = categories
                .iter()
                .find(|category| &category.id == id)
                .map(|category| category.name.clone())
                .unwrap_or_else(|| id.clone());
            active.push(ActiveFilter::Category {
                id: id.clone(),
                label,
            });
        }
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> FilterState {
        FilterState::with_delay(Duration::from_millis(500))
    }

    #[test]
    fn rapid_keystrokes_commit_once_with_final_value() {
        let mut filters = state();
        let mut commits = Vec::new();

        for (at, term) in [(0, "kebab"), (120, "kebab "), (260, "kebab k")] {
            filters.input(term, at);
            commits.extend(filters.poll(at));
        }
        assert_eq!(filters.search_term(), "kebab k");

        commits.extend(filters.poll(500));
        commits.extend(filters.poll(759));
        assert!(commits.is_empty());

        commits.extend(filters.poll(760));
        commits.extend(filters.poll(2_000));
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].keyword.as_deref(), Some("kebab k"));
    }

    #[test]
    fn pause_between_keystrokes_commits_twice() {
        let mut filters = state();
        let mut commits = Vec::new();

        filters.input("kebab", 0);
        commits.extend(filters.poll(500));
        filters.input("kebabs", 600);
        commits.extend(filters.poll(1_100));

        let keywords: Vec<_> = commits.iter().map(|f| f.keyword.clone()).collect();
        assert_eq!(keywords, vec![Some("kebab".to_string()), Some("kebabs".to_string())]);
    }

    #[test]
    fn category_commits_immediately_without_touching_pending_keyword() {
        let mut filters = state();
        filters.input("dolma", 0);

        let committed = filters.set_category(Some("c2".to_string()));
        assert_eq!(
            committed,
            Some(RecipeFilters {
                category_id: Some("c2".to_string()),
                keyword: None,
            })
        );
        assert_eq!(filters.next_deadline(), Some(500));

        let committed = filters.poll(500).expect("keyword commit");
        assert_eq!(committed.category_id.as_deref(), Some("c2"));
        assert_eq!(committed.keyword.as_deref(), Some("dolma"));
    }

    #[test]
    fn reselecting_same_category_is_not_a_commit() {
        let mut filters = state();
        assert!(filters.set_category(Some("c1".to_string())).is_some());
        assert!(filters.set_category(Some("c1".to_string())).is_none());
        assert!(filters.clear_category().is_some());
        assert!(filters.filters().is_empty());
    }

    #[test]
    fn reset_clears_everything_and_cancels_pending_commit() {
        let mut filters = state();
        filters.set_category(Some("c1".to_string()));
        filters.input("pilav", 0);
        filters.poll(500);
        filters.input("pilavi", 600);
        assert!(filters.can_reset());

        let committed = filters.reset();

        assert!(committed.is_empty());
        assert_eq!(filters.search_term(), "");
        assert_eq!(filters.debounce(), Debounce::Idle);
        assert_eq!(filters.poll(10_000), None);
        assert!(!filters.can_reset());
    }

    #[test]
    fn clearing_keyword_goes_through_debounce() {
        let mut filters = state();
        filters.input("baklava", 0);
        filters.poll(500);

        filters.clear_keyword(1_000);
        assert_eq!(filters.filters().keyword.as_deref(), Some("baklava"));

        let committed = filters.poll(1_500).expect("keyword cleared");
        assert_eq!(committed.keyword, None);
    }

    #[test]
    fn whitespace_only_search_commits_as_no_keyword() {
        let mut filters = state();
        filters.input("   ", 0);
        assert_eq!(filters.poll(500), None);
        assert_eq!(filters.filters().keyword, None);
        assert!(filters.can_reset());
    }

    #[test]
    fn query_pairs_skip_absent_filters() {
        let only_keyword = RecipeFilters {
            category_id: None,
            keyword: Some("köfte".to_string()),
        };
        assert_eq!(only_keyword.query_pairs(), vec![("keyword", "köfte")]);
        assert!(RecipeFilters::default().query_pairs().is_empty());
    }

    #[test]
    fn blank_parts_mean_no_filter() {
        let filters = RecipeFilters::from_parts(Some(" ".to_string()), Some("pide".to_string()));
        assert_eq!(filters.category_id, None);
        assert_eq!(filters.keyword.as_deref(), Some("pide"));
        assert!(RecipeFilters::from_parts(None, Some(String::new())).is_empty());
    }

    #[test]
    fn active_filters_resolve_category_names() {
        let mut filters = state();
        filters.set_category(Some("c1".to_string()));
        filters.input("menemen", 0);
        filters.poll(500);
        let categories = vec![Category {
            id: "c1".to_string(),
            name: "Breakfast".to_string(),
            description: String::new(),
        }];

        let labels: Vec<String> = filters
            .active_filters(&categories)
            .iter()
            .map(ActiveFilter::label)
            .collect();

        assert_eq!(labels, vec!["Search: menemen", "Category: Breakfast"]);
    }
}
