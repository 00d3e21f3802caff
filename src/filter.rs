//! Filter engine.
//!
//! Derives a filtered, alphabetically sorted view from the catalog store
//! given the current filter state. A record passes when all active
//! predicates match; empty/unset filters are always-true. Also provides
//! search suggestions and the restartable debounce timer that gates
//! recomputation while the user is typing.

use crate::catalog::{CatalogStore, Tool};
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// Maximum number of search suggestions.
pub const MAX_SUGGESTIONS: usize = 5;

/// Minimum query length before suggestions are offered.
pub const MIN_SUGGESTION_CHARS: usize = 2;

/// Default debounce delay for search input.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// The combination of active search/category/platform/developer/favorites
/// criteria. Transient, derived from UI, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Case-insensitive substring match against tool names
    pub search: String,
    /// Exact category match
    pub category: Option<String>,
    /// Platform membership match
    pub platform: Option<String>,
    /// Exact developer match
    pub developer: Option<String>,
    /// Restrict to the favorite set
    pub favorites_only: bool,
}

impl FilterState {
    /// Whether no predicate is active.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.category.is_none()
            && self.platform.is_none()
            && self.developer.is_none()
            && !self.favorites_only
    }

    /// Drop all active predicates.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether a single tool passes every active predicate.
    pub fn matches(&self, tool: &Tool, favorites: &BTreeSet<String>) -> bool {
        let search = self.search.to_lowercase();
        let matches_search = search.is_empty() || tool.name.to_lowercase().contains(&search);
        let matches_category = self.category.as_ref().is_none_or(|c| &tool.category == c);
        let matches_platform = self.platform.as_ref().is_none_or(|p| tool.platforms.contains(p));
        let matches_developer = self.developer.as_ref().is_none_or(|d| &tool.developer == d);
        let matches_favorites = !self.favorites_only || favorites.contains(&tool.id);

        matches_search && matches_category && matches_platform && matches_developer && matches_favorites
    }
}

/// Apply the filter state to the store.
///
/// Returns references to the passing tools, sorted alphabetically by name
/// (case-insensitive). An empty result is a valid terminal state.
pub fn apply<'a>(store: &'a CatalogStore, state: &FilterState) -> Vec<&'a Tool> {
    let mut view: Vec<&Tool> = store
        .tools()
        .iter()
        .filter(|tool| state.matches(tool, store.favorites()))
        .collect();
    view.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    view
}

/// Search suggestions for a partial query.
///
/// Up to [`MAX_SUGGESTIONS`] names whose lowercase form contains the
/// lowercased query. Queries shorter than [`MIN_SUGGESTION_CHARS`] yield
/// nothing. Linear scan, not an index.
pub fn suggest(store: &CatalogStore, query: &str) -> Vec<String> {
    if query.chars().count() < MIN_SUGGESTION_CHARS {
        return Vec::new();
    }
    let query = query.to_lowercase();
    store
        .tools()
        .iter()
        .filter(|tool| tool.name.to_lowercase().contains(&query))
        .take(MAX_SUGGESTIONS)
        .map(|tool| tool.name.clone())
        .collect()
}

/// Restartable delay timer with last-write-wins semantics.
///
/// Each `touch` pushes the deadline out by the full delay; `fire` reports
/// true exactly once after the deadline passes. Used to debounce search
/// input so the view is not recomputed on every keystroke.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Create a debouncer with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self { delay, deadline: None }
    }

    /// Restart the timer from `now`.
    pub fn touch(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Whether a timer is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Check whether the deadline has passed. Consumes the pending timer.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}
