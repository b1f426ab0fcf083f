//! Browser state and the filter/pagination pipeline.
//!
//! All list state lives here, away from the rendering layer:
//! - the full dataset as last fetched
//! - the filtered dataset derived from the current query
//! - the page cursor governing how much of the filtered set is visible
//! - the loading flag for the initial fetch
//!
//! Derivation is explicit rather than reactive: every state-changing
//! operation re-derives the filtered set first and the visible prefix
//! second, in that fixed order.

use crate::domain::Country;

/// Number of countries revealed per page.
pub const PAGE_SIZE: usize = 10;

/// Derives the filtered dataset from the full dataset and a query.
///
/// Matches are case-insensitive substring matches against the common
/// name, preserving the original order. Records without a name never
/// match, regardless of the query.
pub fn derive_filtered(countries: &[Country], query: &str) -> Vec<Country> {
    let needle = query.to_lowercase();
    countries
        .iter()
        .filter(|country| {
            country
                .display_name()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Length of the visible prefix for a filtered set of `filtered_len`
/// entries at page cursor `page`.
pub fn visible_len(filtered_len: usize, page: usize) -> usize {
    (page * PAGE_SIZE).min(filtered_len)
}

/// List state for the country browser.
#[derive(Debug, Clone, Default)]
pub struct BrowserState {
    /// Full dataset as last fetched; replaced wholesale on load.
    countries: Vec<Country>,
    /// Filtered dataset derived from `countries` and `query`.
    filtered: Vec<Country>,
    /// Current search query.
    query: String,
    /// Page cursor, always >= 1.
    page: usize,
    /// True from startup until the fetch settles.
    loading: bool,
}

impl BrowserState {
    /// Creates the initial state: empty datasets, loading in progress.
    pub fn new() -> Self {
        Self {
            countries: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            page: 1,
            loading: true,
        }
    }

    /// Replaces the full dataset after a successful fetch.
    ///
    /// Re-derives the filtered set against the current query, resets the
    /// page cursor, and clears the loading flag.
    pub fn set_countries(&mut self, countries: Vec<Country>) {
        self.countries = countries;
        self.refilter();
        self.loading = false;
    }

    /// Records a failed fetch: the datasets stay empty and the loading
    /// flag clears. No error state is kept here; the caller logs it.
    pub fn load_failed(&mut self) {
        self.loading = false;
    }

    /// Updates the search query, re-deriving the filtered set and
    /// resetting the page cursor to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    /// Advances the page cursor by one, revealing the next page.
    ///
    /// A no-op when the visible prefix already covers the whole filtered
    /// set. Returns whether the cursor moved.
    pub fn advance_page(&mut self) -> bool {
        if self.visible().len() < self.filtered.len() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// The visible prefix of the filtered dataset.
    pub fn visible(&self) -> &[Country] {
        &self.filtered[..visible_len(self.filtered.len(), self.page)]
    }

    /// Number of countries matching the current query.
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Current search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current page cursor.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Whether the initial fetch is still in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether more filtered entries remain beyond the visible prefix.
    pub fn has_more(&self) -> bool {
        self.visible().len() < self.filtered.len()
    }

    // Filter before repaginating: the visible prefix is only meaningful
    // against the freshly derived filtered set.
    fn refilter(&mut self) {
        self.filtered = derive_filtered(&self.countries, &self.query);
        self.page = 1;
    }
}
