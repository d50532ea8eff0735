//! Browse state and commands
//!
//! `BrowseCommand` is the controller's command type; `BrowseState` is the
//! snapshot the view layer renders.

use crate::data::types::Game;
use crate::providers::types::{GamePage, GameQuery};

/// Filter widget state, assembled into a `GameQuery` per page fetch
///
/// Empty/unset filters are omitted from the query entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowseFilters {
    /// Genre slug (e.g., "action", "role-playing-games-rpg")
    pub category: Option<String>,
    /// Release year
    pub year: Option<u16>,
    /// Ordering key ("-rating" = most popular first, "rating" = least)
    pub ordering: Option<String>,
    /// Tag slugs
    pub tags: Vec<String>,
}

impl BrowseFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all filters (the sidebar's reset button)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build the query for a page under these filters
    pub fn to_query(&self, page: u32, search: Option<&str>) -> GameQuery {
        let mut query = GameQuery::new().page(page);
        if let Some(ref category) = self.category {
            query = query.genres(category.clone());
        }
        if let Some(year) = self.year {
            query = query.year(year);
        }
        if let Some(term) = search.filter(|t| !t.is_empty()) {
            query = query.search(term);
        }
        if let Some(ref ordering) = self.ordering {
            query = query.ordering(ordering.clone());
        }
        if !self.tags.is_empty() {
            query = query.tags(self.tags.clone());
        }
        query
    }
}

/// Commands processed by the browse controller
pub enum BrowseCommand {
    /// Run a search; its result replaces the current list
    Search(GameQuery),

    /// Internal: a worker finished a search (not sent by frontends)
    InternalSearchDone {
        generation: u64,
        result: Result<GamePage, String>,
    },
}

/// Snapshot of the browse view state
#[derive(Debug, Clone, Default)]
pub struct BrowseState {
    /// Games on the current page
    pub games: Vec<Game>,
    /// Total result count, when the catalog reports it
    pub total: Option<u64>,
    /// Whether another page exists after this one
    pub has_more: bool,
    /// True while a search is in flight
    pub is_loading: bool,
    /// User-visible error from the last search, if it failed
    pub error: Option<String>,
}
