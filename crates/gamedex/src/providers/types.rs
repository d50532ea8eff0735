//! Shared provider types
//!
//! Query and result types used across catalog providers.

use crate::config::catalog::PAGE_SIZE;
use crate::data::types::Game;

/// Parameters for a catalog page fetch
///
/// Unset fields are omitted from the request entirely, matching how the
/// catalog API treats absent vs. empty parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GameQuery {
    /// 1-based page number
    pub page: u32,
    /// Results per page
    pub page_size: usize,
    /// Free-text search
    pub search: Option<String>,
    /// Genre slug filter (e.g., "action", "role-playing-games-rpg")
    pub genres: Option<String>,
    /// Release-year filter; expands to a full-year date range
    pub year: Option<u16>,
    /// Ordering key (e.g., "-rating"); passed through unchanged
    pub ordering: Option<String>,
    /// Tag slugs, joined with commas on the wire
    pub tags: Vec<String>,
}

impl Default for GameQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PAGE_SIZE,
            search: None,
            genres: None,
            year: None,
            ordering: None,
            tags: Vec::new(),
        }
    }
}

impl GameQuery {
    /// A query for the first page with the default page size
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number (clamped to at least 1)
    pub fn page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Set the free-text search term
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Set the genre slug filter
    pub fn genres(mut self, genres: impl Into<String>) -> Self {
        self.genres = Some(genres.into());
        self
    }

    /// Set the release-year filter
    pub fn year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    /// Set the ordering key
    pub fn ordering(mut self, ordering: impl Into<String>) -> Self {
        self.ordering = Some(ordering.into());
        self
    }

    /// Set the tag filters
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// The same query without its ordering parameter
    pub fn without_ordering(&self) -> Self {
        let mut query = self.clone();
        query.ordering = None;
        query
    }

    /// Render as catalog API query parameters
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ];
        if let Some(ref genres) = self.genres {
            params.push(("genres", genres.clone()));
        }
        if let Some(year) = self.year {
            params.push(("dates", format!("{year}-01-01,{year}-12-31")));
        }
        if let Some(ref search) = self.search {
            params.push(("search", search.clone()));
        }
        if let Some(ref ordering) = self.ordering {
            params.push(("ordering", ordering.clone()));
        }
        if !self.tags.is_empty() {
            params.push(("tags", self.tags.join(",")));
        }
        params
    }
}

/// One page of catalog results
#[derive(Debug, Clone)]
pub struct GamePage {
    /// Games on this page
    pub games: Vec<Game>,
    /// Total result count across all pages (if the catalog reports it)
    pub total: Option<u64>,
    /// Whether more pages are available beyond this one
    pub has_more: bool,
}

impl GamePage {
    /// Create an empty result page
    pub fn empty() -> Self {
        Self {
            games: Vec::new(),
            total: Some(0),
            has_more: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults() {
        let query = GameQuery::new();
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, PAGE_SIZE);
        assert_eq!(query.search, None);
        assert!(query.tags.is_empty());
    }

    #[test]
    fn test_query_page_clamped() {
        let query = GameQuery::new().page(0);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_to_params_minimal() {
        let params = GameQuery::new().to_params();
        assert_eq!(
            params,
            vec![
                ("page", "1".to_string()),
                ("page_size", PAGE_SIZE.to_string()),
            ]
        );
    }

    #[test]
    fn test_to_params_year_expands_to_date_range() {
        let params = GameQuery::new().year(2023).to_params();
        assert!(params.contains(&("dates", "2023-01-01,2023-12-31".to_string())));
    }

    #[test]
    fn test_to_params_tags_joined_with_commas() {
        let params = GameQuery::new()
            .tags(vec!["indie".to_string(), "open-world".to_string()])
            .to_params();
        assert!(params.contains(&("tags", "indie,open-world".to_string())));
    }

    #[test]
    fn test_to_params_full() {
        let params = GameQuery::new()
            .page(3)
            .genres("action")
            .year(2020)
            .search("zelda")
            .ordering("-rating")
            .tags(vec!["multiplayer".to_string()])
            .to_params();

        assert_eq!(
            params,
            vec![
                ("page", "3".to_string()),
                ("page_size", PAGE_SIZE.to_string()),
                ("genres", "action".to_string()),
                ("dates", "2020-01-01,2020-12-31".to_string()),
                ("search", "zelda".to_string()),
                ("ordering", "-rating".to_string()),
                ("tags", "multiplayer".to_string()),
            ]
        );
    }

    #[test]
    fn test_without_ordering() {
        let query = GameQuery::new().genres("action").ordering("-rating");
        let unordered = query.without_ordering();

        assert_eq!(unordered.ordering, None);
        assert_eq!(unordered.genres, Some("action".to_string()));
        assert_eq!(unordered.page, query.page);
    }

    #[test]
    fn test_game_page_empty() {
        let page = GamePage::empty();
        assert!(page.games.is_empty());
        assert_eq!(page.total, Some(0));
        assert!(!page.has_more);
    }
}
