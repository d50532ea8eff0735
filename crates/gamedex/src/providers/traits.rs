//! Catalog provider trait
//!
//! Defines the interface that game-catalog directory services implement.

use crate::data::types::GameDetail;
use crate::error::Result;

use super::types::{GamePage, GameQuery};

/// A source of game-catalog listings
///
/// Implementations provide paginated search/browse and single-game lookup
/// against a specific catalog service.
pub trait CatalogProvider: Send + Sync {
    /// Display name for the provider (e.g., "RAWG")
    fn name(&self) -> &'static str;

    /// Machine-readable identifier (e.g., "rawg")
    fn id(&self) -> &'static str;

    /// Fetch one page of games matching the query
    fn search(&self, query: &GameQuery) -> Result<GamePage>;

    /// Fetch full detail for a single game
    fn get_game(&self, id: u64) -> Result<GameDetail>;
}
