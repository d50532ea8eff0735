//! Game catalog providers
//!
//! Providers for discovering games (RAWG today; the trait leaves room for
//! other directories).

pub mod rawg;
pub mod traits;
pub mod types;

// Re-exports
pub use rawg::RawgProvider;
pub use traits::CatalogProvider;
pub use types::{GamePage, GameQuery};
