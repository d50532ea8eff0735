//! Browse session
//!
//! Filter state and the search controller shared by interactive frontends.

pub mod controller;
pub mod state;

pub use controller::{search_with_fallback, BrowseController, LOAD_FAILED_MESSAGE};
pub use state::{BrowseCommand, BrowseFilters, BrowseState};
