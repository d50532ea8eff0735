//! Data persistence
//!
//! Handles the favorited-games library and the session gate.

pub mod library;
pub mod session;
pub mod storage;
pub mod types;

// Re-export common types
pub use library::{JsonFileStorage, LibraryManager, LibraryStorage, MemoryStorage};
pub use session::Session;
pub use storage::{config_dir, data_path};
pub use types::{Game, GameDetail, Screenshot, SystemRequirements};
