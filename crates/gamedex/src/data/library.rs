//! Favorited-games library
//!
//! In-memory, insertion-ordered collection of library entries, mirrored to
//! durable storage after every mutation.

use crate::data::storage;
use crate::data::types::Game;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::warn;

/// Library data file name
const LIBRARY_FILE: &str = "library.json";

/// Library file format version for migrations
const LIBRARY_VERSION: u32 = 1;

/// Library file structure
#[derive(Debug, Serialize, Deserialize)]
struct LibraryFile {
    version: u32,
    games: Vec<Game>,
}

/// Persistence port for the library
///
/// All reads and writes go through this trait so tests (and ephemeral
/// sessions) can substitute an in-memory fake for the JSON file.
pub trait LibraryStorage: Send {
    /// Read the persisted sequence. `Ok(None)` means no state exists yet.
    fn load(&self) -> Result<Option<Vec<Game>>>;

    /// Replace the persisted sequence with `games`.
    fn save(&mut self, games: &[Game]) -> Result<()>;
}

/// JSON-file storage under the app config directory
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Storage at the default location
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: storage::data_path(LIBRARY_FILE)?,
        })
    }

    /// Storage at a specific path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LibraryStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<Vec<Game>>> {
        Ok(storage::load_from::<LibraryFile>(&self.path)?.map(|f| f.games))
    }

    fn save(&mut self, games: &[Game]) -> Result<()> {
        let file = LibraryFile {
            version: LIBRARY_VERSION,
            games: games.to_vec(),
        };
        storage::save_to(&self.path, &file)
    }
}

/// In-memory storage, for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStorage {
    games: Option<Vec<Game>>,
}

impl MemoryStorage {
    /// Empty storage (no persisted state yet)
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a persisted sequence
    pub fn with_games(games: Vec<Game>) -> Self {
        Self { games: Some(games) }
    }
}

impl LibraryStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<Game>>> {
        Ok(self.games.clone())
    }

    fn save(&mut self, games: &[Game]) -> Result<()> {
        self.games = Some(games.to_vec());
        Ok(())
    }
}

/// Manages the favorited-games library
///
/// Entries keep insertion order and no two entries share an id. Every
/// mutation rewrites the full persisted sequence through the storage port.
/// Persistence failures are logged; the in-memory collection stays
/// authoritative for the rest of the session either way.
pub struct LibraryManager {
    games: Vec<Game>,
    storage: Box<dyn LibraryStorage>,
}

impl LibraryManager {
    /// Open a library backed by the given storage
    ///
    /// Absent, unreadable, or unparsable persisted state yields an empty
    /// library. An empty library is a safe default, so the failure is
    /// logged rather than surfaced.
    pub fn open(storage: Box<dyn LibraryStorage>) -> Self {
        let games = match storage.load() {
            Ok(Some(games)) => dedup_by_id(games),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("could not load library, starting empty: {e}");
                Vec::new()
            }
        };
        Self { games, storage }
    }

    /// Open the library at the default storage location
    pub fn load() -> Result<Self> {
        Ok(Self::open(Box::new(JsonFileStorage::new()?)))
    }

    /// Add a game; no-op if an entry with the same id already exists.
    ///
    /// New entries append to the end of the sequence. Returns whether the
    /// game was added.
    pub fn add(&mut self, game: Game) -> bool {
        if self.contains(game.id) {
            return false;
        }
        self.games.push(game);
        self.persist();
        true
    }

    /// Remove the entry with this id, if present.
    ///
    /// The sequence is re-persisted whether or not anything was removed.
    /// Returns whether an entry was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.games.len();
        self.games.retain(|g| g.id != id);
        let removed = self.games.len() != before;
        self.persist();
        removed
    }

    /// Remove the game if present, add it otherwise.
    ///
    /// Returns whether the game is in the library afterwards.
    pub fn toggle(&mut self, game: Game) -> bool {
        if self.contains(game.id) {
            self.remove(game.id);
            false
        } else {
            self.add(game);
            true
        }
    }

    /// Whether an entry with this id exists
    pub fn contains(&self, id: u64) -> bool {
        self.games.iter().any(|g| g.id == id)
    }

    /// All entries, in insertion order
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// Number of entries
    pub fn count(&self) -> usize {
        self.games.len()
    }

    /// Whether the library is empty
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    fn persist(&mut self) {
        if let Err(e) = self.storage.save(&self.games) {
            warn!("could not persist library: {e}");
        }
    }
}

/// Drop later duplicates of an id, keeping the first occurrence and order.
fn dedup_by_id(games: Vec<Game>) -> Vec<Game> {
    let mut seen = HashSet::new();
    games.into_iter().filter(|g| seen.insert(g.id)).collect()
}
