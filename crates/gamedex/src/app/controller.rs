//! Browse controller
//!
//! Owns the catalog provider and processes search commands through a single
//! crossbeam channel. Searches run on worker threads; each dispatch bumps a
//! generation counter, and completions carrying a stale generation are
//! discarded, so only the most recent search updates the view state.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::warn;

use crate::providers::traits::CatalogProvider;
use crate::providers::types::{GamePage, GameQuery};

use super::state::{BrowseCommand, BrowseState};

/// Message shown for any search failure; the underlying error is logged.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load games. Please try again later.";

pub struct BrowseController {
    provider: Arc<dyn CatalogProvider>,
    cmd_tx: Sender<BrowseCommand>,
    cmd_rx: Receiver<BrowseCommand>,
    state: Arc<Mutex<BrowseState>>,
    /// Monotonically increasing counter to discard stale search results
    search_generation: u64,
}

impl BrowseController {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        let (cmd_tx, cmd_rx) = unbounded();
        Self {
            provider,
            cmd_tx,
            cmd_rx,
            state: Arc::new(Mutex::new(BrowseState::default())),
            search_generation: 0,
        }
    }

    /// Shared view state, for the render side
    pub fn state(&self) -> Arc<Mutex<BrowseState>> {
        Arc::clone(&self.state)
    }

    /// Sender for frontends that dispatch commands from other threads
    pub fn command_sender(&self) -> Sender<BrowseCommand> {
        self.cmd_tx.clone()
    }

    /// Run a search on a worker thread.
    ///
    /// Each call increments `search_generation`; stale results from earlier
    /// calls are discarded in `apply_search_result`.
    pub fn search(&mut self, query: GameQuery) {
        // Bump generation so any in-flight search becomes stale
        self.search_generation += 1;
        let generation = self.search_generation;

        {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            state.is_loading = true;
            state.error = None;
        }

        let provider = Arc::clone(&self.provider);
        let cmd_tx = self.cmd_tx.clone();

        std::thread::Builder::new()
            .name("catalog-search".into())
            .spawn(move || {
                let result =
                    search_with_fallback(provider.as_ref(), &query).map_err(|e| e.to_string());
                let _ = cmd_tx.send(BrowseCommand::InternalSearchDone { generation, result });
            })
            .expect("Failed to spawn catalog-search thread");
    }

    /// Process queued commands without blocking
    pub fn poll(&mut self) {
        while let Ok(cmd) = self.cmd_rx.try_recv() {
            self.handle_command(cmd);
        }
    }

    /// Block until no search is in flight (or the timeout passes).
    ///
    /// Convenience for one-shot frontends; interactive ones call `poll`.
    /// Returns false on timeout.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            let loading = self
                .state
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .is_loading;
            if !loading {
                return true;
            }

            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            match self.cmd_rx.recv_timeout(deadline - now) {
                Ok(cmd) => self.handle_command(cmd),
                Err(_) => return false,
            }
        }
    }

    fn handle_command(&mut self, cmd: BrowseCommand) {
        match cmd {
            BrowseCommand::Search(query) => self.search(query),
            BrowseCommand::InternalSearchDone { generation, result } => {
                self.apply_search_result(generation, result);
            }
        }
    }

    /// Apply a finished search — update the view state (or store the error).
    ///
    /// Results with a stale `generation` are silently discarded.
    fn apply_search_result(&mut self, generation: u64, result: Result<GamePage, String>) {
        if generation != self.search_generation {
            // A newer search was issued while this one was in flight — discard.
            return;
        }

        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.is_loading = false;
        match result {
            Ok(page) => {
                state.games = page.games;
                state.total = page.total;
                state.has_more = page.has_more;
                state.error = None;
            }
            Err(e) => {
                warn!("catalog search failed: {e}");
                state.games.clear();
                state.total = None;
                state.has_more = false;
                state.error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
    }
}

/// Run a search, retrying once without `ordering` when an ordered query
/// comes back empty.
///
/// Some ordered+filtered queries return an empty page even though the same
/// filters match games; dropping the ordering works around the upstream
/// quirk.
pub fn search_with_fallback(
    provider: &dyn CatalogProvider,
    query: &GameQuery,
) -> crate::error::Result<GamePage> {
    let page = provider.search(query)?;
    if page.games.is_empty() && query.ordering.is_some() {
        return provider.search(&query.without_ordering());
    }
    Ok(page)
}
