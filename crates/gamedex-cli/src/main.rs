//! Gamedex CLI — browse the game catalog and manage your library
//!
//! Reads two opaque secrets from the environment: `RAWG_API_KEY` for the
//! catalog and `CLERK_PUBLISHABLE_KEY` for the hosted identity provider.

use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::warn;

use gamedex::app::{BrowseController, BrowseFilters, LOAD_FAILED_MESSAGE};
use gamedex::config;
use gamedex::data::library::LibraryManager;
use gamedex::data::session::Session;
use gamedex::data::types::GameDetail;
use gamedex::error::{AppError, Result};
use gamedex::providers::{CatalogProvider, RawgProvider};

/// Shown in place of a missing cover image
const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200";

/// How long a one-shot browse waits before giving up
const SEARCH_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Parser)]
#[command(name = "gamedex", about = "Game catalog browser with a persisted library", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Browse the catalog with filters and search
    Browse {
        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Genre slug (e.g., "action", "adventure", "role-playing-games-rpg")
        #[arg(long)]
        genre: Option<String>,
        /// Release year
        #[arg(long)]
        year: Option<u16>,
        /// Ordering key ("-rating" = most popular first, "rating" = least)
        #[arg(long)]
        ordering: Option<String>,
        /// Tag slug (repeat for several tags)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Free-text search
        #[arg(long)]
        search: Option<String>,
    },
    /// Show full detail for a single game
    Game {
        /// Catalog id of the game
        id: u64,
    },
    /// Manage the favorited-games library
    Library {
        #[command(subcommand)]
        action: LibraryAction,
    },
    /// Sign in through the hosted identity provider
    Login {
        /// Account label to sign in as
        account: String,
    },
    /// Sign out
    Logout,
}

#[derive(Subcommand)]
enum LibraryAction {
    /// List library entries in insertion order
    List,
    /// Add a game to the library by catalog id
    Add { id: u64 },
    /// Remove a game from the library by catalog id
    Remove { id: u64 },
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Browse {
            page,
            genre,
            year,
            ordering,
            tags,
            search,
        } => {
            if !load_session().is_signed_in() {
                println!("Please sign in to view games.");
                return Ok(());
            }
            let filters = BrowseFilters {
                category: genre,
                year,
                ordering,
                tags,
            };
            browse(&filters, page, search.as_deref())
        }
        Command::Game { id } => {
            if !load_session().is_signed_in() {
                println!("Please sign in to view games.");
                return Ok(());
            }
            show_game(id)
        }
        Command::Library { action } => {
            if !load_session().is_signed_in() {
                println!("Please sign in to view your library.");
                return Ok(());
            }
            library_command(action)
        }
        Command::Login { account } => {
            // The hosted provider handles the actual authentication; its key
            // is passed through unchanged and only checked for presence.
            config::identity_publishable_key()?;
            let mut session = load_session();
            session.sign_in(&account);
            session.save()?;
            println!("Signed in as {account}.");
            Ok(())
        }
        Command::Logout => {
            let mut session = load_session();
            session.sign_out();
            session.save()?;
            println!("Signed out.");
            Ok(())
        }
    }
}

/// A broken session file should not brick the CLI; fall back to signed-out.
fn load_session() -> Session {
    Session::load().unwrap_or_else(|e| {
        warn!("could not load session, treating as signed out: {e}");
        Session::default()
    })
}

fn catalog_provider() -> Result<RawgProvider> {
    RawgProvider::new(config::catalog_api_key()?)
}

fn browse(filters: &BrowseFilters, page: u32, search: Option<&str>) -> Result<()> {
    let library = LibraryManager::load()?;
    let query = filters.to_query(page, search);

    let mut controller = BrowseController::new(Arc::new(catalog_provider()?));
    controller.search(query);
    if !controller.wait(SEARCH_TIMEOUT) {
        println!("{LOAD_FAILED_MESSAGE}");
        return Ok(());
    }

    let state = controller.state();
    let state = state.lock().unwrap_or_else(|e| e.into_inner());

    if let Some(ref error) = state.error {
        println!("{error}");
        return Ok(());
    }
    if state.games.is_empty() {
        println!("No games found with the selected filters. Try adjusting your filters!");
        return Ok(());
    }

    for game in &state.games {
        let marker = if library.contains(game.id) { "*" } else { " " };
        let image = game.background_image.as_deref().unwrap_or(PLACEHOLDER_IMAGE);
        println!("{marker} [{:>7}] {}  Rating: {}/5", game.id, game.name, game.rating);
        println!("            {image}");
    }

    if let Some(total) = state.total {
        let more = if state.has_more {
            " (more pages available)"
        } else {
            ""
        };
        println!();
        println!(
            "Page {page}: showing {} of {total} games{more}",
            state.games.len()
        );
    }
    Ok(())
}

fn show_game(id: u64) -> Result<()> {
    let provider = catalog_provider()?;
    match provider.get_game(id) {
        Ok(detail) => {
            print_detail(&detail);
            Ok(())
        }
        Err(AppError::NotFound(_)) => {
            println!("Game not found.");
            Ok(())
        }
        Err(e) => {
            warn!("detail fetch failed: {e}");
            println!("Failed to load game details. Please try again later.");
            Ok(())
        }
    }
}

fn print_detail(detail: &GameDetail) {
    println!("{}", detail.name);
    println!("Rating: {}/5", detail.rating);
    println!(
        "{}",
        detail.background_image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    );
    println!();
    println!("{}", detail.description);

    if let Some(ref reqs) = detail.requirements {
        println!();
        println!("System Requirements");
        if let Some(ref minimum) = reqs.minimum {
            println!("Minimum: {minimum}");
        }
        if let Some(ref recommended) = reqs.recommended {
            println!("Recommended: {recommended}");
        }
    }

    println!();
    if detail.screenshots.is_empty() {
        println!("No screenshots available.");
    } else {
        println!("Screenshots");
        for shot in &detail.screenshots {
            println!("  {}", shot.image);
        }
    }
}

fn library_command(action: LibraryAction) -> Result<()> {
    let mut library = LibraryManager::load()?;

    match action {
        LibraryAction::List => {
            if library.is_empty() {
                println!("Your library is empty. Add some games from the home page!");
                return Ok(());
            }
            println!("Your Library ({})", library.count());
            for game in library.games() {
                println!("  [{:>7}] {}  Rating: {}/5", game.id, game.name, game.rating);
            }
        }
        LibraryAction::Add { id } => {
            let provider = catalog_provider()?;
            match provider.get_game(id) {
                Ok(detail) => {
                    let game = detail.summary();
                    let name = game.name.clone();
                    if library.add(game) {
                        println!("Added {name} to your library.");
                    } else {
                        println!("{name} is already in your library.");
                    }
                }
                Err(AppError::NotFound(_)) => println!("Game not found."),
                Err(e) => {
                    warn!("detail fetch failed: {e}");
                    println!("Failed to load game details. Please try again later.");
                }
            }
        }
        LibraryAction::Remove { id } => {
            if library.remove(id) {
                println!("Removed game {id} from your library.");
            } else {
                println!("Game {id} is not in your library.");
            }
        }
    }
    Ok(())
}
