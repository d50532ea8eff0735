//! Core catalog data types
//!
//! Shared types used across the data module and the providers.

use serde::{Deserialize, Serialize};

/// A catalog game as rendered in lists and stored in the library
///
/// Immutable once stored: the library only adds or removes whole entries,
/// it never rewrites fields of one it already holds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Game {
    /// Catalog identifier (unique key)
    pub id: u64,
    /// Display name
    pub name: String,
    /// Cover image URL; may be absent (views substitute a placeholder)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    /// Average rating on the catalog's 0-5 scale
    #[serde(default)]
    pub rating: f64,
}

impl Game {
    /// Create a new game with minimal info
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            background_image: None,
            rating: 0.0,
        }
    }

    /// Set the cover image URL
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.background_image = Some(url.into());
        self
    }

    /// Set the cover image URL from an Option (no-op if None)
    pub fn with_image_opt(mut self, url: Option<String>) -> Self {
        self.background_image = url;
        self
    }

    /// Set the rating
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }
}

/// Full detail for a single game (single-item endpoint payload)
#[derive(Debug, Clone, PartialEq)]
pub struct GameDetail {
    pub id: u64,
    pub name: String,
    /// Plain-text description; "No description available." when the catalog
    /// omits one
    pub description: String,
    pub background_image: Option<String>,
    pub rating: f64,
    /// PC system requirements, when the catalog reports them
    pub requirements: Option<SystemRequirements>,
    pub screenshots: Vec<Screenshot>,
}

impl GameDetail {
    /// The list-entry view of this game (what the library stores)
    pub fn summary(&self) -> Game {
        Game {
            id: self.id,
            name: self.name.clone(),
            background_image: self.background_image.clone(),
            rating: self.rating,
        }
    }
}

/// Minimum/recommended system requirements for the PC platform
#[derive(Debug, Clone, PartialEq)]
pub struct SystemRequirements {
    pub minimum: Option<String>,
    pub recommended: Option<String>,
}

/// A single screenshot attached to a game's detail
#[derive(Debug, Clone, PartialEq)]
pub struct Screenshot {
    pub id: u64,
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_creation() {
        let game = Game::new(42, "Test Game");
        assert_eq!(game.id, 42);
        assert_eq!(game.name, "Test Game");
        assert_eq!(game.background_image, None);
        assert_eq!(game.rating, 0.0);
    }

    #[test]
    fn test_game_builder() {
        let game = Game::new(1, "Full Game")
            .with_image("http://img.example.com/cover.jpg")
            .with_rating(4.5);
        assert_eq!(
            game.background_image,
            Some("http://img.example.com/cover.jpg".to_string())
        );
        assert_eq!(game.rating, 4.5);
    }

    #[test]
    fn test_game_with_image_opt() {
        let game = Game::new(1, "A").with_image_opt(Some("http://img".to_string()));
        assert_eq!(game.background_image, Some("http://img".to_string()));

        let game = Game::new(1, "A").with_image_opt(None);
        assert_eq!(game.background_image, None);
    }

    #[test]
    fn test_game_serde_skips_absent_image() {
        let game = Game::new(7, "No Cover").with_rating(3.2);
        let json = serde_json::to_string(&game).unwrap();
        assert!(!json.contains("background_image"));

        let back: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game);
    }

    #[test]
    fn test_game_deserialize_missing_optional_fields() {
        let json = r#"{"id": 3, "name": "Bare"}"#;
        let game: Game = serde_json::from_str(json).unwrap();
        assert_eq!(game.id, 3);
        assert_eq!(game.name, "Bare");
        assert_eq!(game.background_image, None);
        assert_eq!(game.rating, 0.0);
    }

    #[test]
    fn test_detail_summary() {
        let detail = GameDetail {
            id: 10,
            name: "Detailed".to_string(),
            description: "A long description".to_string(),
            background_image: Some("http://img".to_string()),
            rating: 4.1,
            requirements: Some(SystemRequirements {
                minimum: Some("Potato".to_string()),
                recommended: None,
            }),
            screenshots: vec![Screenshot {
                id: 1,
                image: "http://shot".to_string(),
            }],
        };

        let game = detail.summary();
        assert_eq!(game.id, 10);
        assert_eq!(game.name, "Detailed");
        assert_eq!(game.background_image, Some("http://img".to_string()));
        assert_eq!(game.rating, 4.1);
    }
}
