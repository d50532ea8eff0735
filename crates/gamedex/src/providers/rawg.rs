//! RAWG API provider
//!
//! Implementation of `CatalogProvider` for the RAWG video-game database
//! (<https://rawg.io/apidocs>).

use crate::config::catalog::RAWG_BASE_URL;
use crate::data::types::{Game, GameDetail, Screenshot, SystemRequirements};
use crate::error::{AppError, Result};
use crate::network::HttpClient;

use super::traits::CatalogProvider;
use super::types::{GamePage, GameQuery};

use serde::Deserialize;

// =============================================================================
// Internal API response types (serde)
// =============================================================================

#[derive(Debug, Deserialize)]
struct RawgPage {
    #[serde(default)]
    count: u64,
    #[serde(default)]
    next: Option<String>,
    #[serde(default)]
    results: Vec<RawgGame>,
}

#[derive(Debug, Deserialize)]
struct RawgGame {
    id: u64,
    name: String,
    #[serde(default)]
    background_image: Option<String>,
    #[serde(default)]
    rating: f64,
}

#[derive(Debug, Deserialize)]
struct RawgGameDetail {
    id: u64,
    name: String,
    #[serde(default)]
    description_raw: String,
    #[serde(default)]
    background_image: Option<String>,
    #[serde(default)]
    rating: f64,
    #[serde(default)]
    platforms: Vec<RawgPlatformEntry>,
    #[serde(default)]
    screenshots: Vec<RawgScreenshot>,
}

#[derive(Debug, Deserialize)]
struct RawgPlatformEntry {
    platform: RawgPlatform,
    #[serde(default)]
    requirements: Option<RawgRequirements>,
}

#[derive(Debug, Deserialize)]
struct RawgPlatform {
    name: String,
}

#[derive(Debug, Clone, Deserialize)]
struct RawgRequirements {
    #[serde(default)]
    minimum: Option<String>,
    #[serde(default)]
    recommended: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawgScreenshot {
    id: u64,
    image: String,
}

// =============================================================================
// Payload -> domain conversion
// =============================================================================

impl From<RawgGame> for Game {
    fn from(rg: RawgGame) -> Self {
        Game::new(rg.id, rg.name)
            .with_image_opt(rg.background_image)
            .with_rating(rg.rating)
    }
}

impl From<RawgGameDetail> for GameDetail {
    fn from(rd: RawgGameDetail) -> Self {
        let description = if rd.description_raw.trim().is_empty() {
            "No description available.".to_string()
        } else {
            rd.description_raw
        };

        // Requirements come per platform; only the PC entry is rendered.
        // An entry with neither field collapses to None.
        let requirements = rd
            .platforms
            .iter()
            .find(|p| p.platform.name == "PC")
            .and_then(|p| p.requirements.clone())
            .filter(|r| r.minimum.is_some() || r.recommended.is_some())
            .map(|r| SystemRequirements {
                minimum: r.minimum,
                recommended: r.recommended,
            });

        let screenshots = rd
            .screenshots
            .into_iter()
            .map(|s| Screenshot {
                id: s.id,
                image: s.image,
            })
            .collect();

        GameDetail {
            id: rd.id,
            name: rd.name,
            description,
            background_image: rd.background_image,
            rating: rd.rating,
            requirements,
            screenshots,
        }
    }
}

// =============================================================================
// RawgProvider
// =============================================================================

/// RAWG API provider
///
/// Queries the RAWG game directory. Every request carries the caller's API
/// key as a query-string parameter.
pub struct RawgProvider {
    client: HttpClient,
    base_url: String,
    api_key: String,
}

impl RawgProvider {
    /// Create a provider against the default RAWG server
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            base_url: RAWG_BASE_URL.to_string(),
            api_key: api_key.into(),
        })
    }

    /// Create a provider with a custom base URL (for testing or mirrors)
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Build a full API URL from an endpoint path
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Query parameters with the API key prepended
    fn keyed(&self, mut params: Vec<(&'static str, String)>) -> Vec<(&'static str, String)> {
        params.insert(0, ("key", self.api_key.clone()));
        params
    }
}

impl CatalogProvider for RawgProvider {
    fn name(&self) -> &'static str {
        "RAWG"
    }

    fn id(&self) -> &'static str {
        "rawg"
    }

    fn search(&self, query: &GameQuery) -> Result<GamePage> {
        let page: RawgPage = self
            .client
            .get_json(&self.url("/games"), &self.keyed(query.to_params()))?;

        let has_more = page.next.is_some();
        let games = page.results.into_iter().map(Game::from).collect();

        Ok(GamePage {
            games,
            total: Some(page.count),
            has_more,
        })
    }

    fn get_game(&self, id: u64) -> Result<GameDetail> {
        let detail: RawgGameDetail = self
            .client
            .get_json(&self.url(&format!("/games/{id}")), &self.keyed(Vec::new()))
            .map_err(|e| match e {
                AppError::NotFound(_) => AppError::NotFound(format!("game {id}")),
                other => other,
            })?;
        Ok(detail.into())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ---- RawgGame -> Game conversion ----

    fn sample_rawg_game() -> RawgGame {
        RawgGame {
            id: 3498,
            name: "Grand Theft Auto V".to_string(),
            background_image: Some("http://media.example.com/gta5.jpg".to_string()),
            rating: 4.47,
        }
    }

    #[test]
    fn test_rawg_game_to_game() {
        let game: Game = sample_rawg_game().into();
        assert_eq!(game.id, 3498);
        assert_eq!(game.name, "Grand Theft Auto V");
        assert_eq!(
            game.background_image,
            Some("http://media.example.com/gta5.jpg".to_string())
        );
        assert_eq!(game.rating, 4.47);
    }

    #[test]
    fn test_rawg_game_missing_image() {
        let mut rg = sample_rawg_game();
        rg.background_image = None;
        let game: Game = rg.into();
        assert_eq!(game.background_image, None);
    }

    // ---- RawgGameDetail -> GameDetail conversion ----

    fn sample_detail() -> RawgGameDetail {
        RawgGameDetail {
            id: 3498,
            name: "Grand Theft Auto V".to_string(),
            description_raw: "An open-world crime epic.".to_string(),
            background_image: Some("http://media.example.com/gta5.jpg".to_string()),
            rating: 4.47,
            platforms: vec![
                RawgPlatformEntry {
                    platform: RawgPlatform {
                        name: "PlayStation 5".to_string(),
                    },
                    requirements: None,
                },
                RawgPlatformEntry {
                    platform: RawgPlatform {
                        name: "PC".to_string(),
                    },
                    requirements: Some(RawgRequirements {
                        minimum: Some("Minimum: Intel Core 2 Quad".to_string()),
                        recommended: Some("Recommended: Intel Core i5".to_string()),
                    }),
                },
            ],
            screenshots: vec![
                RawgScreenshot {
                    id: 1,
                    image: "http://media.example.com/shot1.jpg".to_string(),
                },
                RawgScreenshot {
                    id: 2,
                    image: "http://media.example.com/shot2.jpg".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_detail_conversion_basic() {
        let detail: GameDetail = sample_detail().into();
        assert_eq!(detail.id, 3498);
        assert_eq!(detail.description, "An open-world crime epic.");
        assert_eq!(detail.rating, 4.47);
        assert_eq!(detail.screenshots.len(), 2);
        assert_eq!(detail.screenshots[0].image, "http://media.example.com/shot1.jpg");
    }

    #[test]
    fn test_detail_extracts_pc_requirements() {
        let detail: GameDetail = sample_detail().into();
        let reqs = detail.requirements.expect("PC requirements");
        assert_eq!(reqs.minimum, Some("Minimum: Intel Core 2 Quad".to_string()));
        assert_eq!(
            reqs.recommended,
            Some("Recommended: Intel Core i5".to_string())
        );
    }

    #[test]
    fn test_detail_ignores_non_pc_requirements() {
        let mut rd = sample_detail();
        rd.platforms = vec![RawgPlatformEntry {
            platform: RawgPlatform {
                name: "Xbox One".to_string(),
            },
            requirements: Some(RawgRequirements {
                minimum: Some("an Xbox".to_string()),
                recommended: None,
            }),
        }];
        let detail: GameDetail = rd.into();
        assert!(detail.requirements.is_none());
    }

    #[test]
    fn test_detail_empty_requirements_collapse() {
        let mut rd = sample_detail();
        rd.platforms = vec![RawgPlatformEntry {
            platform: RawgPlatform {
                name: "PC".to_string(),
            },
            requirements: Some(RawgRequirements {
                minimum: None,
                recommended: None,
            }),
        }];
        let detail: GameDetail = rd.into();
        assert!(detail.requirements.is_none());
    }

    #[test]
    fn test_detail_empty_description_defaults() {
        let mut rd = sample_detail();
        rd.description_raw = String::new();
        let detail: GameDetail = rd.into();
        assert_eq!(detail.description, "No description available.");
    }

    #[test]
    fn test_detail_whitespace_description_defaults() {
        let mut rd = sample_detail();
        rd.description_raw = "   \n ".to_string();
        let detail: GameDetail = rd.into();
        assert_eq!(detail.description, "No description available.");
    }

    #[test]
    fn test_detail_no_screenshots() {
        let mut rd = sample_detail();
        rd.screenshots = Vec::new();
        let detail: GameDetail = rd.into();
        assert!(detail.screenshots.is_empty());
    }

    // ---- JSON deserialization ----

    #[test]
    fn test_page_deserialize() {
        let json = r#"{
            "count": 873542,
            "next": "https://api.example.com/games?page=2",
            "previous": null,
            "results": [
                {"id": 1, "name": "One", "background_image": "http://img/1.jpg", "rating": 4.2},
                {"id": 2, "name": "Two", "background_image": null, "rating": 0}
            ]
        }"#;
        let page: RawgPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 873542);
        assert!(page.next.is_some());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[1].background_image, None);
    }

    #[test]
    fn test_page_deserialize_last_page() {
        let json = r#"{"count": 2, "next": null, "results": []}"#;
        let page: RawgPage = serde_json::from_str(json).unwrap();
        assert!(page.next.is_none());
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_detail_deserialize_minimal() {
        // Only id and name are required
        let json = r#"{"id": 9, "name": "Minimal"}"#;
        let rd: RawgGameDetail = serde_json::from_str(json).unwrap();
        assert_eq!(rd.name, "Minimal");
        assert_eq!(rd.description_raw, "");
        assert!(rd.platforms.is_empty());

        let detail: GameDetail = rd.into();
        assert_eq!(detail.description, "No description available.");
        assert!(detail.requirements.is_none());
        assert!(detail.screenshots.is_empty());
    }

    #[test]
    fn test_detail_deserialize_extra_fields_ignored() {
        let json = r#"{
            "id": 9,
            "name": "Extra",
            "slug": "extra",
            "metacritic": 95,
            "released": "2020-01-01"
        }"#;
        let rd: RawgGameDetail = serde_json::from_str(json).unwrap();
        assert_eq!(rd.name, "Extra");
    }

    // ---- Provider construction ----

    #[test]
    fn test_provider_creation() {
        let provider = RawgProvider::new("test-key");
        assert!(provider.is_ok());
    }

    #[test]
    fn test_provider_with_custom_base_url() {
        let provider = RawgProvider::with_base_url("http://localhost:8080", "k").unwrap();
        assert_eq!(provider.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_provider_id_and_name() {
        let provider = RawgProvider::new("k").unwrap();
        assert_eq!(provider.id(), "rawg");
        assert_eq!(provider.name(), "RAWG");
    }

    #[test]
    fn test_provider_url_building() {
        let provider = RawgProvider::with_base_url("https://api.example.com", "k").unwrap();
        assert_eq!(provider.url("/games"), "https://api.example.com/games");
        assert_eq!(provider.url("/games/42"), "https://api.example.com/games/42");
    }

    #[test]
    fn test_keyed_params_lead_with_api_key() {
        let provider = RawgProvider::new("secret").unwrap();
        let params = provider.keyed(vec![("page", "1".to_string())]);
        assert_eq!(params[0], ("key", "secret".to_string()));
        assert_eq!(params[1], ("page", "1".to_string()));
    }

    // ---- Integration tests (require network + key, marked #[ignore]) ----

    #[test]
    #[ignore]
    fn test_integration_search() {
        let key = std::env::var("RAWG_API_KEY").unwrap();
        let provider = RawgProvider::new(key).unwrap();
        let page = provider.search(&GameQuery::new().search("witcher")).unwrap();
        assert!(!page.games.is_empty());
    }

    #[test]
    #[ignore]
    fn test_integration_get_game() {
        let key = std::env::var("RAWG_API_KEY").unwrap();
        let provider = RawgProvider::new(key).unwrap();
        let detail = provider.get_game(3498).unwrap();
        assert_eq!(detail.id, 3498);
        assert!(!detail.description.is_empty());
    }

    #[test]
    #[ignore]
    fn test_integration_get_game_not_found() {
        let key = std::env::var("RAWG_API_KEY").unwrap();
        let provider = RawgProvider::new(key).unwrap();
        let result = provider.get_game(u64::MAX);
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
