//! Configuration constants for gamedex

use crate::error::{AppError, Result};

/// Application metadata
pub mod app {
    /// Application name (used for the config directory, etc.)
    pub const NAME: &str = "gamedex";
}

/// Catalog API configuration
pub mod catalog {
    /// Default RAWG API server
    pub const RAWG_BASE_URL: &str = "https://api.rawg.io/api";

    /// Results per catalog page
    pub const PAGE_SIZE: usize = 40;

    /// Environment variable holding the catalog API key
    pub const API_KEY_VAR: &str = "RAWG_API_KEY";
}

/// Identity provider configuration
pub mod identity {
    /// Environment variable holding the hosted identity provider's
    /// publishable key. Passed through unchanged; gamedex never inspects it.
    pub const PUBLISHABLE_KEY_VAR: &str = "CLERK_PUBLISHABLE_KEY";
}

/// Network-related configuration
pub mod network {
    /// User agent for HTTP requests
    pub const USER_AGENT: &str = concat!("Gamedex/", env!("CARGO_PKG_VERSION"));

    /// Connection timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Read timeout in seconds
    pub const READ_TIMEOUT_SECS: u64 = 30;
}

/// Read the catalog API key from the environment
pub fn catalog_api_key() -> Result<String> {
    std::env::var(catalog::API_KEY_VAR).map_err(|_| {
        AppError::Config(format!(
            "{} is missing in environment variables",
            catalog::API_KEY_VAR
        ))
    })
}

/// Read the identity provider's publishable key from the environment
pub fn identity_publishable_key() -> Result<String> {
    std::env::var(identity::PUBLISHABLE_KEY_VAR).map_err(|_| {
        AppError::Config(format!(
            "{} is missing in environment variables",
            identity::PUBLISHABLE_KEY_VAR
        ))
    })
}
