//! Signed-in session state
//!
//! The hosted identity provider is an external collaborator; gamedex only
//! records whether it reported a signed-in user, to gate page visibility.

use crate::data::storage;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Session data file name
const SESSION_FILE: &str = "session.json";

/// Session file format version for migrations
const SESSION_VERSION: u32 = 1;

/// Persisted session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// File format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Whether the identity provider reported a signed-in user
    #[serde(default)]
    pub signed_in: bool,

    /// Display label for the signed-in account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
}

fn default_version() -> u32 {
    SESSION_VERSION
}

impl Default for Session {
    fn default() -> Self {
        Self {
            version: SESSION_VERSION,
            signed_in: false,
            account: None,
        }
    }
}

impl Session {
    /// Load the session from the default storage location
    pub fn load() -> Result<Self> {
        match storage::load::<Session>(SESSION_FILE)? {
            Some(session) => Ok(session),
            None => Ok(Self::default()),
        }
    }

    /// Load the session from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        match storage::load_from::<Session>(path)? {
            Some(session) => Ok(session),
            None => Ok(Self::default()),
        }
    }

    /// Save the session to the default storage location
    pub fn save(&self) -> Result<()> {
        storage::save(SESSION_FILE, self)
    }

    /// Save the session to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        storage::save_to(path, self)
    }

    /// Record a sign-in from the identity provider
    pub fn sign_in(&mut self, account: impl Into<String>) {
        self.signed_in = true;
        self.account = Some(account.into());
    }

    /// Record a sign-out
    pub fn sign_out(&mut self) {
        self.signed_in = false;
        self.account = None;
    }

    /// Whether a user is signed in
    pub fn is_signed_in(&self) -> bool {
        self.signed_in
    }
}
