//! Runtime credentials.
//!
//! The map-tile token is read from the process environment after the
//! optional `api.env` and `.env` files have been loaded. It is kept behind
//! [`Secret`] so it never reaches logs or rendered output.

use crate::error::{DashboardError, Result};
use secrecy::Secret;
use std::path::{Path, PathBuf};

/// Env keys checked for the map-tile token, in order.
pub const MAPBOX_KEYS: &[&str] = &["mapbox", "MAPBOX_ACCESS_TOKEN"];

/// File the token is conventionally kept in, next to the data directory.
pub const CREDENTIALS_FILE: &str = "api.env";

/// Loads `api.env` and then `.env` into the process environment. Both are
/// optional. Returns the files that were read so they can be logged once a
/// subscriber is installed.
pub fn load_env_files() -> Vec<PathBuf> {
    let mut loaded: Vec<PathBuf> = load_env_file(Path::new(CREDENTIALS_FILE))
        .into_iter()
        .collect();
    if let Ok(path) = dotenvy::dotenv() {
        loaded.push(path);
    }
    loaded
}

/// Loads one env file into the process environment, `None` if it cannot be read.
pub fn load_env_file(path: &Path) -> Option<PathBuf> {
    dotenvy::from_path(path).ok().map(|_| path.to_path_buf())
}

#[derive(Debug, Default)]
pub struct Credentials {
    mapbox: Option<Secret<String>>,
}

impl Credentials {
    pub fn new(mapbox: Option<String>) -> Self {
        Self {
            mapbox: mapbox.filter(|t| !t.trim().is_empty()).map(Secret::new),
        }
    }

    /// Reads credentials from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads credentials through `lookup`, taking the first non-empty value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = MAPBOX_KEYS
            .iter()
            .filter_map(|key| lookup(key))
            .find(|v| !v.trim().is_empty());

        Self::new(token)
    }

    /// The map-tile token, or [`DashboardError::MissingCredential`].
    pub fn mapbox_token(&self) -> Result<&Secret<String>> {
        self.mapbox
            .as_ref()
            .ok_or(DashboardError::MissingCredential { key: MAPBOX_KEYS[0] })
    }
}
