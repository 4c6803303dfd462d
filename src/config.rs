//! Configuration management for spotcat.
//!
//! Values come from the process environment, optionally seeded from `.env`
//! files. The resulting [`Config`] is passed explicitly to the parts that
//! need it; nothing here is global.
//!
//! Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the local data directory (`<data_local_dir>/spotcat/.env`)
//! 3. `.env` in the working directory
//! 4. Application defaults for the non-secret values

use std::{env, path::PathBuf};

use crate::error::Error;

pub const CLIENT_ID_VAR: &str = "SPOTIFY_API_AUTH_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "SPOTIFY_API_AUTH_CLIENT_SECRET";
pub const API_URL_VAR: &str = "SPOTIFY_API_URL";
pub const TOKEN_URL_VAR: &str = "SPOTIFY_API_TOKEN_URL";
pub const MARKET_VAR: &str = "SPOTIFY_MARKET";

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_MARKET: &str = "VN";

/// Loads `.env` files into the process environment.
///
/// Missing files are skipped. Variables already set in the environment are
/// never overwritten, so the data directory file wins over the working
/// directory one.
///
/// # Errors
///
/// Returns [`Error::Config`] if a `.env` file exists but cannot be parsed.
pub fn load_env() -> Result<(), Error> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotcat/.env");
    if path.is_file() {
        dotenv::from_path(&path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    }

    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(Error::Config(e.to_string())),
    }
}

/// Client credentials for the token exchange.
///
/// Blank values are allowed here and rejected by
/// [`AuthProvider`](crate::spotify::AuthProvider) before any request is made.
#[derive(Clone, Default)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub api_url: String,
    pub token_url: String,
    pub market: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Config {
            credentials: Credentials {
                client_id: lookup(CLIENT_ID_VAR).unwrap_or_default(),
                client_secret: lookup(CLIENT_SECRET_VAR).unwrap_or_default(),
            },
            api_url: non_empty(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            token_url: non_empty(TOKEN_URL_VAR).unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            market: non_empty(MARKET_VAR).unwrap_or_else(|| DEFAULT_MARKET.to_string()),
        }
    }
}
