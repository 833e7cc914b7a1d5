//! Configuration management for the Dinero voucher CLI.
//!
//! Credentials and endpoints are read from environment variables. A `.env`
//! file in the local data directory is loaded first, so values can either be
//! exported by the shell or stored once on disk:
//!
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (endpoint URLs only)

use std::{
    env, fmt,
    path::{Path, PathBuf},
};

use crate::error::{Error, Result};

pub const CLIENT_ID_VAR: &str = "DINERO_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "DINERO_CLIENT_SECRET";
pub const API_KEY_VAR: &str = "DINERO_API_KEY";
pub const ORGANIZATION_ID_VAR: &str = "DINERO_ORG_ID";

pub const DEFAULT_TOKEN_URL: &str = "https://authz.dinero.dk/dineroapi/oauth/token";
pub const DEFAULT_API_URL: &str = "https://api.dinero.dk/v1";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file lives at:
/// - Linux: `~/.local/share/dinerocli/.env`
/// - macOS: `~/Library/Application Support/dinerocli/.env`
/// - Windows: `%LOCALAPPDATA%/dinerocli/.env`
///
/// Nothing is created on disk. A missing file is fine since the variables may
/// already be exported; a file that exists but cannot be parsed is reported
/// as an error.
pub async fn load_env() -> Result<()> {
    load_env_from(&env_path()).await
}

/// Loads `path` into the environment if it is an existing file.
pub async fn load_env_from(path: &Path) -> Result<()> {
    match async_fs::metadata(path).await {
        Ok(metadata) if metadata.is_file() => {}
        _ => return Ok(()),
    }

    dotenv::from_path(path)
        .map_err(|e| Error::Config(format!("Cannot load {}: {}", path.display(), e)))
}

pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("dinerocli/.env");
    path
}

/// Returns the OAuth token endpoint, `DINERO_TOKEN_URL` or the public default.
pub fn token_url() -> String {
    env::var("DINERO_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

/// Returns the API base URL, `DINERO_API_URL` or the public default.
pub fn api_url() -> String {
    env::var("DINERO_API_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// The four identifiers needed to talk to Dinero.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub api_key: String,
    pub organization_id: String,
}

impl Credentials {
    /// Reads the credentials from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the credentials through `lookup`, which maps a variable name to
    /// its value. Missing and blank values are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| -> Result<String> {
            match lookup(name) {
                Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
                _ => Err(Error::Config(format!(
                    "Missing required environment variable: {}",
                    name
                ))),
            }
        };

        Ok(Self {
            client_id: require(CLIENT_ID_VAR)?,
            client_secret: require(CLIENT_SECRET_VAR)?,
            api_key: require(API_KEY_VAR)?,
            organization_id: require(ORGANIZATION_ID_VAR)?,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("api_key", &"***")
            .field("organization_id", &self.organization_id)
            .finish()
    }
}
