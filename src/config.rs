//! Runtime configuration
//!
//! Credentials are read once in `main` and handed to the service client.
//! Nothing below `main` looks at the process environment.

use crate::types::ExportError;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

/// Default Splitwise REST API root
pub const DEFAULT_API_URL: &str = "https://secure.splitwise.com/api/v3.0";

pub const CONSUMER_KEY_VAR: &str = "CONSUMER_KEY";
pub const CONSUMER_SECRET_VAR: &str = "CONSUMER_SECRET";
pub const API_KEY_VAR: &str = "API_KEY";
pub const API_URL_VAR: &str = "SPLITWISE_API_URL";

/// Credentials and endpoint for the remote service
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub consumer_key: String,
    pub consumer_secret: String,
    /// Personal API key, sent as a bearer token
    pub api_key: String,
    pub api_url: String,
}

impl Config {
    /// Build the configuration from the process environment
    ///
    /// Call after the env file has been loaded.
    pub fn from_env() -> Result<Self, ExportError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    ///
    /// Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ExportError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ExportError::missing_config(key))
        };

        Ok(Config {
            consumer_key: required(CONSUMER_KEY_VAR)?,
            consumer_secret: required(CONSUMER_SECRET_VAR)?,
            api_key: required(API_KEY_VAR)?,
            api_url: lookup(API_URL_VAR)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }
}

/// Load environment variables from an env file
///
/// With an explicit `path` only that file is read. Otherwise `.env` is
/// looked up in the working directory and then in each parent directory.
/// Variables already set in the process are never overridden.
///
/// # Returns
///
/// The path of the file that was loaded.
pub fn load_env_file(path: Option<&Path>) -> Result<PathBuf, dotenvy::Error> {
    match path {
        Some(path) => dotenvy::from_path(path).map(|()| path.to_path_buf()),
        None => dotenvy::dotenv(),
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("consumer_key", &"<redacted>")
            .field("consumer_secret", &"<redacted>")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}
