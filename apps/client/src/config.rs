//! Client configuration loading from environment variables.
//!
//! Values are read once at startup (after `.env` has been loaded by the
//! binary). Everything has a default, so a bare invocation talks to a local
//! development API.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Logging level (default: "warn,client=info")
//! - `API_BASE_URL`: Root of the REST API (default: "http://localhost:8000/api")
//! - `REQUEST_TIMEOUT_SECONDS`: Per-request HTTP timeout (default: 10)
//! - `LIKE_CONFIRM_TIMEOUT_SECONDS`: Upper bound on a like confirmation before it
//!   is rolled back (default: 15)
//! - `CREDENTIALS_PATH`: Where the token pair is kept
//!   (default: "~/.community-board/credentials.json")
//! - `MAX_IMAGE_BYTES`: Largest image accepted for a new post (default: 5 MiB)

use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
const DEFAULT_MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Root of the REST API, including the `/api` prefix
    pub api_base_url: String,

    /// Timeout applied to every HTTP request
    pub request_timeout_seconds: u64,

    /// Bound on a like confirmation; expiry rolls the optimistic update back
    pub like_confirm_timeout_seconds: u64,

    /// JSON file holding the access and refresh tokens
    pub credentials_path: PathBuf,

    /// Largest image accepted when composing a post
    pub max_image_bytes: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Self {
            api_base_url: env_or("API_BASE_URL", DEFAULT_API_BASE_URL.to_string())?,
            request_timeout_seconds: env_or("REQUEST_TIMEOUT_SECONDS", 10)?,
            like_confirm_timeout_seconds: env_or("LIKE_CONFIRM_TIMEOUT_SECONDS", 15)?,
            credentials_path: env_or("CREDENTIALS_PATH", default_credentials_path())?,
            max_image_bytes: env_or("MAX_IMAGE_BYTES", DEFAULT_MAX_IMAGE_BYTES)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.request_timeout_seconds == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECONDS must be greater than zero");
        }
        if self.like_confirm_timeout_seconds == 0 {
            anyhow::bail!("LIKE_CONFIRM_TIMEOUT_SECONDS must be greater than zero");
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    pub fn like_confirm_timeout(&self) -> Duration {
        Duration::from_secs(self.like_confirm_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_seconds: 10,
            like_confirm_timeout_seconds: 15,
            credentials_path: default_credentials_path(),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

pub fn default_credentials_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".community-board")
        .join("credentials.json")
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
