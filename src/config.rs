/// Application configuration
///
/// Defaults can be overridden with environment variables:
/// - `MOVIE_BROWSER_SOURCE_URL`: movie list endpoint
/// - `MOVIE_BROWSER_DATA_DIR`: directory holding the local store
/// - `MOVIE_BROWSER_TOAST_SECS`: how long notifications stay on screen
/// - `MOVIE_BROWSER_NO_FETCH_POSTERS`: set to `1` to skip poster downloads
use std::path::PathBuf;
use std::time::Duration;

use crate::error::StoreError;

pub const DEFAULT_SOURCE_URL: &str = "https://dummyapi.online/api/movies";
const DEFAULT_TOAST_SECS: u64 = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub source_url: String,
    /// `None` when no data directory could be determined
    pub data_dir: Option<PathBuf>,
    pub toast_lifetime: Duration,
    pub fetch_posters: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            data_dir: default_data_dir(),
            toast_lifetime: Duration::from_secs(DEFAULT_TOAST_SECS),
            fetch_posters: true,
        }
    }
}

impl Config {
    /// Build the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("MOVIE_BROWSER_SOURCE_URL").filter(|u| !u.trim().is_empty()) {
            config.source_url = url;
        }

        if let Some(dir) = lookup("MOVIE_BROWSER_DATA_DIR").filter(|d| !d.trim().is_empty()) {
            config.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(raw) = lookup("MOVIE_BROWSER_TOAST_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.toast_lifetime = Duration::from_secs(secs),
                _ => tracing::warn!(value = %raw, "invalid MOVIE_BROWSER_TOAST_SECS, using default"),
            }
        }

        if lookup("MOVIE_BROWSER_NO_FETCH_POSTERS").as_deref() == Some("1") {
            config.fetch_posters = false;
        }

        config
    }

    /// Directory for the local store, or an error if none is known
    pub fn require_data_dir(&self) -> Result<&PathBuf, StoreError> {
        self.data_dir.as_ref().ok_or(StoreError::NoDataDir)
    }
}

/// Get the directory where the local store should live
fn default_data_dir() -> Option<PathBuf> {
    let mut path = dirs::data_dir().or_else(dirs::home_dir)?;
    path.push("movie-browser");
    Some(path)
}
