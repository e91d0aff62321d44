/// Error types shared across the application
///
/// Nothing here is fatal: a source error means "use the fallback catalog",
/// a store error means "the watch-later list is not persisted right now".
use thiserror::Error;

/// Failure to retrieve the movie list from the remote source.
///
/// Holds strings rather than the underlying client errors so it can be
/// cloned into iced messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Network or connection failure
    #[error("request failed: {0}")]
    Request(String),
    /// The server answered with a non-success status
    #[error("unexpected status {0}")]
    Status(u16),
    /// The body was not a JSON array of movie records
    #[error("malformed body: {0}")]
    Body(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SourceError::Body(err.to_string())
        } else if let Some(status) = err.status() {
            SourceError::Status(status.as_u16())
        } else {
            SourceError::Request(err.to_string())
        }
    }
}

/// Failure of the local key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not determine a data directory")]
    NoDataDir,
}
