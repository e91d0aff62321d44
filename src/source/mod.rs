/// Movie list sources
///
/// This module handles:
/// - The `MovieSource` seam the catalog state loads from
/// - Fetching the movie list over HTTP
/// - Downloading poster images for the UI
use std::future::Future;

use crate::error::SourceError;
use crate::state::data::Movie;

pub mod http;

pub use http::HttpSource;

/// Anything that can produce the movie list once per session.
pub trait MovieSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Movie>, SourceError>> + Send;
}
