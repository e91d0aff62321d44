/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the movie source, the catalog state and the UI layer.
use serde::{Deserialize, Serialize};

/// Stable identifier of a movie within a catalog snapshot
pub type MovieId = i64;

/// Represents a single movie in the catalog
///
/// Field names on the wire follow the remote API
/// (`movie`, `image`, `imdb_url`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Movie {
    /// Unique id, used for lookup and for the "recent" ordering
    pub id: MovieId,
    /// Display title (e.g., "The Dark Knight")
    #[serde(rename = "movie")]
    pub title: String,
    /// Rating, nominally 0.0 to 10.0
    pub rating: f64,
    /// Poster image URL (may fail to load)
    #[serde(rename = "image")]
    pub poster_url: String,
    /// External reference page
    #[serde(rename = "imdb_url")]
    pub detail_url: String,
}

/// Ordering applied to the active result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Highest rating first, ties keep catalog order
    #[default]
    RatingDescending,
    /// A-Z by title, ties keep catalog order
    TitleAscending,
    /// Highest id first (id is the recency proxy)
    Recent,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [
        SortKey::RatingDescending,
        SortKey::TitleAscending,
        SortKey::Recent,
    ];

    /// Label used in the sort menu
    pub fn label(self) -> &'static str {
        match self {
            SortKey::RatingDescending => "Highest Rated",
            SortKey::TitleAscending => "A-Z",
            SortKey::Recent => "Recently Added",
        }
    }

    /// Short label used on the active-criteria chip
    pub fn chip_label(self) -> &'static str {
        match self {
            SortKey::RatingDescending => "Rating",
            SortKey::TitleAscending => "A-Z",
            SortKey::Recent => "Recent",
        }
    }
}

/// Minimum-rating presets offered by the filter bar
pub const MIN_RATING_PRESETS: [f64; 3] = [7.0, 8.0, 9.0];

/// Active search, filter and sort criteria
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Query {
    pub search_text: String,
    pub min_rating: Option<f64>,
    pub sort_key: SortKey,
}

impl Query {
    /// Number of non-default filter criteria (search text not included)
    pub fn active_filter_count(&self) -> usize {
        usize::from(self.min_rating.is_some())
            + usize::from(self.sort_key != SortKey::default())
    }

    /// True when the user has narrowed or reordered the catalog
    pub fn is_refined(&self) -> bool {
        !self.search_text.is_empty() || self.active_filter_count() > 0
    }

    /// Reset rating and sort to defaults, keeping the search text
    pub fn clear_filters(&mut self) {
        self.min_rating = None;
        self.sort_key = SortKey::default();
    }
}

/// Where the current catalog came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// Loaded from the remote source
    Source,
    /// Embedded sample data after a failed fetch
    Fallback,
}
