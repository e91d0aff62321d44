use icu_collator::{Collator, CollatorOptions};

use super::data::{CatalogOrigin, Movie, MovieId, Query, SortKey};
use super::fallback::fallback_catalog;
use super::store::LocalStore;
use super::watch_later::WatchLater;
use crate::error::SourceError;
use crate::notify::Notifier;
use crate::source::MovieSource;

/// Store key the watch-later list is persisted under
pub const WATCH_LATER_KEY: &str = "movie-database-watchlater";

/// Minimum rating for the "Top Rated" section
pub const TOP_RATED_MIN: f64 = 8.0;

/// Minimum rating for the hero's featured movie
pub const FEATURED_MIN: f64 = 9.0;

/// Size of the "Popular" section
pub const POPULAR_LIMIT: usize = 20;

/// Result of a watch-later toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// The movie is now in the list
    pub added: bool,
    /// The full list was written to the store
    pub persisted: bool,
}

/// The CatalogState owns everything the movie views are derived from:
/// the catalog snapshot, the watch-later list, the active query and the
/// movie shown in the detail overlay.
///
/// The store and the notifier are injected so the state can be driven
/// headless in tests.
pub struct CatalogState<S: LocalStore, N: Notifier> {
    /// `None` until the one load of the session has finished
    catalog: Option<Vec<Movie>>,
    origin: Option<CatalogOrigin>,
    watch_later: WatchLater,
    query: Query,
    selected: Option<MovieId>,
    /// Catalog after search, filter and sort; rebuilt on every change
    active: Vec<Movie>,
    store: S,
    notifier: N,
}

impl<S: LocalStore, N: Notifier> CatalogState<S, N> {
    /// Create the session state, reading the watch-later list from `store`.
    ///
    /// A missing, unreadable or corrupt stored value gives an empty list.
    pub fn new(store: S, notifier: N) -> Self {
        let watch_later = match store.get(WATCH_LATER_KEY) {
            Ok(Some(json)) => WatchLater::from_json(&json).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "stored watch-later list is unreadable, starting empty");
                WatchLater::new()
            }),
            Ok(None) => WatchLater::new(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read watch-later list, starting empty");
                WatchLater::new()
            }
        };

        if !watch_later.is_empty() {
            tracing::debug!(count = watch_later.len(), "watch-later list restored");
        }

        Self {
            catalog: None,
            origin: None,
            watch_later,
            query: Query::default(),
            selected: None,
            active: Vec::new(),
            store,
            notifier,
        }
    }

    /// Fetch the catalog from `source`, falling back to the sample data.
    pub async fn load<M: MovieSource>(&mut self, source: &M) -> CatalogOrigin {
        let result = source.fetch().await;
        self.finish_load(result)
    }

    /// Install the result of the session's fetch.
    ///
    /// Any source error installs the fallback catalog instead. Only the
    /// first call has an effect; the catalog is never replaced afterwards.
    pub fn finish_load(&mut self, result: Result<Vec<Movie>, SourceError>) -> CatalogOrigin {
        if let Some(origin) = self.origin {
            tracing::warn!(?origin, "catalog already loaded, ignoring second load");
            return origin;
        }

        let (movies, origin) = match result {
            Ok(movies) => {
                tracing::info!(count = movies.len(), "movies loaded from source");
                self.notifier.notify(
                    "Movies Loaded",
                    &format!("Successfully loaded {} movies from API", movies.len()),
                );
                (movies, CatalogOrigin::Source)
            }
            Err(e) => {
                tracing::warn!(error = %e, "movie source unavailable, using sample data");
                self.notifier
                    .notify("Demo Mode", "Using sample movie data for demonstration");
                (fallback_catalog(), CatalogOrigin::Fallback)
            }
        };

        self.catalog = Some(movies);
        self.origin = Some(origin);
        self.refresh();
        origin
    }

    pub fn is_loading(&self) -> bool {
        self.catalog.is_none()
    }

    pub fn origin(&self) -> Option<CatalogOrigin> {
        self.origin
    }

    /// The full catalog (empty while loading)
    pub fn catalog(&self) -> &[Movie] {
        self.catalog.as_deref().unwrap_or(&[])
    }

    pub fn total_movies(&self) -> usize {
        self.catalog().len()
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query.search_text = text.into();
        self.refresh();
    }

    pub fn set_filters(&mut self, min_rating: Option<f64>, sort_key: SortKey) {
        self.query.min_rating = min_rating;
        self.query.sort_key = sort_key;
        self.refresh();
    }

    pub fn set_min_rating(&mut self, min_rating: Option<f64>) {
        self.set_filters(min_rating, self.query.sort_key);
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.set_filters(self.query.min_rating, sort_key);
    }

    pub fn clear_filters(&mut self) {
        self.query.clear_filters();
        self.refresh();
    }

    /// Flip `id` in the watch-later list and write the whole list out.
    ///
    /// If the write fails the in-memory list still changes and stays
    /// authoritative for the rest of the session.
    pub fn toggle_watch_later(&mut self, id: MovieId) -> ToggleOutcome {
        let added = self.watch_later.toggle(id);
        let persisted = self.persist_watch_later();

        if added {
            self.notifier
                .notify("Added to Watch Later", "Movie added to your watch later list");
        } else {
            self.notifier.notify(
                "Removed from Watch Later",
                "Movie removed from your watch later list",
            );
        }

        if !persisted {
            self.notifier.notify(
                "Watch Later not saved",
                "Your list will be kept until the app is closed",
            );
        }

        tracing::debug!(id, added, persisted, "watch later toggled");
        ToggleOutcome { added, persisted }
    }

    fn persist_watch_later(&mut self) -> bool {
        let json = match self.watch_later.to_json() {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "could not encode watch-later list");
                return false;
            }
        };

        match self.store.set(WATCH_LATER_KEY, &json) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "could not save watch-later list");
                false
            }
        }
    }

    pub fn is_watch_later(&self, id: MovieId) -> bool {
        self.watch_later.contains(id)
    }

    pub fn watch_later_ids(&self) -> &[MovieId] {
        self.watch_later.ids()
    }

    pub fn select_movie(&mut self, id: MovieId) {
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<MovieId> {
        self.selected
    }

    /// The movie in the detail overlay, if its id is in the catalog
    pub fn selected(&self) -> Option<&Movie> {
        let id = self.selected?;
        self.catalog().iter().find(|m| m.id == id)
    }

    fn refresh(&mut self) {
        self.active = match &self.catalog {
            Some(catalog) => derive_results(catalog, &self.query),
            None => Vec::new(),
        };
    }

    /// Catalog after search, filter and sort
    pub fn results(&self) -> &[Movie] {
        &self.active
    }

    pub fn top_rated(&self) -> Vec<&Movie> {
        top_rated(&self.active)
    }

    pub fn popular(&self) -> &[Movie] {
        popular(&self.active)
    }

    /// Saved movies in catalog order, regardless of the active query
    pub fn watch_later_movies(&self) -> Vec<&Movie> {
        watch_later_view(self.catalog(), &self.watch_later)
    }

    pub fn featured(&self) -> Option<&Movie> {
        featured(self.catalog())
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}

/// Apply search, minimum rating and sort to `catalog`.
///
/// Pure: the same inputs always give the same output. All sorts are stable,
/// so ties keep catalog order.
pub fn derive_results(catalog: &[Movie], query: &Query) -> Vec<Movie> {
    let needle = query.search_text.to_lowercase();

    let mut results: Vec<Movie> = catalog
        .iter()
        .filter(|m| needle.is_empty() || m.title.to_lowercase().contains(&needle))
        .filter(|m| query.min_rating.map_or(true, |min| m.rating >= min))
        .cloned()
        .collect();

    match query.sort_key {
        SortKey::RatingDescending => results.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::TitleAscending => sort_by_title(&mut results),
        SortKey::Recent => results.sort_by(|a, b| b.id.cmp(&a.id)),
    }

    results
}

/// Stable sort by title using the root locale collation, so accented
/// titles land beside their base letters instead of after "Z".
fn sort_by_title(movies: &mut [Movie]) {
    match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => movies.sort_by(|a, b| collator.compare(&a.title, &b.title)),
        Err(e) => {
            tracing::warn!(error = ?e, "title collation unavailable, using case-folded order");
            movies.sort_by_cached_key(|m| m.title.to_lowercase());
        }
    }
}

pub fn top_rated(results: &[Movie]) -> Vec<&Movie> {
    results.iter().filter(|m| m.rating >= TOP_RATED_MIN).collect()
}

pub fn popular(results: &[Movie]) -> &[Movie] {
    &results[..results.len().min(POPULAR_LIMIT)]
}

pub fn watch_later_view<'a>(catalog: &'a [Movie], list: &WatchLater) -> Vec<&'a Movie> {
    catalog.iter().filter(|m| list.contains(m.id)).collect()
}

/// Mean rating of the catalog, `None` when it is empty
pub fn average_rating(catalog: &[Movie]) -> Option<f64> {
    if catalog.is_empty() {
        return None;
    }
    Some(catalog.iter().map(|m| m.rating).sum::<f64>() / catalog.len() as f64)
}

/// First movie rated 9 or more, else the first movie
pub fn featured(catalog: &[Movie]) -> Option<&Movie> {
    catalog
        .iter()
        .find(|m| m.rating >= FEATURED_MIN)
        .or_else(|| catalog.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::notify::Notification;
    use crate::state::store::MemoryStore;

    fn movie(id: MovieId, title: &str, rating: f64) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            rating,
            poster_url: format!("https://img/{}.jpg", id),
            detail_url: format!("https://imdb/{}", id),
        }
    }

    fn sample() -> Vec<Movie> {
        vec![
            movie(1, "Beta", 8.0),
            movie(2, "Alpha", 9.5),
            movie(3, "Gamma", 9.5),
        ]
    }

    fn titles<'a>(movies: impl IntoIterator<Item = &'a Movie>) -> Vec<&'a str> {
        movies.into_iter().map(|m| m.title.as_str()).collect()
    }

    fn loaded(movies: Vec<Movie>) -> CatalogState<MemoryStore, Vec<Notification>> {
        let mut state = CatalogState::new(MemoryStore::new(), Vec::<Notification>::new());
        state.finish_load(Ok(movies));
        state
    }

    struct FixedSource(Result<Vec<Movie>, SourceError>);

    impl MovieSource for FixedSource {
        async fn fetch(&self) -> Result<Vec<Movie>, SourceError> {
            self.0.clone()
        }
    }

    /// Store whose reads and writes always fail
    struct BrokenStore;

    impl LocalStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::NoDataDir)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::NoDataDir)
        }
    }

    #[test]
    fn test_rating_sort_is_stable() {
        let state = loaded(sample());
        assert_eq!(titles(state.results()), vec!["Alpha", "Gamma", "Beta"]);
    }

    #[test]
    fn test_ties_follow_input_order_not_id() {
        let catalog = vec![movie(9, "Late", 7.0), movie(2, "Early", 7.0)];
        let results = derive_results(&catalog, &Query::default());
        assert_eq!(titles(&results), vec!["Late", "Early"]);
    }

    #[test]
    fn test_min_rating_filter() {
        let mut state = loaded(sample());
        state.set_filters(Some(9.0), SortKey::RatingDescending);
        assert_eq!(titles(state.results()), vec!["Alpha", "Gamma"]);
    }

    #[test]
    fn test_title_and_recent_sorts() {
        let mut state = loaded(sample());

        state.set_sort_key(SortKey::TitleAscending);
        assert_eq!(titles(state.results()), vec!["Alpha", "Beta", "Gamma"]);

        state.set_sort_key(SortKey::Recent);
        assert_eq!(titles(state.results()), vec!["Gamma", "Alpha", "Beta"]);
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let catalog = vec![
            movie(1, "zodiac", 7.0),
            movie(2, "Amadeus", 7.0),
            movie(3, "alien", 7.0),
        ];
        let query = Query {
            sort_key: SortKey::TitleAscending,
            ..Query::default()
        };
        let results = derive_results(&catalog, &query);
        assert_eq!(titles(&results), vec!["alien", "Amadeus", "zodiac"]);
    }

    #[test]
    fn test_title_sort_places_accents_with_base_letters() {
        let catalog = vec![
            movie(1, "Zodiac", 7.7),
            movie(2, "Amélie", 8.3),
            movie(3, "Amf", 5.0),
            movie(4, "Éclair", 6.1),
        ];
        let query = Query {
            sort_key: SortKey::TitleAscending,
            ..Query::default()
        };
        let results = derive_results(&catalog, &query);
        assert_eq!(titles(&results), vec!["Amélie", "Amf", "Éclair", "Zodiac"]);
    }

    #[test]
    fn test_title_sort_keeps_duplicate_titles_in_input_order() {
        let catalog = vec![
            movie(7, "Solaris", 8.1),
            movie(3, "Alien", 8.5),
            movie(5, "Solaris", 7.3),
        ];
        let query = Query {
            sort_key: SortKey::TitleAscending,
            ..Query::default()
        };
        let ids: Vec<MovieId> = derive_results(&catalog, &query).iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 7, 5]);
    }

    #[test]
    fn test_rating_sort_handles_nan() {
        let catalog = vec![
            movie(1, "Unrated", f64::NAN),
            movie(2, "Rated", 7.5),
            movie(3, "Also Rated", 7.5),
        ];
        let results = derive_results(&catalog, &Query::default());
        let ids: Vec<MovieId> = results.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), 3);
        // Equal ratings keep catalog order wherever NaN ends up
        let rated: Vec<MovieId> = ids.into_iter().filter(|&id| id != 1).collect();
        assert_eq!(rated, vec![2, 3]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let catalog = vec![
            movie(1, "The Dark Knight", 9.0),
            movie(2, "Knight and Day", 6.3),
            movie(3, "Inception", 8.8),
        ];

        for q in ["", "KNIGHT", "e", "zzz", "dark k"] {
            let query = Query {
                search_text: q.to_string(),
                ..Query::default()
            };
            let results = derive_results(&catalog, &query);
            for m in &catalog {
                let expected = m.title.to_lowercase().contains(&q.to_lowercase());
                assert_eq!(results.iter().any(|r| r.id == m.id), expected, "query {:?}", q);
            }
        }
    }

    #[test]
    fn test_derivation_is_pure() {
        let catalog = fallback_catalog();
        let query = Query {
            search_text: "the".into(),
            min_rating: Some(8.5),
            sort_key: SortKey::TitleAscending,
        };
        let first = derive_results(&catalog, &query);
        let second = derive_results(&catalog, &query);
        assert_eq!(first, second);
        assert_eq!(catalog, fallback_catalog());
    }

    #[test]
    fn test_clearing_search_restores_everything() {
        let mut state = loaded(sample());
        state.set_search_text("alp");
        assert_eq!(titles(state.results()), vec!["Alpha"]);

        state.set_search_text("");
        assert_eq!(state.results().len(), 3);
    }

    #[test]
    fn test_watch_later_scenario() {
        let mut state = loaded(sample());

        state.toggle_watch_later(1);
        state.toggle_watch_later(2);
        assert_eq!(titles(state.watch_later_movies()), vec!["Beta", "Alpha"]);

        state.toggle_watch_later(1);
        assert_eq!(titles(state.watch_later_movies()), vec!["Alpha"]);
    }

    #[test]
    fn test_watch_later_view_ignores_query() {
        let mut state = loaded(sample());
        state.toggle_watch_later(1);
        state.set_search_text("gamma");
        state.set_min_rating(Some(9.0));

        assert_eq!(titles(state.watch_later_movies()), vec!["Beta"]);
    }

    #[test]
    fn test_toggle_twice_restores_store_value() {
        let mut state = loaded(sample());
        state.toggle_watch_later(3);
        let before = state.store.get(WATCH_LATER_KEY).unwrap();

        let first = state.toggle_watch_later(2);
        let second = state.toggle_watch_later(2);

        assert!(first.added && first.persisted);
        assert!(!second.added && second.persisted);
        assert!(!state.is_watch_later(2));
        assert_eq!(state.store.get(WATCH_LATER_KEY).unwrap(), before);
        assert_eq!(before.as_deref(), Some("[3]"));
    }

    #[test]
    fn test_toggle_notifications() {
        let mut state = loaded(sample());
        state.toggle_watch_later(1);
        state.toggle_watch_later(1);

        let seen: Vec<_> = state.notifier().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(
            seen,
            vec!["Movies Loaded", "Added to Watch Later", "Removed from Watch Later"]
        );
    }

    #[test]
    fn test_watch_later_restored_from_store() {
        let mut store = MemoryStore::new();
        store.set(WATCH_LATER_KEY, "[3,1]").unwrap();

        let mut state = CatalogState::new(store, Vec::<Notification>::new());
        state.finish_load(Ok(sample()));

        assert_eq!(state.watch_later_ids(), &[3, 1]);
        // view follows catalog order, not insertion order
        assert_eq!(titles(state.watch_later_movies()), vec!["Beta", "Gamma"]);
    }

    #[test]
    fn test_corrupt_store_value_starts_empty() {
        let mut store = MemoryStore::new();
        store.set(WATCH_LATER_KEY, "{oops").unwrap();

        let state = CatalogState::new(store, Vec::<Notification>::new());
        assert!(state.watch_later_ids().is_empty());
    }

    #[test]
    fn test_store_failures_are_not_fatal() {
        let mut state = CatalogState::new(BrokenStore, Vec::<Notification>::new());
        state.finish_load(Ok(sample()));

        let outcome = state.toggle_watch_later(2);

        assert_eq!(outcome, ToggleOutcome { added: true, persisted: false });
        assert!(state.is_watch_later(2));
        assert!(state
            .notifier()
            .iter()
            .any(|n| n.title == "Watch Later not saved"));
    }

    #[tokio::test]
    async fn test_failed_source_uses_fallback() {
        let failures = [
            SourceError::Request("connection refused".into()),
            SourceError::Status(500),
            SourceError::Body("expected a sequence".into()),
        ];

        for err in failures {
            let mut state = CatalogState::new(MemoryStore::new(), Vec::<Notification>::new());
            let origin = state.load(&FixedSource(Err(err))).await;

            assert_eq!(origin, CatalogOrigin::Fallback);
            assert!(!state.catalog().is_empty());
            assert_eq!(state.catalog(), fallback_catalog().as_slice());
            assert_eq!(state.notifier()[0].title, "Demo Mode");
        }
    }

    #[tokio::test]
    async fn test_successful_source() {
        let mut state = CatalogState::new(MemoryStore::new(), Vec::<Notification>::new());
        assert!(state.is_loading());
        assert!(state.results().is_empty());
        assert!(state.featured().is_none());

        let origin = state.load(&FixedSource(Ok(sample()))).await;

        assert_eq!(origin, CatalogOrigin::Source);
        assert!(!state.is_loading());
        assert_eq!(state.total_movies(), 3);
        assert_eq!(
            state.notifier()[0],
            Notification {
                title: "Movies Loaded".into(),
                description: "Successfully loaded 3 movies from API".into(),
            }
        );
    }

    #[test]
    fn test_second_load_is_ignored() {
        let mut state = loaded(sample());
        let origin = state.finish_load(Err(SourceError::Status(404)));

        assert_eq!(origin, CatalogOrigin::Source);
        assert_eq!(state.total_movies(), 3);
        assert_eq!(state.notifier().len(), 1);
    }

    #[test]
    fn test_featured_movie() {
        assert!(featured(&[]).is_none());

        let none_high = vec![movie(1, "A", 7.0), movie(2, "B", 8.9)];
        assert_eq!(featured(&none_high).map(|m| m.id), Some(1));

        let two_high = vec![movie(1, "A", 7.0), movie(2, "B", 9.1), movie(3, "C", 9.8)];
        assert_eq!(featured(&two_high).map(|m| m.id), Some(2));
    }

    #[test]
    fn test_average_rating() {
        assert_eq!(average_rating(&[]), None);
        let avg = average_rating(&sample()).unwrap();
        assert!((avg - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_rated_and_popular() {
        let catalog: Vec<Movie> = (1..=25)
            .map(|id| movie(id, &format!("Movie {}", id), if id % 2 == 0 { 8.5 } else { 7.5 }))
            .collect();
        let state = loaded(catalog);

        assert_eq!(state.popular().len(), POPULAR_LIMIT);
        assert_eq!(state.popular()[0], state.results()[0]);
        assert_eq!(state.top_rated().len(), 12);
        assert!(state.top_rated().iter().all(|m| m.rating >= TOP_RATED_MIN));
    }

    #[test]
    fn test_selection() {
        let mut state = loaded(sample());
        assert!(state.selected().is_none());

        state.select_movie(3);
        assert_eq!(state.selected().map(|m| m.title.as_str()), Some("Gamma"));

        state.select_movie(42);
        assert_eq!(state.selected_id(), Some(42));
        assert!(state.selected().is_none());

        state.clear_selection();
        assert!(state.selected_id().is_none());
    }

    #[test]
    fn test_clear_filters_keeps_search() {
        let mut state = loaded(sample());
        state.set_search_text("a");
        state.set_filters(Some(9.0), SortKey::Recent);
        state.clear_filters();

        assert_eq!(state.query().search_text, "a");
        assert_eq!(state.query().active_filter_count(), 0);
        assert_eq!(titles(state.results()), vec!["Alpha", "Gamma", "Beta"]);
    }
}
