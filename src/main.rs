use iced::widget::{column, container, scrollable, stack, text, text_input, Column};
use iced::{keyboard, Alignment, Element, Length, Subscription, Task, Theme};
use std::collections::HashMap;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod notify;
mod source;
mod state;
mod ui;

use config::Config;
use error::SourceError;
use notify::{Notifier, ToastQueue};
use source::{HttpSource, MovieSource};
use state::catalog::{average_rating, CatalogState};
use state::data::{Movie, MovieId, SortKey};
use state::store::{AppStore, MemoryStore, SqliteStore};
use ui::carousel::{carousel, Section, Step};
use ui::Poster;

/// Main application state
struct MovieBrowser {
    /// Catalog, watch-later list and query for this session
    catalog: CatalogState<AppStore, ToastQueue>,
    config: Config,
    /// Shared HTTP client for poster downloads
    client: reqwest::Client,
    posters: HashMap<MovieId, Poster>,
    show_filters: bool,
    /// Vertical offset of the main page
    page_offset: f32,
    /// Horizontal offset of each carousel
    carousel_offsets: HashMap<Section, f32>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// The one fetch of the session finished
    CatalogFetched(Result<Vec<Movie>, SourceError>),
    PosterLoaded(MovieId, Result<Vec<u8>, SourceError>),

    // Search and filters
    SearchChanged(String),
    ToggleFilterMenu,
    MinRatingPicked(f64),
    MinRatingCleared,
    SortPicked(SortKey),
    ClearFilters,

    // Hero
    StartExploring,
    ShowTopRated,

    // Movies
    ToggleWatchLater(MovieId),
    OpenDetails(MovieId),
    CloseDetails,
    OpenDetailsLink(String),
    CopyLink(String),

    // Scrolling
    CarouselScrolled(Section, f32),
    CarouselStep(Section, Step),
    PageScrolled(scrollable::Viewport),
    BackToTop,

    // Toasts
    DismissToast(u64),
    TickToasts,
}

fn page_id() -> scrollable::Id {
    scrollable::Id::new("page")
}

/// Pick the local store: SQLite in the data directory, or memory if that fails
fn open_store(config: &Config) -> Result<AppStore, error::StoreError> {
    let dir = config.require_data_dir()?;
    Ok(AppStore::Sqlite(SqliteStore::open_in(dir)?))
}

/// Open a detail page in the browser. If that fails, notify and return the
/// link so it can go to the clipboard instead.
fn open_or_copy<N: Notifier>(
    url: &str,
    notifier: &mut N,
    opener: impl FnOnce(&str) -> std::io::Result<()>,
) -> Option<String> {
    match opener(url) {
        Ok(()) => {
            tracing::debug!(url, "opened detail page");
            None
        }
        Err(e) => {
            tracing::warn!(url, error = %e, "could not open browser");
            notifier.notify(
                "Could not open link",
                "No browser available; the IMDb link was copied instead",
            );
            Some(url.to_string())
        }
    }
}

impl MovieBrowser {
    /// Create a new instance of the application and start the catalog fetch
    fn new(config: Config) -> (Self, Task<Message>) {
        let mut toasts = ToastQueue::new(config.toast_lifetime);

        let store = open_store(&config).unwrap_or_else(|e| {
            tracing::error!(error = %e, "local store unavailable, watch later will not be saved");
            toasts.notify(
                "Watch Later not saved",
                "Local storage is unavailable; your list lasts until the app is closed",
            );
            AppStore::Memory(MemoryStore::new())
        });

        let catalog = CatalogState::new(store, toasts);
        tracing::info!(
            saved = catalog.watch_later_ids().len(),
            source = %config.source_url,
            "movie browser initialized"
        );

        let source = HttpSource::new(config.source_url.clone());
        let load = Task::perform(
            async move { source.fetch().await },
            Message::CatalogFetched,
        );

        (
            MovieBrowser {
                catalog,
                config,
                client: reqwest::Client::new(),
                posters: HashMap::new(),
                show_filters: false,
                page_offset: 0.0,
                carousel_offsets: HashMap::new(),
            },
            load,
        )
    }

    /// Queue a download for every catalog poster not seen yet
    fn fetch_posters(&mut self) -> Task<Message> {
        if !self.config.fetch_posters {
            return Task::none();
        }

        let mut tasks = Vec::new();
        for movie in self.catalog.catalog() {
            if self.posters.contains_key(&movie.id) {
                continue;
            }
            self.posters.insert(movie.id, Poster::Loading);

            let id = movie.id;
            let client = self.client.clone();
            let url = movie.poster_url.clone();
            tasks.push(Task::perform(
                source::http::fetch_poster(client, url),
                move |result| Message::PosterLoaded(id, result),
            ));
        }

        Task::batch(tasks)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogFetched(result) => {
                self.catalog.finish_load(result);
                self.fetch_posters()
            }
            Message::PosterLoaded(id, Ok(bytes)) => {
                let handle = iced::widget::image::Handle::from_bytes(bytes);
                self.posters.insert(id, Poster::Ready(handle));
                Task::none()
            }
            Message::PosterLoaded(id, Err(e)) => {
                tracing::debug!(id, error = %e, "poster unavailable");
                self.posters.insert(id, Poster::Failed);
                Task::none()
            }

            Message::SearchChanged(text) => {
                self.catalog.set_search_text(text);
                Task::none()
            }
            Message::ToggleFilterMenu => {
                self.show_filters = !self.show_filters;
                Task::none()
            }
            Message::MinRatingPicked(preset) => {
                // Picking the active preset again clears it
                if self.catalog.query().min_rating == Some(preset) {
                    self.catalog.set_min_rating(None);
                } else {
                    self.catalog.set_min_rating(Some(preset));
                }
                Task::none()
            }
            Message::MinRatingCleared => {
                self.catalog.set_min_rating(None);
                Task::none()
            }
            Message::SortPicked(key) => {
                self.catalog.set_sort_key(key);
                Task::none()
            }
            Message::ClearFilters => {
                self.catalog.clear_filters();
                Task::none()
            }

            Message::StartExploring => text_input::focus(ui::search_bar::search_input_id()),
            Message::ShowTopRated => {
                self.catalog.set_search_text(String::new());
                self.catalog.clear_filters();
                self.show_filters = false;
                Task::none()
            }

            Message::ToggleWatchLater(id) => {
                self.catalog.toggle_watch_later(id);
                Task::none()
            }
            Message::OpenDetails(id) => {
                self.catalog.select_movie(id);
                Task::none()
            }
            Message::CloseDetails => {
                self.catalog.clear_selection();
                Task::none()
            }
            Message::OpenDetailsLink(url) => {
                match open_or_copy(&url, self.catalog.notifier_mut(), |url| {
                    open::that_detached(url)
                }) {
                    Some(url) => iced::clipboard::write(url),
                    None => Task::none(),
                }
            }
            Message::CopyLink(url) => {
                self.catalog
                    .notifier_mut()
                    .notify("Link Copied", "IMDb link copied to the clipboard");
                iced::clipboard::write(url)
            }

            Message::CarouselScrolled(section, x) => {
                self.carousel_offsets.insert(section, x);
                Task::none()
            }
            Message::CarouselStep(section, step) => {
                let current = self.carousel_offsets.get(&section).copied().unwrap_or(0.0);
                let x = step.apply(current);
                self.carousel_offsets.insert(section, x);
                scrollable::scroll_to(section.scroll_id(), scrollable::AbsoluteOffset { x, y: 0.0 })
            }
            Message::PageScrolled(viewport) => {
                self.page_offset = viewport.absolute_offset().y;
                Task::none()
            }
            Message::BackToTop => {
                self.page_offset = 0.0;
                scrollable::scroll_to(page_id(), scrollable::AbsoluteOffset { x: 0.0, y: 0.0 })
            }

            Message::DismissToast(id) => {
                self.catalog.notifier_mut().dismiss(id);
                Task::none()
            }
            Message::TickToasts => {
                self.catalog.notifier_mut().prune(chrono::Utc::now());
                Task::none()
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subs = Vec::new();

        // Toast auto-dismiss ticker
        if !self.catalog.notifier().is_empty() {
            subs.push(iced::time::every(Duration::from_millis(250)).map(|_| Message::TickToasts));
        }

        // Escape closes the detail overlay
        if self.catalog.selected_id().is_some() {
            subs.push(keyboard::on_key_press(|key, _modifiers| match key.as_ref() {
                keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::CloseDetails),
                _ => None,
            }));
        }

        Subscription::batch(subs)
    }

    fn loading_view(&self) -> Element<'_, Message> {
        container(
            column![
                text("Loading Movie Database").size(32),
                text("Preparing your cinematic experience...")
                    .size(16)
                    .color(ui::MUTED),
            ]
            .spacing(12)
            .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }

    /// The carousels under the search bar
    fn sections(&self) -> Column<'_, Message> {
        let query = self.catalog.query();
        let saved = self.catalog.watch_later_ids();
        let posters = &self.posters;

        let rows = if query.is_refined() {
            let results: Vec<&Movie> = self.catalog.results().iter().collect();
            let title = format!("Search Results ({})", results.len());
            vec![carousel(Section::SearchResults, title, results, posters, saved)]
        } else {
            vec![
                carousel(
                    Section::TopRated,
                    "Top Rated Movies".to_string(),
                    self.catalog.top_rated(),
                    posters,
                    saved,
                ),
                carousel(
                    Section::Popular,
                    "Popular Movies".to_string(),
                    self.catalog.popular().iter().collect(),
                    posters,
                    saved,
                ),
                carousel(
                    Section::WatchLater,
                    "Watch Later".to_string(),
                    self.catalog.watch_later_movies(),
                    posters,
                    saved,
                ),
                carousel(
                    Section::AllMovies,
                    "All Movies".to_string(),
                    self.catalog.results().iter().collect(),
                    posters,
                    saved,
                ),
            ]
        };

        let mut column = Column::with_children(rows.into_iter().flatten()).spacing(48);
        if query.is_refined() && self.catalog.results().is_empty() {
            column = column.push(text("No movies match your search.").size(18).color(ui::MUTED));
        }
        column
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        if self.catalog.is_loading() {
            return self.loading_view();
        }

        let hero = ui::hero::hero(
            self.catalog.featured(),
            ui::hero::HeroStats {
                total_movies: self.catalog.total_movies(),
                average_rating: average_rating(self.catalog.catalog()),
            },
            self.catalog.origin(),
            &self.posters,
        );

        let body = column![
            ui::search_bar::search_bar(self.catalog.query(), self.show_filters),
            self.sections(),
        ]
        .spacing(32)
        .padding(32)
        .align_x(Alignment::Center);

        let page = scrollable(column![hero, body].width(Length::Fill))
            .id(page_id())
            .on_scroll(Message::PageScrolled)
            .width(Length::Fill)
            .height(Length::Fill);

        let mut layers: Vec<Element<'_, Message>> = vec![page.into()];

        // Toasts and the back-to-top button share the bottom-right corner
        let mut corner = Column::new().spacing(12).align_x(Alignment::End);
        if !self.catalog.notifier().is_empty() {
            corner = corner.push(ui::toast::toast_stack(self.catalog.notifier().toasts()));
        }
        if ui::back_to_top::is_visible(self.page_offset) {
            corner = corner.push(ui::back_to_top::back_to_top());
        }
        layers.push(
            container(corner)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(24)
                .align_x(iced::alignment::Horizontal::Right)
                .align_y(iced::alignment::Vertical::Bottom)
                .into(),
        );

        // Movie detail overlay
        if let Some(movie) = self.catalog.selected() {
            layers.push(ui::details::details(
                movie,
                self.posters.get(&movie.id),
                self.catalog.is_watch_later(movie.id),
            ));
        }

        stack(layers).width(Length::Fill).height(Length::Fill).into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    iced::application("Movie Browser", MovieBrowser::update, MovieBrowser::view)
        .subscription(MovieBrowser::subscription)
        .theme(MovieBrowser::theme)
        .window_size(iced::Size::new(1280.0, 860.0))
        .centered()
        .run_with(move || MovieBrowser::new(config))
}
