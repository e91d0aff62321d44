use std::collections::HashMap;

use iced::widget::{button, column, horizontal_space, row, scrollable, text, Row};
use iced::{Alignment, Element, Length};

use super::movie_card::movie_card;
use super::Poster;
use crate::state::data::{Movie, MovieId};
use crate::Message;

/// How far the arrow buttons move a carousel
pub const SCROLL_STEP: f32 = 320.0;

/// The horizontally scrolling rows on the main page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    SearchResults,
    TopRated,
    Popular,
    WatchLater,
    AllMovies,
}

impl Section {
    pub fn scroll_id(self) -> scrollable::Id {
        scrollable::Id::new(match self {
            Section::SearchResults => "carousel-search",
            Section::TopRated => "carousel-top-rated",
            Section::Popular => "carousel-popular",
            Section::WatchLater => "carousel-watch-later",
            Section::AllMovies => "carousel-all",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Left,
    Right,
}

impl Step {
    /// New horizontal offset after one step, never negative
    pub fn apply(self, offset: f32) -> f32 {
        match self {
            Step::Left => (offset - SCROLL_STEP).max(0.0),
            Step::Right => offset + SCROLL_STEP,
        }
    }
}

/// A titled row of movie cards. Returns `None` for an empty list so the
/// section is left out entirely.
pub fn carousel<'a>(
    section: Section,
    title: String,
    movies: Vec<&'a Movie>,
    posters: &'a HashMap<MovieId, Poster>,
    watch_later: &'a [MovieId],
) -> Option<Element<'a, Message>> {
    if movies.is_empty() {
        return None;
    }

    let header = row![
        text(title).size(26),
        horizontal_space(),
        button(text("‹").size(20))
            .style(button::secondary)
            .on_press(Message::CarouselStep(section, Step::Left)),
        button(text("›").size(20))
            .style(button::secondary)
            .on_press(Message::CarouselStep(section, Step::Right)),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let cards = Row::with_children(movies.into_iter().map(|movie| {
        movie_card(movie, posters.get(&movie.id), watch_later.contains(&movie.id))
    }))
    .spacing(16);

    let strip = scrollable(cards)
        .id(section.scroll_id())
        .direction(scrollable::Direction::Horizontal(scrollable::Scrollbar::new()))
        .on_scroll(move |viewport| {
            Message::CarouselScrolled(section, viewport.absolute_offset().x)
        })
        .width(Length::Fill);

    Some(column![header, strip].spacing(12).into())
}
