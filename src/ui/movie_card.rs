use iced::widget::{button, column, container, horizontal_space, image, mouse_area, row, text};
use iced::{Alignment, ContentFit, Element, Length};

use super::{panel, rating_badge, Poster, HEART, MUTED, SURFACE, SURFACE_RAISED};
use crate::state::data::{Movie, MovieId};
use crate::Message;

pub const CARD_WIDTH: f32 = 180.0;
pub const POSTER_HEIGHT: f32 = 270.0;

/// Poster area: the image once downloaded, a titled placeholder otherwise
pub fn poster<'a>(
    movie: &'a Movie,
    poster: Option<&'a Poster>,
    width: f32,
    height: f32,
) -> Element<'a, Message> {
    match poster {
        Some(Poster::Ready(handle)) => image(handle.clone())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(Poster::Loading) => placeholder("Loading…", width, height),
        Some(Poster::Failed) | None => placeholder(&movie.title, width, height),
    }
}

fn placeholder<'a>(label: &str, width: f32, height: f32) -> Element<'a, Message> {
    container(text(label.to_string()).size(14).color(MUTED))
        .padding(12)
        .center_x(Length::Fixed(width))
        .center_y(Length::Fixed(height))
        .style(panel(SURFACE_RAISED, 8.0))
        .into()
}

/// Heart toggle for the watch-later list
pub fn watch_later_button<'a>(movie_id: MovieId, saved: bool) -> Element<'a, Message> {
    let label = if saved { "♥" } else { "♡" };
    let heart = text(label).size(20);
    let heart = if saved { heart.color(HEART) } else { heart };

    button(heart)
        .padding([2, 8])
        .style(button::text)
        .on_press(Message::ToggleWatchLater(movie_id))
        .into()
}

fn imdb_button<'a>(movie: &Movie) -> Element<'a, Message> {
    button(text("IMDb").size(12))
        .padding([2, 6])
        .style(button::text)
        .on_press(Message::OpenDetailsLink(movie.detail_url.clone()))
        .into()
}

/// A single movie card: poster, rating, title, an IMDb link and the
/// watch-later heart. Clicking anywhere but the buttons opens the detail overlay.
pub fn movie_card<'a>(
    movie: &'a Movie,
    poster_state: Option<&'a Poster>,
    saved: bool,
) -> Element<'a, Message> {
    let body = column![
        poster(movie, poster_state, CARD_WIDTH, POSTER_HEIGHT),
        row![
            rating_badge(movie.rating),
            horizontal_space(),
            imdb_button(movie),
            watch_later_button(movie.id, saved),
        ]
        .align_y(Alignment::Center),
        text(&movie.title).size(16),
    ]
    .spacing(8)
    .width(Length::Fixed(CARD_WIDTH));

    mouse_area(container(body).padding(8).style(panel(SURFACE, 12.0)))
        .on_press(Message::OpenDetails(movie.id))
        .into()
}
