use iced::widget::{button, center, column, container, mouse_area, opaque, row, text};
use iced::{Alignment, Color, Element, Length};
use iced_aw::Wrap;

use super::movie_card::poster;
use super::{panel, rating_badge, Poster, HEART, MUTED, SURFACE, SURFACE_RAISED};
use crate::state::data::Movie;
use crate::Message;

/// Fixed presentation data; the movie source only provides title and rating
struct Placeholder {
    genres: [&'static str; 3],
    duration: &'static str,
    release_year: u16,
    director: &'static str,
    synopsis: &'static str,
}

const PLACEHOLDER: Placeholder = Placeholder {
    genres: ["Action", "Adventure", "Sci-Fi"],
    duration: "2h 28m",
    release_year: 2023,
    director: "Director Name",
    synopsis: "An epic cinematic journey that takes viewers on an unforgettable adventure \
               through stunning visuals and compelling storytelling. This masterpiece \
               combines cutting-edge cinematography with powerful performances to create \
               an immersive experience that will leave audiences on the edge of their seats.",
};

/// Detail overlay for the selected movie, drawn over a dimmed backdrop.
/// Clicking the backdrop closes it.
pub fn details<'a>(
    movie: &'a Movie,
    poster_state: Option<&'a Poster>,
    saved: bool,
) -> Element<'a, Message> {
    let tags: Vec<Element<'a, Message>> = PLACEHOLDER
        .genres
        .iter()
        .map(|&genre| {
            container(text(genre).size(13))
                .padding([2, 10])
                .style(panel(SURFACE_RAISED, 10.0))
                .into()
        })
        .collect();
    let genres = Wrap::with_elements(tags).spacing(6.0).line_spacing(6.0);

    let watch_label = if saved {
        text("♥ In Watch Later").color(HEART)
    } else {
        text("♡ Add to Watch Later")
    };

    let actions = row![
        button(watch_label)
            .padding([10, 18])
            .style(button::secondary)
            .on_press(Message::ToggleWatchLater(movie.id)),
        button(text("View on IMDb"))
            .padding([10, 18])
            .style(button::primary)
            .on_press(Message::OpenDetailsLink(movie.detail_url.clone())),
        button(text("Copy Link"))
            .padding([10, 18])
            .style(button::secondary)
            .on_press(Message::CopyLink(movie.detail_url.clone())),
        button(text("Close"))
            .padding([10, 18])
            .on_press(Message::CloseDetails),
    ]
    .spacing(10);

    let info = column![
        text(&movie.title).size(36),
        row![
            rating_badge(movie.rating),
            text(PLACEHOLDER.release_year.to_string()).color(MUTED),
            text(PLACEHOLDER.duration).color(MUTED),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
        genres,
        text(PLACEHOLDER.synopsis).size(16),
        text(format!("Directed by {}", PLACEHOLDER.director)).size(14).color(MUTED),
        actions,
    ]
    .spacing(14)
    .width(Length::Fill);

    let card = container(
        row![poster(movie, poster_state, 240.0, 360.0), info]
            .spacing(24)
            .align_y(Alignment::Start),
    )
    .padding(24)
    .max_width(900)
    .style(panel(SURFACE, 16.0));

    opaque(
        mouse_area(center(opaque(card)).style(|_theme| container::Style {
            background: Some(
                Color {
                    a: 0.8,
                    ..Color::BLACK
                }
                .into(),
            ),
            ..container::Style::default()
        }))
        .on_press(Message::CloseDetails),
    )
}
