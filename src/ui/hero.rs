use std::collections::HashMap;

use iced::widget::{button, column, container, mouse_area, row, text, Row};
use iced::{Alignment, Element, Length};

use super::movie_card::poster;
use super::{panel, Poster, ACCENT, MUTED, SURFACE, SURFACE_RAISED};
use crate::state::data::{CatalogOrigin, Movie, MovieId};
use crate::Message;

/// Numbers shown under the headline
pub struct HeroStats {
    pub total_movies: usize,
    pub average_rating: Option<f64>,
}

fn stat<'a>(value: String, label: &'a str) -> Element<'a, Message> {
    container(
        column![text(value).size(28).color(ACCENT), text(label).size(14).color(MUTED)]
            .spacing(4)
            .align_x(Alignment::Center),
    )
    .padding([12, 24])
    .style(panel(SURFACE_RAISED, 12.0))
    .into()
}

/// Banner at the top of the page: headline, stats and the featured movie
pub fn hero<'a>(
    featured: Option<&'a Movie>,
    stats: HeroStats,
    origin: Option<CatalogOrigin>,
    posters: &'a HashMap<MovieId, Poster>,
) -> Element<'a, Message> {
    let mut headline = column![
        text("Welcome to CineVault").size(16).color(ACCENT),
        text("Discover Cinematic Excellence").size(48),
        text(
            "Explore an immersive collection of movies. From blockbusters to hidden gems, \
             find your next favorite film."
        )
        .size(18)
        .color(MUTED),
    ]
    .spacing(12);

    if origin == Some(CatalogOrigin::Fallback) {
        headline = headline.push(
            text("Demo mode: showing sample movies because the movie service is unreachable.")
                .size(14)
                .color(MUTED),
        );
    }

    let actions = row![
        button(text("Start Exploring").size(16))
            .padding([10, 20])
            .on_press(Message::StartExploring),
        button(text("Top Rated Movies").size(16))
            .padding([10, 20])
            .style(button::secondary)
            .on_press(Message::ShowTopRated),
    ]
    .spacing(12);

    let average = stats
        .average_rating
        .map(|avg| format!("{:.1}/10", avg))
        .unwrap_or_else(|| "–".to_string());

    let stats_row = Row::new()
        .push(stat(average, "Average Rating"))
        .push(stat(stats.total_movies.to_string(), "Total Movies"))
        .spacing(16);

    let mut content = row![column![headline, actions, stats_row]
        .spacing(28)
        .width(Length::Fill)]
    .spacing(32)
    .align_y(Alignment::Center);

    if let Some(movie) = featured {
        let teaser = column![
            text("Featured Movie").size(14).color(MUTED),
            featured_teaser(movie, posters),
        ]
        .spacing(8);
        content = content.push(teaser);
    }

    container(content)
        .padding(40)
        .width(Length::Fill)
        .style(panel(SURFACE, 0.0))
        .into()
}

fn featured_teaser<'a>(
    movie: &'a Movie,
    posters: &'a HashMap<MovieId, Poster>,
) -> Element<'a, Message> {
    let card = row![
        poster(movie, posters.get(&movie.id), 80.0, 120.0),
        column![
            text(&movie.title).size(20),
            text(format!("★ {:.1}/10", movie.rating)).size(16).color(ACCENT),
        ]
        .spacing(6),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    mouse_area(container(card).padding(12).style(panel(SURFACE_RAISED, 12.0)))
        .on_press(Message::OpenDetails(movie.id))
        .into()
}
