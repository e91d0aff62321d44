/// User interface module
///
/// Every function here builds an `Element` from borrowed state and emits
/// `crate::Message`; no widget owns application state.
use iced::widget::{container, text};
use iced::{Background, Border, Color, Element, Theme};

pub mod back_to_top;
pub mod carousel;
pub mod details;
pub mod hero;
pub mod movie_card;
pub mod search_bar;
pub mod toast;

use crate::Message;

pub const ACCENT: Color = Color::from_rgb(0.96, 0.62, 0.04);
pub const HEART: Color = Color::from_rgb(0.94, 0.27, 0.36);
pub const MUTED: Color = Color::from_rgb(0.62, 0.64, 0.70);
pub const SURFACE: Color = Color::from_rgb(0.11, 0.12, 0.15);
pub const SURFACE_RAISED: Color = Color::from_rgb(0.16, 0.17, 0.21);

/// Rounded panel background used by cards, chips and the hero stats
pub fn panel(color: Color, radius: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Star rating badge, e.g. "★ 8.8"
pub fn rating_badge<'a>(rating: f64) -> Element<'a, Message> {
    container(text(format!("★ {:.1}", rating)).size(14).color(Color::BLACK))
        .padding([2, 8])
        .style(panel(ACCENT, 10.0))
        .into()
}

/// Poster image loading state, keyed by movie id in the app
#[derive(Debug, Clone)]
pub enum Poster {
    Loading,
    Ready(iced::widget::image::Handle),
    Failed,
}
