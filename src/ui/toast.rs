use iced::widget::{button, column, container, row, text, Column};
use iced::{Alignment, Element, Length};

use super::{panel, ACCENT, MUTED, SURFACE_RAISED};
use crate::notify::Toast;
use crate::Message;

fn toast_card<'a>(toast: &'a Toast) -> Element<'a, Message> {
    container(
        row![
            column![
                text(&toast.title).size(16).color(ACCENT),
                text(&toast.description).size(14).color(MUTED),
            ]
            .spacing(2)
            .width(Length::Fill),
            button(text("✕").size(12))
                .style(button::text)
                .on_press(Message::DismissToast(toast.id)),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding(12)
    .width(Length::Fixed(340.0))
    .style(panel(SURFACE_RAISED, 10.0))
    .into()
}

/// Stacked toasts, newest at the bottom
pub fn toast_stack<'a>(toasts: &'a [Toast]) -> Element<'a, Message> {
    Column::with_children(toasts.iter().map(toast_card))
        .spacing(8)
        .into()
}
