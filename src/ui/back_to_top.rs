use iced::widget::{button, text};
use iced::Element;

use crate::Message;

/// Page offset after which the button shows up
pub const SHOW_AFTER: f32 = 300.0;

pub fn is_visible(page_offset: f32) -> bool {
    page_offset > SHOW_AFTER
}

pub fn back_to_top<'a>() -> Element<'a, Message> {
    button(text("↑").size(24))
        .padding([8, 16])
        .on_press(Message::BackToTop)
        .into()
}
