use iced::widget::{button, column, container, row, text, text_input, Row};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use super::{panel, MUTED, SURFACE, SURFACE_RAISED};
use crate::state::data::{Query, SortKey, MIN_RATING_PRESETS};
use crate::Message;

pub fn search_input_id() -> text_input::Id {
    text_input::Id::new("search")
}

fn chip<'a>(label: String, on_remove: Message) -> Element<'a, Message> {
    container(
        row![
            text(label).size(14),
            button(text("✕").size(12))
                .padding([0, 4])
                .style(button::text)
                .on_press(on_remove),
        ]
        .spacing(6)
        .align_y(Alignment::Center),
    )
    .padding([4, 10])
    .style(panel(SURFACE_RAISED, 12.0))
    .into()
}

fn filter_menu<'a>(query: &Query) -> Element<'a, Message> {
    let presets = Row::with_children(MIN_RATING_PRESETS.iter().map(|&preset| {
        let style = if query.min_rating == Some(preset) {
            button::primary
        } else {
            button::secondary
        };
        button(text(format!("{}+", preset)).size(14))
            .style(style)
            .on_press(Message::MinRatingPicked(preset))
            .into()
    }))
    .spacing(8);

    let sorts = Row::with_children(SortKey::ALL.iter().map(|&key| {
        let style = if query.sort_key == key {
            button::primary
        } else {
            button::secondary
        };
        button(text(key.label()).size(14))
            .style(style)
            .on_press(Message::SortPicked(key))
            .into()
    }))
    .spacing(8);

    let mut menu = column![
        text("Minimum Rating").size(14).color(MUTED),
        presets,
        text("Sort By").size(14).color(MUTED),
        sorts,
    ]
    .spacing(10);

    if query.active_filter_count() > 0 {
        menu = menu.push(
            button(text("Clear Filters").size(14))
                .style(button::secondary)
                .on_press(Message::ClearFilters),
        );
    }

    container(menu)
        .padding(16)
        .style(panel(SURFACE, 12.0))
        .into()
}

/// Search box, filter menu and the chips for every active criterion
pub fn search_bar<'a>(query: &'a Query, show_filters: bool) -> Element<'a, Message> {
    let mut input_row = row![text_input("Search for movies...", &query.search_text)
        .id(search_input_id())
        .on_input(Message::SearchChanged)
        .padding(14)
        .size(18)
        .width(Length::Fill)]
    .spacing(12)
    .align_y(Alignment::Center);

    if !query.search_text.is_empty() {
        input_row = input_row.push(
            button(text("✕").size(16))
                .style(button::text)
                .on_press(Message::SearchChanged(String::new())),
        );
    }

    let count = query.active_filter_count();
    let filter_label = if count > 0 {
        format!("Filters ({})", count)
    } else {
        "Filters".to_string()
    };
    input_row = input_row.push(
        button(text(filter_label).size(16))
            .padding([12, 20])
            .style(button::secondary)
            .on_press(Message::ToggleFilterMenu),
    );

    let mut content = column![input_row].spacing(12);

    if show_filters {
        content = content.push(filter_menu(query));
    }

    let mut chips: Vec<Element<'a, Message>> = Vec::new();
    if !query.search_text.is_empty() {
        chips.push(chip(
            format!("Search: \"{}\"", query.search_text),
            Message::SearchChanged(String::new()),
        ));
    }
    if let Some(min) = query.min_rating {
        chips.push(chip(format!("Rating: {}+", min), Message::MinRatingCleared));
    }
    if query.sort_key != SortKey::default() {
        chips.push(chip(
            format!("Sort: {}", query.sort_key.chip_label()),
            Message::SortPicked(SortKey::default()),
        ));
    }
    if !chips.is_empty() {
        content = content.push(Wrap::with_elements(chips).spacing(8.0).line_spacing(8.0));
    }

    container(content).max_width(900).into()
}
