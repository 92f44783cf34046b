//! Autocomplete popup rendering
//!
//! Draws the suggestion dropdown just above the search input.

use std::ops::Range;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::autocomplete::AutocompleteState;
use crate::widgets::popup;

// Autocomplete popup display constants
const MAX_VISIBLE_SUGGESTIONS: usize = 10;
const MIN_POPUP_WIDTH: u16 = 24;
const MAX_POPUP_WIDTH: u16 = 72;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 2;
const SELECTED_MARKER: &str = "► ";
const UNSELECTED_MARKER: &str = "  ";

/// Render the autocomplete popup above the input field
pub fn render_popup(app: &App, frame: &mut Frame, input_area: Rect) {
    let state = &app.autocomplete;
    if !state.is_visible() || state.suggestions().is_empty() {
        return;
    }

    let window = visible_window(state.suggestions().len(), state.selected_index());
    let labels = entry_labels(state);

    let widest = labels
        .iter()
        .map(|label| label.width() as u16)
        .max()
        .unwrap_or(0);
    let popup_width = (widest + POPUP_PADDING).clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH);
    let popup_height = labels.len() as u16 + POPUP_BORDER_HEIGHT;
    let popup_area =
        popup::popup_above_anchor(input_area, popup_width, popup_height, POPUP_OFFSET_X);

    let items: Vec<ListItem> = labels
        .into_iter()
        .zip(window)
        .map(|(label, index)| {
            let style = if Some(index) == state.selected_index() {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White).bg(Color::Black)
            };
            ListItem::new(Line::from(Span::styled(label, style)))
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let title = match state.selected_index() {
        Some(i) => format!(" Suggestions {}/{} ", i + 1, state.suggestions().len()),
        None => format!(" Suggestions ({}) ", state.suggestions().len()),
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list, popup_area);
}

/// One label per visible entry: selection marker followed by the text
pub fn entry_labels(state: &AutocompleteState) -> Vec<String> {
    let suggestions = state.suggestions();
    visible_window(suggestions.len(), state.selected_index())
        .map(|i| {
            let marker = if Some(i) == state.selected_index() {
                SELECTED_MARKER
            } else {
                UNSELECTED_MARKER
            };
            format!("{}{}", marker, suggestions[i])
        })
        .collect()
}

/// Range of entries shown, scrolled so the selection stays visible
pub fn visible_window(len: usize, selected: Option<usize>) -> Range<usize> {
    let count = len.min(MAX_VISIBLE_SUGGESTIONS);
    let start = match selected {
        Some(i) if i >= count => i + 1 - count,
        _ => 0,
    };
    start..start + count
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
