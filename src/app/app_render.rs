use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::App;
use crate::autocomplete::autocomplete_render;
use crate::focus::Focus;
use crate::results::ResultsStatus;

const INPUT_HEIGHT: u16 = 3;
const KEY_HINTS: &str =
    "Enter submit | Tab accept | Up/Down select | Shift+Tab switch focus | Esc close/quit";
const PAGE_KEY_HINTS: &str = "Enter open | Up/Down select | i edit search | q quit";
// Title line plus detail line
const HIT_HEIGHT: usize = 2;
const SELECTED_MARKER: &str = "► ";
const UNSELECTED_MARKER: &str = "  ";

impl App {
    pub fn render(&self, frame: &mut Frame) {
        // Page pane on top, search input at the bottom
        let layout = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(INPUT_HEIGHT),
        ])
        .split(frame.area());

        let page_area = layout[0];
        let input_area = layout[1];

        self.render_page(frame, page_area);
        frame.render_widget(&self.input.textarea, input_area);

        // Popup last so it draws over the page pane
        autocomplete_render::render_popup(self, frame, input_area);
    }

    fn render_page(&self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::Page {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" elasticbook ")
            .border_style(Style::default().fg(border_color));

        let label = Style::default().fg(Color::DarkGray);
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Location  ", label),
                Span::raw(self.location.as_str()),
            ]),
            Line::from(vec![
                Span::styled("Suggest   ", label),
                Span::raw(self.endpoint.as_deref().unwrap_or("disabled")),
            ]),
        ];

        if self.suggest.is_loading()
            && let Some(term) = &self.suggest.last_term
        {
            lines.push(Line::from(Span::styled(
                format!("Fetching suggestions for \"{}\"...", term),
                Style::default().fg(Color::Yellow),
            )));
        }

        if let Some(selection) = &self.last_selection {
            lines.push(Line::from(vec![
                Span::styled("Selected  ", label),
                Span::styled(selection.as_str(), Style::default().fg(Color::Green)),
            ]));
        }

        lines.push(Line::default());
        let hints = if self.focus == Focus::Page {
            PAGE_KEY_HINTS
        } else {
            KEY_HINTS
        };
        lines.push(Line::from(Span::styled(hints, label)));

        // Rows left inside the border once the header and a status line fit
        let free_rows = (area.height as usize).saturating_sub(2 + lines.len() + 1);
        lines.extend(self.result_lines(free_rows));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn result_lines(&self, free_rows: usize) -> Vec<Line<'_>> {
        let results = &self.results;
        let term = results.term().unwrap_or_default();
        let mut lines = vec![Line::default()];

        match results.status() {
            ResultsStatus::Idle => return Vec::new(),
            ResultsStatus::Searching => lines.push(Line::from(Span::styled(
                format!("Searching bookmarks for \"{}\"...", term),
                Style::default().fg(Color::Yellow),
            ))),
            ResultsStatus::Failed => lines.push(Line::from(Span::styled(
                format!("Search for \"{}\" failed", term),
                Style::default().fg(Color::Red),
            ))),
            ResultsStatus::Loaded if results.hits().is_empty() => {
                lines.push(Line::from(format!("No bookmarks found for \"{}\"", term)));
            }
            ResultsStatus::Loaded => {
                lines.push(Line::from(format!(
                    "Found {} bookmarks for \"{}\"",
                    results.hits().len(),
                    term
                )));
                let capacity = (free_rows.saturating_sub(1) / HIT_HEIGHT).max(1);
                for index in results.visible_range(capacity) {
                    let hit = &results.hits()[index];
                    let selected = Some(index) == results.selected_index();
                    let (marker, title_style) = if selected {
                        (
                            SELECTED_MARKER,
                            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                        )
                    } else {
                        (UNSELECTED_MARKER, Style::default())
                    };
                    lines.push(Line::from(Span::styled(
                        format!("{}{}", marker, hit.label()),
                        title_style,
                    )));
                    lines.push(Line::from(Span::styled(
                        format!("    {}  {}  score {:.2}", hit.url, hit.date_added, hit.score),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
            }
        }

        lines
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
