use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

/// Single-line search input
pub struct InputState {
    pub textarea: TextArea<'static>,
    /// Keystrokes trigger suggest fetches only when set
    pub suggest_enabled: bool,
    focused: bool,
}

impl InputState {
    pub fn new(suggest_enabled: bool) -> Self {
        let mut state = Self {
            textarea: search_textarea(String::new()),
            suggest_enabled,
            focused: false,
        };
        state.set_focused(true);
        state
    }

    pub fn value(&self) -> &str {
        self.textarea.lines().first().map_or("", String::as_str)
    }

    /// Replace the whole content with one line, leaving the cursor at the end
    pub fn set_value(&mut self, value: &str) {
        self.textarea = search_textarea(value.replace(['\r', '\n'], " "));
        self.textarea.move_cursor(CursorMove::End);
        let focused = self.focused;
        self.set_focused(focused);
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;

        let border_color = if focused { Color::Cyan } else { Color::DarkGray };
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(border_color)),
        );

        // Hidden cursor while unfocused
        let cursor_style = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(cursor_style);
    }
}

fn search_textarea(line: String) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![line]);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text("Search bookmarks");
    textarea
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
