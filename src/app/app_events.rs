use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;
use crate::focus::Focus;

impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Only process key press events (avoid duplicates)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::InputField => self.handle_input_field_key(key),
            Focus::Page => self.handle_page_key(key),
        }
    }

    /// Returns true if the key was consumed
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                true
            }
            KeyCode::BackTab => {
                self.toggle_focus();
                true
            }
            KeyCode::Esc => {
                if self.autocomplete.is_visible() {
                    self.autocomplete.hide();
                } else {
                    self.should_quit = true;
                }
                true
            }
            _ => false,
        }
    }

    fn handle_input_field_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.autocomplete.select_previous(),
            KeyCode::Down => self.autocomplete.select_next(),
            KeyCode::Tab => {
                self.accept_suggestion();
            }
            KeyCode::Enter => {
                if !(self.autocomplete.is_visible() && self.accept_suggestion()) {
                    self.submit();
                }
            }
            // The input is a single line
            _ if inserts_newline(&key) => {}
            _ => {
                if self.input.textarea.input(key) {
                    self.on_input_changed();
                }
            }
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('i') | KeyCode::Char('/') | KeyCode::Tab => {
                self.set_focus(Focus::InputField);
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.results.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.results.select_previous(),
            KeyCode::Enter => self.open_result(),
            _ => {}
        }
    }
}

/// Keys tui-textarea would turn into a line break
fn inserts_newline(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('\n' | '\r') => true,
        KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
