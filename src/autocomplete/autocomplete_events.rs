//! Keyboard and mouse handling for the suggestion widget

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::autocomplete_state::{AutocompleteState, WidgetOutcome};

impl AutocompleteState {
    /// Handle a key press while the widget has focus
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<WidgetOutcome> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Down => {
                if self.is_open() {
                    self.highlight_next();
                } else {
                    self.open();
                }
                None
            }
            KeyCode::Up => {
                self.highlight_previous();
                None
            }
            KeyCode::Enter => self.highlighted().and_then(|i| self.select(i, now)),
            // Newline keys in tui-textarea; the field is single-line
            KeyCode::Char('m') | KeyCode::Char('j') if ctrl => None,
            KeyCode::Esc => {
                self.close();
                None
            }
            KeyCode::Char('l') if ctrl => Some(self.clear(now)),
            _ => {
                if self.textarea.input(key) {
                    self.on_text_changed(now);
                }
                None
            }
        }
    }

    /// Left click on the text field
    pub fn handle_input_click(&mut self) {
        self.open();
    }

    /// Left click on a visible dropdown row (0 = first visible row)
    pub fn handle_row_click(&mut self, row: usize, now: Instant) -> Option<WidgetOutcome> {
        if !self.shows_dropdown() {
            return None;
        }
        self.select(self.list_offset + row, now)
    }

    /// Left click anywhere outside the widget
    pub fn handle_outside_click(&mut self) {
        self.close();
    }
}

#[cfg(test)]
#[path = "autocomplete_events_tests.rs"]
mod autocomplete_events_tests;
