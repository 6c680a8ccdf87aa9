use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::{App, Focus};
use crate::layout::{Region, region_at};

impl App {
    /// Route a terminal event; returns true when the screen needs a redraw
    pub fn handle_event(&mut self, event: Event, now: Instant) -> bool {
        match event {
            // Only process key press events (avoid duplicates)
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key, now);
                true
            }
            Event::Mouse(mouse) => {
                self.handle_mouse_event(mouse, now);
                true
            }
            Event::Resize(_, _) => true,
            _ => false,
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::Widget => {
                let outcome = self.widget.handle_key(key, now);
                self.apply_outcome(outcome);
            }
            Focus::Page => self.handle_page_key(key),
        }
    }

    /// Keys that work regardless of focus; returns true if handled
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
                self.should_quit = true;
                true
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_focus();
                true
            }
            _ => false,
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter | KeyCode::Char('i') | KeyCode::Char('/') => self.focus_widget(),
            _ => {}
        }
    }

    /// Handle mouse events; only left presses matter
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        match region_at(&self.layout, mouse.column, mouse.row) {
            Some(Region::Input) => {
                self.focus_widget();
                self.widget.handle_input_click();
            }
            Some(Region::ClearButton) => {
                self.focus_widget();
                let outcome = Some(self.widget.clear(now));
                self.apply_outcome(outcome);
            }
            Some(Region::Dropdown) => {
                let outcome = self
                    .layout
                    .dropdown
                    .and_then(|area| dropdown_row(area.y, mouse.row, area.height))
                    .and_then(|row| self.widget.handle_row_click(row, now));
                self.apply_outcome(outcome);
            }
            Some(Region::Page) | None => self.focus_page(),
        }
    }

    /// Advance the widget's timers and apply finished lookups; returns true
    /// when the screen needs a redraw
    pub fn tick(&mut self, now: Instant) -> bool {
        self.widget.tick(now)
    }
}

/// Row index inside a bordered list, None on the borders
fn dropdown_row(top: u16, row: u16, height: u16) -> Option<usize> {
    let first = top + 1;
    let last = top + height.saturating_sub(1);
    if row >= first && row < last {
        Some((row - first) as usize)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
