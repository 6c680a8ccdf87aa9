//! Suggestion widget state
//!
//! Owns the text field, the suggestion list, the open flag and the
//! highlighted row. Lookups are driven by the debounced query text: whenever
//! it or the open flag changes, the widget either issues a lookup or clears
//! its suggestions.

use std::time::Instant;

use ratatui::style::{Color, Style};
use tui_textarea::TextArea;

use crate::config::WidgetConfig;
use crate::debounce::Debouncer;
use crate::lookup::{LookupClient, LookupResponse};

/// Notification for the host, returned by the handler that caused it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetOutcome {
    /// A suggestion was chosen, or the field was cleared (empty string)
    Selected(String),
}

pub struct AutocompleteState {
    pub textarea: TextArea<'static>,
    suggestions: Vec<String>,
    open: bool,
    /// None means nothing is highlighted; otherwise always < suggestions.len()
    highlighted: Option<usize>,
    debouncer: Debouncer,
    /// Query text that stayed unchanged for the debounce delay
    debounced_query: String,
    lookup: LookupClient,
    placeholder: String,
    max_visible: usize,
    /// First suggestion shown in the dropdown, updated on render
    pub(crate) list_offset: usize,
}

impl AutocompleteState {
    pub fn new(lookup: LookupClient, config: &WidgetConfig) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(config.placeholder.clone());
        textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));

        Self {
            textarea,
            suggestions: Vec::new(),
            open: false,
            highlighted: None,
            debouncer: Debouncer::new(config.debounce_ms),
            debounced_query: String::new(),
            lookup,
            placeholder: config.placeholder.clone(),
            max_visible: config.max_visible.max(1),
            list_offset: 0,
        }
    }

    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    pub fn debounced_query(&self) -> &str {
        &self.debounced_query
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True while the latest lookup has not answered yet
    pub fn is_loading(&self) -> bool {
        self.lookup.is_in_flight()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    /// Whether the dropdown list is drawn
    pub fn shows_dropdown(&self) -> bool {
        self.open && !self.suggestions.is_empty()
    }

    /// Record a user edit of the text field
    pub fn on_text_changed(&mut self, now: Instant) {
        self.highlighted = None;
        self.debouncer.schedule_at(now);
    }

    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.sync_lookup();
    }

    pub fn close(&mut self) {
        self.highlighted = None;
        if !self.open {
            return;
        }
        self.open = false;
        self.sync_lookup();
    }

    /// Move the highlight down one row, stopping at the last suggestion
    pub fn highlight_next(&mut self) {
        let Some(last) = self.suggestions.len().checked_sub(1) else {
            return;
        };
        self.highlighted = Some(match self.highlighted {
            None => 0,
            Some(i) => (i + 1).min(last),
        });
    }

    /// Move the highlight up one row, stopping at the first suggestion
    pub fn highlight_previous(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            None => 0,
            Some(i) => i.saturating_sub(1),
        });
    }

    /// Choose the suggestion at `index`
    pub fn select(&mut self, index: usize, now: Instant) -> Option<WidgetOutcome> {
        let suggestion = self.suggestions.get(index)?.clone();
        Some(self.select_value(suggestion, now))
    }

    /// Fill the field with `value`, close the dropdown and report the choice
    pub fn select_value(&mut self, value: String, now: Instant) -> WidgetOutcome {
        log::info!("Selected {:?}", value);
        self.replace_text(&value, now);
        self.reset_dropdown();
        WidgetOutcome::Selected(value)
    }

    /// Empty the field and close the dropdown
    pub fn clear(&mut self, now: Instant) -> WidgetOutcome {
        self.replace_text("", now);
        self.reset_dropdown();
        WidgetOutcome::Selected(String::new())
    }

    /// Advance timers and apply finished lookups
    ///
    /// Returns true when a lookup was issued or answered, which changes
    /// what the widget draws.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if self.debouncer.fire_if_due(now) {
            let query = self.query().to_string();
            if query != self.debounced_query {
                self.debounced_query = query;
                self.sync_lookup();
                changed = true;
            }
        }

        while let Some(response) = self.lookup.poll() {
            self.apply_response(response);
            changed = true;
        }
        changed
    }

    fn apply_response(&mut self, response: LookupResponse) {
        match response {
            LookupResponse::Suggestions { request_id, items } => {
                log::debug!("Lookup {} returned {} suggestions", request_id, items.len());
                if self.open {
                    self.suggestions = items;
                    self.clamp_highlight();
                }
            }
            LookupResponse::Failed { request_id, error } => {
                // Previous suggestions stay as they are
                log::error!("Lookup {} failed: {}", request_id, error);
            }
        }
    }

    /// Issue a lookup for the debounced query, or clear suggestions when
    /// the dropdown is closed or there is nothing to look up
    fn sync_lookup(&mut self) {
        if self.open && !self.debounced_query.is_empty() {
            let query = self.debounced_query.clone();
            if let Err(error) = self.lookup.issue(&query) {
                log::error!("Dropping lookup for {:?}: {}", query, error);
            }
        } else {
            self.lookup.invalidate();
            self.suggestions.clear();
            self.highlighted = None;
        }
    }

    fn reset_dropdown(&mut self) {
        self.lookup.invalidate();
        self.suggestions.clear();
        self.open = false;
        self.highlighted = None;
    }

    fn replace_text(&mut self, text: &str, now: Instant) {
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(text);
        self.debouncer.schedule_at(now);
    }

    fn clamp_highlight(&mut self) {
        if self.highlighted.is_some_and(|i| i >= self.suggestions.len()) {
            self.highlighted = self.suggestions.len().checked_sub(1);
        }
    }
}

#[cfg(test)]
#[path = "autocomplete_state_tests.rs"]
mod autocomplete_state_tests;
