use crate::autocomplete::{AutocompleteState, WidgetOutcome};
use crate::layout::LayoutRegions;

/// Which part of the page receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Widget,
    Page,
}

/// Application state
pub struct App {
    pub widget: AutocompleteState,
    /// Last value the widget reported
    pub selected: String,
    pub focus: Focus,
    pub layout: LayoutRegions,
    pub should_quit: bool,
}

impl App {
    /// Create the page with the widget focused
    pub fn new(widget: AutocompleteState) -> Self {
        let mut app = Self {
            widget,
            selected: String::new(),
            focus: Focus::Page,
            layout: LayoutRegions::new(),
            should_quit: false,
        };
        app.focus_widget();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The value to print on exit, if any
    pub fn output(&self) -> Option<&str> {
        if self.selected.is_empty() {
            None
        } else {
            Some(&self.selected)
        }
    }

    /// Focusing the widget opens its dropdown
    pub fn focus_widget(&mut self) {
        if self.focus != Focus::Widget {
            self.focus = Focus::Widget;
            self.widget.open();
        }
    }

    /// Leaving the widget dismisses its dropdown
    pub fn focus_page(&mut self) {
        self.focus = Focus::Page;
        self.widget.handle_outside_click();
    }

    pub fn toggle_focus(&mut self) {
        match self.focus {
            Focus::Widget => self.focus_page(),
            Focus::Page => self.focus_widget(),
        }
    }

    pub(crate) fn apply_outcome(&mut self, outcome: Option<WidgetOutcome>) {
        if let Some(WidgetOutcome::Selected(value)) = outcome {
            self.selected = value;
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
