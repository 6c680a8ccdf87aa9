//! Region tracking for mouse hit-testing
//!
//! `LayoutRegions` records where each part of the screen was drawn on the
//! last frame, and `region_at()` maps a mouse position back to it.

use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The clear control on the search field's border
    ClearButton,
    /// The suggestion list
    Dropdown,
    /// The search field
    Input,
    /// Anything else on the host page
    Page,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub clear_button: Option<Rect>,
    pub dropdown: Option<Rect>,
    pub input: Option<Rect>,
    pub page: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Region under (`column`, `row`); overlapping regions resolve front to back
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    let position = Position::new(column, row);
    let contains = |rect: Option<Rect>| rect.is_some_and(|r| r.contains(position));

    if contains(regions.clear_button) {
        Some(Region::ClearButton)
    } else if contains(regions.dropdown) {
        Some(Region::Dropdown)
    } else if contains(regions.input) {
        Some(Region::Input)
    } else if contains(regions.page) {
        Some(Region::Page)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod layout_tests;
