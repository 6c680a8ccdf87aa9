//! Suggestion widget rendering
//!
//! The text field is a bordered single-line `TextArea`; the dropdown is a
//! list drawn directly below it, over whatever the host renders there.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use unicode_width::UnicodeWidthStr;

use super::autocomplete_state::AutocompleteState;
use super::highlight::QueryEmphasis;
use crate::widgets::popup;

pub const CLEAR_LABEL: &str = " ✕ ";
const LOADING_LABEL: &str = " loading… ";
const SELECTED_MARKER: &str = "► ";
const UNSELECTED_MARKER: &str = "  ";
const POPUP_BORDER_HEIGHT: u16 = 2;

/// Draw the text field; returns the clear control's area when it is shown
pub fn render_input(
    state: &mut AutocompleteState,
    frame: &mut Frame,
    area: Rect,
    focused: bool,
) -> Option<Rect> {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let mut title_spans = vec![Span::raw(" Search ")];
    if state.is_loading() {
        title_spans.push(Span::styled(LOADING_LABEL, Style::default().fg(Color::Yellow)));
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(title_spans))
        .border_style(Style::default().fg(border_color));

    let clear_area = clear_button_area(area).filter(|_| !state.query().is_empty());
    if clear_area.is_some() {
        block = block.title_top(
            Line::from(Span::styled(
                CLEAR_LABEL,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Right),
        );
    }

    let cursor_style = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    state.textarea.set_cursor_style(cursor_style);
    state.textarea.set_block(block);

    frame.render_widget(&state.textarea, area);
    clear_area
}

/// Where a right-aligned clear label lands on the top border of `area`
pub fn clear_button_area(area: Rect) -> Option<Rect> {
    let width = CLEAR_LABEL.width() as u16;
    // Both corners plus the label must fit
    if area.width < width + 2 || area.height == 0 {
        return None;
    }
    Some(Rect {
        x: area.x + area.width - 1 - width,
        y: area.y,
        width,
        height: 1,
    })
}

/// Draw the dropdown below `input_area`; returns its area when drawn
pub fn render_dropdown(
    state: &mut AutocompleteState,
    frame: &mut Frame,
    input_area: Rect,
) -> Option<Rect> {
    if !state.shows_dropdown() {
        state.list_offset = 0;
        return None;
    }

    let visible_count = state.suggestions().len().min(state.max_visible()) as u16;
    let popup_area = popup::popup_below_anchor(
        input_area,
        frame.area(),
        visible_count + POPUP_BORDER_HEIGHT,
    );
    if popup_area.height <= POPUP_BORDER_HEIGHT {
        return None;
    }

    let emphasis = QueryEmphasis::new(state.query());
    let highlighted = state.highlighted();
    let items: Vec<ListItem> = state
        .suggestions()
        .iter()
        .enumerate()
        .map(|(i, suggestion)| suggestion_item(&emphasis, suggestion, highlighted == Some(i)))
        .collect();

    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    let mut list_state = ListState::default().with_selected(highlighted);
    frame.render_stateful_widget(list, popup_area, &mut list_state);
    state.list_offset = list_state.offset();

    Some(popup_area)
}

fn suggestion_item<'a>(emphasis: &QueryEmphasis, suggestion: &'a str, selected: bool) -> ListItem<'a> {
    let (marker, base_style) = if selected {
        (
            SELECTED_MARKER,
            Style::default().fg(Color::Black).bg(Color::Cyan),
        )
    } else {
        (
            UNSELECTED_MARKER,
            Style::default().fg(Color::White).bg(Color::Black),
        )
    };

    let mut spans = vec![Span::styled(marker, base_style)];
    spans.extend(emphasis.split(suggestion).into_iter().map(|segment| {
        let style = if segment.emphasized {
            base_style.add_modifier(Modifier::BOLD)
        } else {
            base_style
        };
        Span::styled(segment.text, style)
    }));

    ListItem::new(Line::from(spans))
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
