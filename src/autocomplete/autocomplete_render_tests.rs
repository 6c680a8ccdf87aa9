//! Tests for widget rendering

use insta::assert_snapshot;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier};

use super::*;
use crate::test_utils::test_helpers::{test_widget, widget_with_suggestions};

const TEST_WIDTH: u16 = 40;
const TEST_HEIGHT: u16 = 12;

fn create_test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(TEST_WIDTH, TEST_HEIGHT)).unwrap()
}

fn input_area() -> Rect {
    Rect::new(0, 0, TEST_WIDTH, 3)
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect::<String>()
}

#[test]
fn test_empty_input_shows_placeholder() {
    let (mut widget, _backend) = test_widget();
    let mut terminal = create_test_terminal();

    terminal
        .draw(|f| {
            render_input(&mut widget, f, input_area(), true);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    assert!(row_text(buffer, 0).contains("Search"));
    assert!(row_text(buffer, 1).contains("Type to search..."));
}

#[test]
fn test_clear_control_only_with_text() {
    let (mut empty, _backend) = test_widget();
    let (mut typed, _backend2, _) = widget_with_suggestions("pe", &["pear"]);
    let mut terminal = create_test_terminal();

    let mut empty_clear = None;
    terminal
        .draw(|f| {
            empty_clear = render_input(&mut empty, f, input_area(), true);
        })
        .unwrap();
    assert_eq!(empty_clear, None);
    assert!(!row_text(terminal.backend().buffer(), 0).contains('✕'));

    let mut typed_clear = None;
    terminal
        .draw(|f| {
            typed_clear = render_input(&mut typed, f, input_area(), true);
        })
        .unwrap();
    let clear = typed_clear.expect("clear control should be shown");
    assert_eq!(clear, Rect::new(36, 0, 3, 1));
    let buffer = terminal.backend().buffer();
    assert_eq!(buffer[(37, 0)].symbol(), "✕");
}

#[test]
fn test_loading_indicator_while_lookup_pending() {
    let (mut widget, _backend) = test_widget();
    let start = std::time::Instant::now();
    widget.open();
    crate::test_utils::test_helpers::type_text(&mut widget, "pe", start);
    widget.tick(start + std::time::Duration::from_millis(300));
    assert!(widget.is_loading());

    let mut terminal = create_test_terminal();
    terminal
        .draw(|f| {
            render_input(&mut widget, f, input_area(), true);
        })
        .unwrap();

    assert!(row_text(terminal.backend().buffer(), 0).contains("loading"));
}

#[test]
fn test_clear_button_area_too_narrow() {
    assert_eq!(clear_button_area(Rect::new(0, 0, 4, 3)), None);
    assert_eq!(clear_button_area(Rect::new(0, 0, 5, 3)), Some(Rect::new(1, 0, 3, 1)));
}

#[test]
fn test_dropdown_hidden_without_suggestions() {
    let (mut widget, _backend) = test_widget();
    widget.open();
    let mut terminal = create_test_terminal();

    let mut area = Some(Rect::default());
    terminal
        .draw(|f| {
            area = render_dropdown(&mut widget, f, input_area());
        })
        .unwrap();

    assert_eq!(area, None);
}

#[test]
fn test_dropdown_lists_suggestions_below_input() {
    let (mut widget, _backend, _) = widget_with_suggestions("pe", &["grapes", "pear", "pineapple"]);
    let mut terminal = create_test_terminal();

    let mut area = None;
    terminal
        .draw(|f| {
            area = render_dropdown(&mut widget, f, input_area());
        })
        .unwrap();

    assert_eq!(area, Some(Rect::new(0, 3, TEST_WIDTH, 5)));
    let buffer = terminal.backend().buffer();
    assert!(row_text(buffer, 4).contains("grapes"));
    assert!(row_text(buffer, 5).contains("pear"));
    assert!(row_text(buffer, 6).contains("pineapple"));
}

#[test]
fn test_dropdown_marks_highlighted_row() {
    let (mut widget, _backend, _) = widget_with_suggestions("pe", &["grapes", "pear", "pineapple"]);
    widget.highlight_next();
    widget.highlight_next();
    let mut terminal = create_test_terminal();

    terminal
        .draw(|f| {
            render_dropdown(&mut widget, f, input_area());
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    assert!(row_text(buffer, 5).contains("► pear"));
    assert!(!row_text(buffer, 4).contains('►'));
    assert_eq!(buffer[(3, 5)].bg, Color::Cyan);
}

#[test]
fn test_dropdown_emphasizes_query_match() {
    let (mut widget, _backend, _) = widget_with_suggestions("pe", &["grapes"]);
    let mut terminal = create_test_terminal();

    terminal
        .draw(|f| {
            render_dropdown(&mut widget, f, input_area());
        })
        .unwrap();

    // Row: border, two marker columns, then "grapes"; "pe" sits at columns 6..8
    let buffer = terminal.backend().buffer();
    assert!(buffer[(6, 4)].modifier.contains(Modifier::BOLD));
    assert!(buffer[(7, 4)].modifier.contains(Modifier::BOLD));
    assert!(!buffer[(3, 4)].modifier.contains(Modifier::BOLD));
    assert!(!buffer[(8, 4)].modifier.contains(Modifier::BOLD));
}

#[test]
fn test_dropdown_scrolls_to_highlighted_row() {
    let items: Vec<String> = (0..15).map(|i| format!("fruit{:02}", i)).collect();
    let refs: Vec<&str> = items.iter().map(String::as_str).collect();
    let (mut widget, _backend, _) = widget_with_suggestions("fruit", &refs);
    for _ in 0..12 {
        widget.highlight_next();
    }
    let mut terminal = Terminal::new(TestBackend::new(TEST_WIDTH, 20)).unwrap();

    let mut area = None;
    terminal
        .draw(|f| {
            area = render_dropdown(&mut widget, f, input_area());
        })
        .unwrap();

    // Ten visible rows plus borders
    assert_eq!(area.map(|a| a.height), Some(12));
    assert!(widget.list_offset > 0);
    assert!(widget.list_offset <= 11);
    let buffer = terminal.backend().buffer();
    let rows: Vec<String> = (4..14).map(|y| row_text(buffer, y)).collect();
    assert!(rows.iter().any(|r| r.contains("► fruit11")));
}

#[test]
fn test_highlighted_row_label_snapshot() {
    let (mut widget, _backend, _) = widget_with_suggestions("an", &["banana"]);
    widget.highlight_next();
    let mut terminal = create_test_terminal();

    terminal
        .draw(|f| {
            render_dropdown(&mut widget, f, input_area());
        })
        .unwrap();

    let row = row_text(terminal.backend().buffer(), 4);
    assert_snapshot!(row.trim_end(), @"│► banana                              │");
}
