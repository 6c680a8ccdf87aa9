use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::{App, Focus};
use crate::autocomplete::{render_dropdown, render_input};
use crate::widgets::popup;

const TITLE: &str = "My auto complete component";
const CONTENT_WIDTH: u16 = 60;

const HELP_WIDGET: &str =
    "↑/↓ navigate · Enter select · Esc close · Ctrl+L clear · Tab leave · Ctrl+C quit";
const HELP_PAGE: &str = "Tab / click search to focus · q quit";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let frame_area = frame.area();
        self.layout.clear();
        self.layout.page = Some(frame_area);

        let [content_area, help_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame_area);
        let column = popup::centered_column(content_area, CONTENT_WIDTH);
        let [title_area, _gap, input_area, result_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(column);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            )))
            .centered(),
            title_area,
        );

        self.render_result(frame, result_area);
        render_help_line(self.focus, frame, help_area);

        let focused = self.focus == Focus::Widget;
        self.layout.input = Some(input_area);
        self.layout.clear_button = render_input(&mut self.widget, frame, input_area, focused);

        // Drawn last: the dropdown overlays the page below the input
        self.layout.dropdown = render_dropdown(&mut self.widget, frame, input_area);
    }

    fn render_result(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::raw("You try to find: "),
            Span::styled(self.selected.as_str(), Style::default().fg(Color::Cyan)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn render_help_line(focus: Focus, frame: &mut Frame, area: Rect) {
    let text = match focus {
        Focus::Widget => HELP_WIDGET,
        Focus::Page => HELP_PAGE,
    };
    frame.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray))),
        area,
    );
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
