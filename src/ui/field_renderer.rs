//! Field rendering utilities for the signup form

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Border and message color for a field in the error state
const ERROR_COLOR: Color = Color::Red;

/// Height of a text input including the inline error line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a text input with an optional inline error underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    error: Option<&str>,
    is_active: bool,
) {
    let border_style = if error.is_some() {
        Style::default().fg(ERROR_COLOR)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let input_area = Rect {
        height: area.height.min(3),
        ..area
    };
    let content = Paragraph::new(Line::from(vec![
        Span::styled(value, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));
    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(content.block(block), input_area);

    if let Some(message) = error {
        if area.height > 3 {
            let message_area = Rect {
                y: area.y + 3,
                height: 1,
                ..area
            };
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!(" {message}"),
                    Style::default().fg(ERROR_COLOR),
                )),
                message_area,
            );
        }
    }
}

/// Draw the terms checkbox
pub fn draw_checkbox(frame: &mut Frame, area: Rect, label: &str, checked: bool, is_active: bool) {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(mark, style),
            Span::raw(" "),
            Span::styled(label, style),
        ])),
        area,
    );
}
