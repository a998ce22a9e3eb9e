//! Placeholder screens reached through navigation

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_home(frame: &mut Frame, area: Rect) {
    draw_placeholder(
        frame,
        area,
        " Home ",
        vec![
            Line::from("Welcome."),
            Line::from(""),
            Line::from(Span::styled(
                "Press 's' to create an account.",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    );
}

pub fn draw_login(frame: &mut Frame, area: Rect) {
    draw_placeholder(
        frame,
        area,
        " Log in ",
        vec![
            Line::from("Log in is not available in this app."),
            Line::from(""),
            Line::from(Span::styled(
                "Press Esc to go back.",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    );
}

fn draw_placeholder(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line>) {
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(paragraph, area);
}
