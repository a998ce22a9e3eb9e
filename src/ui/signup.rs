//! Signup form rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::{draw_checkbox, draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{Focus, Route};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Widest the form grows on large terminals
const FORM_WIDTH: u16 = 60;

/// Draw the signup form centered in the area
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let screen = app.screen();
    let form_area = centered(area, FORM_WIDTH);

    let block = Block::default()
        .title(format!(" {} ", Route::Signup.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, form_area);

    let mut constraints: Vec<Constraint> = screen
        .inputs
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.extend([
        Constraint::Length(1),             // Terms
        Constraint::Length(1),             // Spacer
        Constraint::Length(BUTTON_HEIGHT), // Submit
        Constraint::Length(1),             // Login link
        Constraint::Min(0),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(form_area);

    let focus = screen.focus();
    for (idx, input) in screen.inputs.iter().enumerate() {
        draw_field(
            frame,
            chunks[idx],
            input.name.label(),
            &screen.display_value(input),
            input.error.as_deref(),
            focus == Focus::Input(input.name),
        );
    }

    let next = screen.inputs.len();
    draw_checkbox(
        frame,
        chunks[next],
        "I agree to the Terms & Conditions",
        screen.terms_accepted,
        focus == Focus::Terms,
    );

    render_button(
        frame,
        chunks[next + 2],
        &screen.submit.label,
        focus == Focus::Submit,
        screen.submit.enabled,
    );

    let login = Paragraph::new(Line::from(vec![
        Span::styled(
            "Already have an account? ",
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("Log in", Style::default().fg(Color::Cyan)),
    ]));
    frame.render_widget(login, chunks[next + 3]);
}

fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
