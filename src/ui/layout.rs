//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::{LOGIN_SHORTCUT, REVEAL_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::Route;
use crate::submission::SubmissionState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split off the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar with the route and key hints
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Submission indicator
    let indicator = match (app.signup.state(), app.signup.last_outcome()) {
        (SubmissionState::InFlight, _) => {
            Span::styled(" ◌ ", Style::default().fg(Color::Yellow))
        }
        (_, Some(SubmissionState::Failed)) => Span::styled(" ● ", Style::default().fg(Color::Red)),
        _ => Span::styled(" ● ", Style::default().fg(Color::Green)),
    };
    spans.push(indicator);

    let route = app.router.current();
    spans.push(Span::styled(route.path(), Style::default().fg(Color::Cyan)));
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        route_hints(route),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);
}

fn route_hints(route: Route) -> String {
    match route {
        Route::Signup => format!(
            "Tab: next | {SUBMIT_SHORTCUT}: create account | {REVEAL_SHORTCUT}: show password | {LOGIN_SHORTCUT}: log in | Esc: back"
        ),
        Route::Home => "s: sign up | q: quit".to_string(),
        Route::Login => "Esc: back | q: quit".to_string(),
    }
}
