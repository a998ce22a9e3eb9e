//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod layout;
mod notifications;
mod screens;
mod signup;

use crate::app::App;
use crate::state::Route;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    match app.router.current() {
        Route::Signup => signup::draw(frame, main_area, app),
        Route::Home => screens::draw_home(frame, main_area),
        Route::Login => screens::draw_login(frame, main_area),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Overlays go last so they sit on top
    notifications::draw(frame, app.screen());
    if let Some(message) = &app.screen().alert {
        components::render_alert_dialog(frame, message);
    }
}
