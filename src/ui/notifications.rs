//! Toast notifications in the top-right corner

use crate::state::{NotificationKind, SignupScreen};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TOAST_HEIGHT: u16 = 3;
const TOAST_MAX_WIDTH: u16 = 48;

/// Draw live toasts stacked downward, oldest on top
pub fn draw(frame: &mut Frame, screen: &SignupScreen) {
    let area = frame.area();

    for (idx, toast) in screen.toasts.iter().enumerate() {
        let y = area.y + 1 + idx as u16 * TOAST_HEIGHT;
        if y + TOAST_HEIGHT > area.bottom() {
            break;
        }

        let label = toast.label();
        let width = (label.chars().count() as u16 + 4)
            .min(TOAST_MAX_WIDTH)
            .min(area.width);
        let toast_area = Rect {
            x: area.right().saturating_sub(width + 1),
            y,
            width,
            height: TOAST_HEIGHT,
        };

        let color = match toast.kind {
            NotificationKind::Success => Color::Green,
            NotificationKind::Error => Color::Red,
        };

        frame.render_widget(Clear, toast_area);
        frame.render_widget(
            Paragraph::new(format!(" {label}"))
                .style(Style::default().fg(Color::White).bg(color))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color).bg(color)),
                ),
            toast_area,
        );
    }
}
