//! Notification toast overlay

use crate::notify::{Notification, Severity};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const TOAST_WIDTH: u16 = 44;

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
        Severity::Info => Color::Blue,
    }
}

/// Draw the toast in the top-right corner, above everything else
pub fn draw(frame: &mut Frame, screen: Rect, notification: &Notification) {
    let width = TOAST_WIDTH.min(screen.width);
    let area = Rect {
        x: screen.right().saturating_sub(width + 1),
        y: screen.y.saturating_add(1),
        width,
        height: 4,
    }
    .intersection(screen);

    let color = severity_color(notification.severity);
    let lines = vec![
        Line::from(notification.text.clone()),
        Line::from(Span::styled(
            "Esc to dismiss",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let toast = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(toast, area);
}
