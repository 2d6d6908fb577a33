//! Screen layout, nav tabs and status bar

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the screen into nav bar, main content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Draw the nav bar with the active section highlighted
pub fn draw_nav(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " ProFit Coach ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    for view in [View::Home, View::Contact] {
        let style = if app.state.current_view == view {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(view.label(), style));
    }

    let nav = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(nav, area);
}

/// Draw the key-hint status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match app.state.current_view {
        View::Home => " c Contact  q Quit",
        View::Contact => {
            if app.controller.is_submitting() {
                " Sending..."
            } else {
                " Tab Next field  Ctrl+S Send  Esc Back"
            }
        }
    };

    let status = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}
