//! Home screen: hero copy and animated stat counters

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the home screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    draw_hero(frame, chunks[0]);
    draw_counters(frame, chunks[1], app);
}

fn draw_hero(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Coaching software that keeps your athletes on track",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Plans, progress and messaging in one place. Get in touch for a demo.",
            Style::default().fg(Color::Gray),
        )),
    ];

    let hero = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(hero, area);
}

fn draw_counters(frame: &mut Frame, area: Rect, app: &App) {
    let constraints: Vec<Constraint> = app
        .state
        .counters
        .iter()
        .map(|_| Constraint::Ratio(1, app.state.counters.len() as u32))
        .collect();

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (counter, cell) in app.state.counters.iter().zip(cells.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                counter.display(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                counter.label,
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let stat = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(stat, *cell);
    }
}
