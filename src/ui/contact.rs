//! Contact form view: fields with inline errors and the buttons row

use crate::app::App;
use crate::state::{Form, FormField, FIELD_COUNT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
const BUTTON_HEIGHT: u16 = 3;

/// Draw the contact form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.contact_form;

    // One 3-row slot per single-line field, a taller one for the message,
    // then the buttons row
    let mut constraints = Vec::with_capacity(FIELD_COUNT + 1);
    for index in 0..FIELD_COUNT {
        let is_multiline = form.get_field(index).is_some_and(|f| f.is_multiline);
        constraints.push(Constraint::Length(if is_multiline { 5 } else { 3 }));
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for index in 0..FIELD_COUNT {
        if let Some(field) = form.get_field(index) {
            draw_field(frame, chunks[index], field, form.active_field() == index);
        }
    }

    draw_buttons(frame, chunks[FIELD_COUNT], app);
}

/// Draw a form field with its inline error annotation, if any
fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let border_style = if field.has_error() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let mut lines: Vec<Line> = if field.is_multiline {
        field.value.lines().map(|l| Line::from(l.to_string())).collect()
    } else {
        vec![Line::from(field.value.clone())]
    };
    if lines.is_empty() {
        lines.push(Line::from(""));
    }
    if let Some(last) = lines.last_mut() {
        last.spans
            .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
    }
    if let Some(error) = &field.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

/// Draw the Cancel / Send buttons row
fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.contact_form;
    let on_buttons_row = form.is_buttons_row_active();

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(12), Constraint::Length(18)])
        .split(area);

    render_button(
        frame,
        cells[0],
        "Cancel",
        on_buttons_row && form.selected_button == 0,
        true,
    );

    // The send control is disabled and relabeled for the in-flight window
    let (label, enabled) = if form.is_busy() {
        ("Sending...", false)
    } else {
        ("Send Message", true)
    };
    render_button(
        frame,
        cells[1],
        label,
        on_buttons_row && form.selected_button == 1,
        enabled,
    );
}

/// Render a generic button with border
fn render_button(frame: &mut Frame, area: Rect, content: &str, is_selected: bool, is_enabled: bool) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
