//! Goals step rendering

use super::forms::draw_help_text;
use crate::app::App;
use crate::state::FieldName;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the goals screen with the data carried from the previous step
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Your goals ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .margin(1)
        .split(inner);

    let mut lines = vec![
        Line::from(Span::styled(
            "Here's what you told us so far:",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];

    if let Some(payload) = &app.state.received_payload {
        if payload.form_data.is_empty() {
            lines.push(Line::from(Span::styled(
                "Nothing entered yet. Press Esc to fill in your details.",
                Style::default().fg(Color::Yellow),
            )));
        }
        for name in FieldName::ALL {
            let unit = match name {
                FieldName::Height => app.config.height_unit(),
                FieldName::Weight => app.config.weight_unit(),
            };
            let value = payload.form_data.get(name);
            let value_span = if value.is_empty() {
                Span::styled("(empty)", Style::default().fg(Color::DarkGray))
            } else {
                Span::styled(format!("{value} {unit}"), Style::default().fg(Color::White))
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<8}", name.label()),
                    Style::default().fg(Color::Cyan),
                ),
                value_span,
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines), chunks[0]);

    draw_help_text(frame, chunks[1], &[("Enter", "finish"), ("Esc", "back")]);
}
