//! Introduction step rendering

use super::forms::draw_help_text;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the welcome screen
pub fn draw(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Welcome ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .margin(1)
        .split(inner);

    let text = vec![
        Line::from(Span::styled(
            "Let's set up your training profile",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "A few quick questions about you and what you want to achieve.",
            Style::default().fg(Color::Gray),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, chunks[0]);

    draw_help_text(frame, chunks[1], &[("Enter", "start"), ("q", "quit")]);
}
