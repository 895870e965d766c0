//! Layout components (step header, status bar)

use crate::app::App;
use crate::state::StepId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header height in rows
const HEADER_HEIGHT: u16 = 3;

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Step indicator
            Constraint::Min(0),                // Content
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the step indicator: "1 Welcome > 2 About You > 3 Goals"
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.state.current_step;
    let mut spans = Vec::new();

    for (idx, step) in StepId::all().iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" > ", Style::default().fg(Color::DarkGray)));
        }
        let style = if *step == current {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if app.state.visited(*step) {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(
            format!("{} {}", step.number(), step.title()),
            style,
        ));
    }

    let title = format!(" Step {} of {} ", current.number(), StepId::total());
    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = app
        .state
        .status_message
        .clone()
        .unwrap_or_else(|| "Ctrl+C quit".to_string());
    let status = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(status, area);
}
