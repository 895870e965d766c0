//! Personal data form rendering

use super::field_renderer::{draw_field, draw_help_text};
use crate::app::App;
use crate::platform::{CLEAR_SHORTCUT, NEXT_SHORTCUT};
use crate::state::{FieldName, NavButton, PersonalDataStep};
use crate::ui::components::{render_nav_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the height/weight form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(step) = app.state.personal_data.as_ref() else {
        return;
    };

    let block = Block::default()
        .title(" Tell us about yourself ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Intro text
            Constraint::Length(3),             // Height
            Constraint::Length(3),             // Weight
            Constraint::Length(1),             // Spacer
            Constraint::Length(BUTTON_HEIGHT), // Back / Next
            Constraint::Min(0),                // Remaining space
            Constraint::Length(1),             // Help text
        ])
        .margin(1)
        .split(inner);

    let intro = Paragraph::new(Line::from(Span::styled(
        "We use your height and weight to tailor your plan.",
        Style::default().fg(Color::Gray),
    )));
    frame.render_widget(intro, chunks[0]);

    for (idx, name) in FieldName::ALL.into_iter().enumerate() {
        let unit = match name {
            FieldName::Height => app.config.height_unit(),
            FieldName::Weight => app.config.weight_unit(),
        };
        draw_field(
            frame,
            chunks[idx + 1],
            name,
            step.record().get(name),
            unit,
            step.active_input() == Some(name),
        );
    }

    draw_buttons(frame, chunks[4], step);

    draw_help_text(
        frame,
        chunks[6],
        &[
            ("Tab", "next field"),
            (CLEAR_SHORTCUT, "clear"),
            (NEXT_SHORTCUT, "next"),
            ("Esc", "back"),
        ],
    );
}

fn draw_buttons(frame: &mut Frame, area: Rect, step: &PersonalDataStep) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Length(2),
            Constraint::Length(14),
            Constraint::Min(0),
        ])
        .split(area);

    let focused = step.is_buttons_row_active();
    render_nav_button(
        frame,
        columns[0],
        NavButton::Back.label(),
        step.selected_button == NavButton::Back,
        focused,
        Color::Gray,
    );
    render_nav_button(
        frame,
        columns[2],
        NavButton::Next.label(),
        step.selected_button == NavButton::Next,
        focused,
        Color::Green,
    );
}
