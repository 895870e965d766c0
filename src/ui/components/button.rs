//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a navigation button with border.
/// `accent` colours the label and border once the button is selected.
pub fn render_nav_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_selected: bool,
    is_focused: bool,
    accent: Color,
) {
    let active = is_selected && is_focused;
    let border_style = if active {
        Style::default().fg(accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if active {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else if is_selected {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = if active {
        format!("> {label} <")
    } else {
        format!("  {label}  ")
    };

    let paragraph = Paragraph::new(content)
        .style(text_style)
        .alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
