//! UI module for rendering the TUI

mod components;
mod forms;
mod goals;
mod introduction;
mod layout;

use crate::app::App;
use crate::state::StepId;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match app.state.current_step {
        StepId::Introduction => introduction::draw(frame, main_area),
        StepId::PersonalData => forms::draw_personal_data(frame, main_area, app),
        StepId::Goals => goals::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WizardConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_introduction_screen() {
        let app = App::new(WizardConfig::default());
        let screen = render(&app);
        assert!(screen.contains("Step 1 of 3"));
        assert!(screen.contains("Let's set up your training profile"));
        assert!(screen.contains("Enter start"));
        assert!(screen.contains("Ctrl+C quit"));
    }

    #[test]
    fn test_personal_data_screen_shows_inputs_and_buttons() {
        let mut app = App::new(WizardConfig::default());
        press(&mut app, KeyCode::Enter);
        for c in "180".chars() {
            press(&mut app, KeyCode::Char(c));
        }

        let screen = render(&app);
        assert!(screen.contains("Step 2 of 3"));
        assert!(screen.contains("Height (cm)"));
        assert!(screen.contains("Weight (kg)"));
        assert!(screen.contains("180▌"));
        assert!(screen.contains("(empty)"));
        assert!(screen.contains("Back"));
        assert!(screen.contains("Next"));
    }

    #[test]
    fn test_personal_data_screen_uses_configured_units() {
        let config = WizardConfig {
            height_unit: Some("in".to_string()),
            weight_unit: Some("lb".to_string()),
            ..Default::default()
        };
        let mut app = App::new(config);
        press(&mut app, KeyCode::Enter);

        let screen = render(&app);
        assert!(screen.contains("Height (in)"));
        assert!(screen.contains("Weight (lb)"));
    }

    #[test]
    fn test_goals_screen_shows_carried_record() {
        let mut app = App::new(WizardConfig::default());
        press(&mut app, KeyCode::Enter);
        for c in "180".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));

        let screen = render(&app);
        assert!(screen.contains("Step 3 of 3"));
        assert!(screen.contains("Carried height \"180\" and weight \"\" to goals"));
        assert!(screen.contains("180 cm"));
        assert!(screen.contains("(empty)"));
    }
}
