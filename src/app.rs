//! Application state and key handling

use crate::config::WizardConfig;
use crate::platform::SHORTCUT_MODIFIER;
use crate::state::{AppState, Form, FormRecord, Navigator, StepId, TransitionRequest};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current wizard state
    pub state: AppState,
    /// Loaded user configuration
    pub config: WizardConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance starting at the introduction step
    pub fn new(config: WizardConfig) -> Self {
        Self {
            state: AppState::new(),
            config,
            quit: false,
        }
    }

    /// Open the wizard at `step` instead of the introduction
    pub fn start_at(&mut self, step: StepId) {
        if step != self.state.current_step {
            self.state.navigate(TransitionRequest::new(step, &FormRecord::new()));
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        match self.state.current_step {
            StepId::Introduction => self.handle_introduction_key(key),
            StepId::PersonalData => self.handle_personal_data_key(key),
            StepId::Goals => self.handle_goals_key(key),
        }
    }

    fn handle_introduction_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('n') => {
                self.state
                    .navigate(TransitionRequest::new(StepId::PersonalData, &FormRecord::new()));
            }
            KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn handle_personal_data_key(&mut self, key: KeyEvent) {
        // The step is unmounted by the transition it issues, so take it out of
        // the state before handing the state over as navigator.
        let Some(mut step) = self.state.personal_data.take() else {
            return;
        };

        let shortcut = key.modifiers.contains(SHORTCUT_MODIFIER);
        match key.code {
            KeyCode::Char('n') if shortcut => {
                step.go_next(&mut self.state);
                return;
            }
            KeyCode::Char('u') if shortcut => step.clear_active(),
            KeyCode::Esc => {
                step.go_back(&mut self.state);
                return;
            }
            KeyCode::Enter if step.is_buttons_row_active() => {
                step.activate_selected_button(&mut self.state);
                return;
            }
            KeyCode::Enter | KeyCode::Tab | KeyCode::Down => step.next_field(),
            KeyCode::BackTab | KeyCode::Up => step.prev_field(),
            KeyCode::Left | KeyCode::Right if step.is_buttons_row_active() => step.toggle_button(),
            KeyCode::Backspace => step.backspace(),
            KeyCode::Char(c) if !shortcut => step.input_char(c),
            _ => {}
        }

        self.state.personal_data = Some(step);
    }

    fn handle_goals_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') => {
                let form_data = self
                    .state
                    .received_payload
                    .as_ref()
                    .map(|payload| payload.form_data.clone())
                    .unwrap_or_default();
                self.state
                    .navigate(TransitionRequest::new(StepId::PersonalData, &form_data));
            }
            KeyCode::Enter | KeyCode::Char('q') => self.finish(),
            _ => {}
        }
    }

    /// Complete the wizard from the final step
    fn finish(&mut self) {
        let started = self.state.history.first().map(|entry| entry.at);
        if let Some(payload) = &self.state.received_payload {
            tracing::info!(
                height = %payload.form_data.height,
                weight = %payload.form_data.weight,
                transitions = self.state.history.len(),
                started = ?started,
                "onboarding finished"
            );
        }
        self.quit = true;
    }
}
