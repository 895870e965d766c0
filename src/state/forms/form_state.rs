//! Personal data step: owns the form record and issues transitions

use super::field::FieldName;
use super::record::FormRecord;
use crate::state::navigation::{Navigator, StepId, TransitionRequest};

/// Trait for common form focus handling
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Navigation buttons shown under the inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavButton {
    Back,
    #[default]
    Next,
}

impl NavButton {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Back => Self::Next,
            Self::Next => Self::Back,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Back => "Back",
            Self::Next => "Next",
        }
    }
}

/// Index of the buttons row in the focus ring
const BUTTONS_ROW: usize = FieldName::ALL.len();

/// State of the personal data step while it is mounted
#[derive(Debug, Clone, Default)]
pub struct PersonalDataStep {
    record: FormRecord,
    /// 0 = height, 1 = weight, 2 = buttons row
    pub active_field_index: usize,
    /// Which button is selected when the buttons row is active
    pub selected_button: NavButton,
}

impl PersonalDataStep {
    /// Fresh step with an empty record
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    /// Replace one field and return the updated record
    pub fn set_field(&mut self, name: FieldName, value: impl Into<String>) -> &FormRecord {
        self.record = self.record.with_field(name, value);
        tracing::debug!(field = %name, value = self.record.get(name), "field updated");
        &self.record
    }

    /// Move forward to the goals step, carrying the current record
    pub fn go_next<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        navigator.navigate(TransitionRequest::new(StepId::Goals, &self.record));
    }

    /// Move back to the introduction step, carrying the current record
    pub fn go_back<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        navigator.navigate(TransitionRequest::new(StepId::Introduction, &self.record));
    }

    /// Trigger whichever button is selected on the buttons row
    pub fn activate_selected_button<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        match self.selected_button {
            NavButton::Back => self.go_back(navigator),
            NavButton::Next => self.go_next(navigator),
        }
    }

    /// The text field that currently has focus, if any
    pub fn active_input(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    pub fn toggle_button(&mut self) {
        self.selected_button = self.selected_button.toggle();
    }

    /// Append a character to the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(name) = self.active_input() {
            let mut value = self.record.get(name).to_string();
            value.push(c);
            self.set_field(name, value);
        }
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(name) = self.active_input() {
            let mut value = self.record.get(name).to_string();
            if value.pop().is_some() {
                self.set_field(name, value);
            }
        }
    }

    /// Clear the focused field
    pub fn clear_active(&mut self) {
        if let Some(name) = self.active_input() {
            self.set_field(name, "");
        }
    }
}

impl Form for PersonalDataStep {
    fn field_count(&self) -> usize {
        BUTTONS_ROW + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(BUTTONS_ROW);
    }
}
