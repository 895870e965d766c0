//! Application state definitions

use super::forms::PersonalDataStep;
use super::navigation::{NavigationPayload, Navigator, StepId, TransitionRequest};
use chrono::{DateTime, Utc};

/// A transition the wizard has performed
#[derive(Debug, Clone)]
pub struct TransitionEntry {
    pub from: StepId,
    pub request: TransitionRequest,
    pub at: DateTime<Utc>,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_step: StepId,
    /// Payload that arrived with the transition into the current step
    pub received_payload: Option<NavigationPayload>,
    pub history: Vec<TransitionEntry>,

    /// Mounted only while the current step is `personal_data`
    pub personal_data: Option<PersonalDataStep>,

    // UI state
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `step` has been visited before the current one
    pub fn visited(&self, step: StepId) -> bool {
        self.history.iter().any(|entry| entry.from == step)
    }
}

/// One-line summary of a transition for the status bar
fn transition_status(request: &TransitionRequest) -> String {
    let record = &request.payload.form_data;
    match request.destination {
        StepId::Introduction => "Back to introduction".to_string(),
        StepId::PersonalData => "Enter your height and weight".to_string(),
        StepId::Goals if record.is_empty() => "Continued to goals without details".to_string(),
        StepId::Goals => format!(
            "Carried height \"{}\" and weight \"{}\" to goals",
            record.height, record.weight
        ),
    }
}

impl Navigator for AppState {
    fn navigate(&mut self, request: TransitionRequest) {
        let from = self.current_step;
        let to = request.destination;
        tracing::info!(
            %from,
            %to,
            height = %request.payload.form_data.height,
            weight = %request.payload.form_data.weight,
            "wizard transition"
        );

        self.current_step = to;
        self.received_payload = Some(request.payload.clone());
        // Entering the step always starts from an empty record; the incoming
        // payload is not read back.
        self.personal_data = (to == StepId::PersonalData).then(PersonalDataStep::new);
        self.status_message = Some(transition_status(&request));
        self.history.push(TransitionEntry {
            from,
            request,
            at: Utc::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldName, FormRecord};
    use pretty_assertions::assert_eq;

    fn filled() -> FormRecord {
        FormRecord::new()
            .with_field(FieldName::Height, "180")
            .with_field(FieldName::Weight, "75")
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.current_step, StepId::Introduction);
        assert!(state.received_payload.is_none());
        assert!(state.personal_data.is_none());
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_navigate_records_transition() {
        let mut state = AppState::new();
        state.navigate(TransitionRequest::new(StepId::PersonalData, &FormRecord::new()));
        state.navigate(TransitionRequest::new(StepId::Goals, &filled()));

        assert_eq!(state.current_step, StepId::Goals);
        assert_eq!(
            state.received_payload,
            Some(NavigationPayload {
                form_data: filled()
            })
        );
        assert_eq!(state.history.len(), 2);
        assert_eq!(state.history[1].from, StepId::PersonalData);
        assert_eq!(state.history[1].request.destination, StepId::Goals);
        assert!(state.visited(StepId::Introduction));
        assert!(!state.visited(StepId::Goals));
    }

    #[test]
    fn test_entering_personal_data_mounts_fresh_step() {
        let mut state = AppState::new();
        state.navigate(TransitionRequest::new(StepId::PersonalData, &filled()));

        let step = state.personal_data.as_ref().unwrap();
        assert!(step.record().is_empty());
    }

    #[test]
    fn test_leaving_personal_data_unmounts_step() {
        let mut state = AppState::new();
        state.navigate(TransitionRequest::new(StepId::PersonalData, &FormRecord::new()));
        state.navigate(TransitionRequest::new(StepId::Introduction, &FormRecord::new()));
        assert!(state.personal_data.is_none());
    }

    #[test]
    fn test_navigate_sets_status_message() {
        let mut state = AppState::new();
        assert!(state.status_message.is_none());

        state.navigate(TransitionRequest::new(StepId::PersonalData, &FormRecord::new()));
        assert_eq!(
            state.status_message.as_deref(),
            Some("Enter your height and weight")
        );

        state.navigate(TransitionRequest::new(StepId::Goals, &filled()));
        assert_eq!(
            state.status_message.as_deref(),
            Some("Carried height \"180\" and weight \"75\" to goals")
        );

        state.navigate(TransitionRequest::new(StepId::Introduction, &FormRecord::new()));
        assert_eq!(state.status_message.as_deref(), Some("Back to introduction"));
    }

    #[test]
    fn test_status_for_empty_goals_transition() {
        let mut state = AppState::new();
        state.navigate(TransitionRequest::new(StepId::Goals, &FormRecord::new()));
        assert_eq!(
            state.status_message.as_deref(),
            Some("Continued to goals without details")
        );
    }
}
