//! Wizard steps and the transition requests passed between them

use super::forms::FormRecord;
use crate::error::WizardError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Steps of the onboarding wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    #[default]
    Introduction,
    PersonalData,
    Goals,
}

impl StepId {
    /// All steps in wizard order
    pub fn all() -> &'static [StepId] {
        &[Self::Introduction, Self::PersonalData, Self::Goals]
    }

    /// Wire id used in transition requests
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Introduction => "introduction",
            Self::PersonalData => "personal_data",
            Self::Goals => "goals",
        }
    }

    /// Step number (1-indexed for display)
    pub fn number(&self) -> usize {
        match self {
            Self::Introduction => 1,
            Self::PersonalData => 2,
            Self::Goals => 3,
        }
    }

    pub fn total() -> usize {
        Self::all().len()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Introduction => "Welcome",
            Self::PersonalData => "About You",
            Self::Goals => "Goals",
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the wire id, as used by the `start_step` config key
impl FromStr for StepId {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|step| step.as_str() == s)
            .copied()
            .ok_or_else(|| WizardError::UnknownStep(s.to_string()))
    }
}

/// Data attached to a transition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavigationPayload {
    #[serde(rename = "formData")]
    pub form_data: FormRecord,
}

/// A request to move the wizard to `destination`, carrying `payload`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionRequest {
    pub destination: StepId,
    pub payload: NavigationPayload,
}

impl TransitionRequest {
    /// Build a request carrying a copy of `record`
    pub fn new(destination: StepId, record: &FormRecord) -> Self {
        Self {
            destination,
            payload: NavigationPayload {
                form_data: record.clone(),
            },
        }
    }
}

/// Receiver of transition requests. Issuing one is fire-and-forget.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn navigate(&mut self, request: TransitionRequest);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldName;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_step_ids_round_trip_through_str() {
        for step in StepId::all() {
            assert_eq!(step.as_str().parse::<StepId>(), Ok(*step));
        }
    }

    #[test]
    fn test_unknown_step() {
        assert_eq!(
            "summary".parse::<StepId>(),
            Err(WizardError::UnknownStep("summary".to_string()))
        );
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(StepId::Introduction.number(), 1);
        assert_eq!(StepId::PersonalData.number(), 2);
        assert_eq!(StepId::Goals.number(), 3);
        assert_eq!(StepId::total(), 3);
    }

    #[test]
    fn test_request_copies_record() {
        let mut record = FormRecord::new().with_field(FieldName::Height, "180");
        let request = TransitionRequest::new(StepId::Goals, &record);
        record = record.with_field(FieldName::Height, "190");

        assert_eq!(request.payload.form_data.height, "180");
        assert_eq!(record.height, "190");
    }

    #[test]
    fn test_request_wire_shape() {
        let record = FormRecord {
            height: "180".to_string(),
            weight: "75".to_string(),
        };
        let request = TransitionRequest::new(StepId::Goals, &record);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "destination": "goals",
                "payload": { "formData": { "height": "180", "weight": "75" } }
            })
        );
    }
}
