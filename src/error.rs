//! Domain errors raised when wizard identifiers arrive as strings

use thiserror::Error;

/// Errors from parsing field names and step ids at the string boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("unknown form field `{0}` (expected `height` or `weight`)")]
    UnknownField(String),

    #[error("unknown wizard step `{0}`")]
    UnknownStep(String),
}
