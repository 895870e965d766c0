//! Form field identifiers
//!
//! Inside the crate fields are always `FieldName`; `FromStr` is the check for
//! callers that hold a record key as text.

use crate::error::WizardError;
use std::fmt;
use std::str::FromStr;

/// The fixed set of fields collected by the personal data step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Height,
    Weight,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 2] = [FieldName::Height, FieldName::Weight];

    /// Key used in the serialized record
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Height => "height",
            Self::Weight => "weight",
        }
    }

    /// Human readable label for the input box
    pub fn label(&self) -> &'static str {
        match self {
            Self::Height => "Height",
            Self::Weight => "Weight",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = WizardError;

    /// Exact, case-sensitive match on the record key
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "height" => Ok(Self::Height),
            "weight" => Ok(Self::Weight),
            other => Err(WizardError::UnknownField(other.to_string())),
        }
    }
}
