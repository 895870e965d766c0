//! The height/weight record carried between wizard steps

use super::field::FieldName;
use serde::{Deserialize, Serialize};

/// Free-text height and weight as typed by the user.
///
/// Values are passed through unparsed; a later stage decides what to do with
/// empty or non-numeric text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormRecord {
    pub height: String,
    pub weight: String,
}

impl FormRecord {
    /// Empty record, as created on step entry
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value of a field
    pub fn get(&self, name: FieldName) -> &str {
        match name {
            FieldName::Height => &self.height,
            FieldName::Weight => &self.weight,
        }
    }

    /// Return a copy of this record with one field replaced
    #[must_use]
    pub fn with_field(&self, name: FieldName, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        match name {
            FieldName::Height => next.height = value.into(),
            FieldName::Weight => next.weight = value.into(),
        }
        next
    }

    pub fn is_empty(&self) -> bool {
        self.height.is_empty() && self.weight.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_is_empty() {
        let record = FormRecord::new();
        assert_eq!(record.height, "");
        assert_eq!(record.weight, "");
        assert!(record.is_empty());
    }

    #[test]
    fn test_with_field_leaves_original_untouched() {
        let original = FormRecord::new();
        let updated = original.with_field(FieldName::Height, "180");

        assert_eq!(original, FormRecord::new());
        assert_eq!(updated.get(FieldName::Height), "180");
        assert_eq!(updated.get(FieldName::Weight), "");
    }

    #[test]
    fn test_serializes_with_fixed_keys() {
        let record = FormRecord::new().with_field(FieldName::Weight, "75");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({ "height": "", "weight": "75" }));
    }

    #[test]
    fn test_rejects_extra_keys() {
        let json = r#"{"height": "1", "weight": "2", "age": "30"}"#;
        assert!(serde_json::from_str::<FormRecord>(json).is_err());
    }
}
