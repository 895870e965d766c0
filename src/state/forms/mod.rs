//! Form domain layer
//!
//! The personal data step's record, its field names, and the step state that
//! edits the record and issues transitions.

mod field;
mod form_state;
mod record;

pub use field::FieldName;
pub use form_state::{Form, NavButton, PersonalDataStep};
pub use record::FormRecord;
