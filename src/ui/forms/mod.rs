//! Form rendering module
//!
//! - `field_renderer`: text input and help line helpers
//! - `personal_data_form`: the height/weight step

mod field_renderer;
mod personal_data_form;

pub use field_renderer::draw_help_text;
pub use personal_data_form::draw as draw_personal_data;
