//! Form domain layer
//!
//! Type-safe field values and the contact form they make up.

mod field;
mod form_state;

pub use field::{ContactField, FormField};
pub use form_state::ContactForm;
