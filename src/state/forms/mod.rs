//! Form domain layer
//!
//! Field model, validity rules and the surface abstraction the submission
//! controller drives, plus the terminal screen that implements it.

mod field;
mod signup_form;
mod snapshot;
mod surface;
mod validator;

pub use field::{ErrorDisplay, Field, FieldName};
pub use signup_form::{Focus, Form, SignupScreen};
pub use snapshot::FormSnapshot;
pub use surface::FormSurface;

#[cfg(test)]
pub use field::FieldKind;
#[cfg(test)]
pub use signup_form::SUBMIT_LABEL;
#[cfg(test)]
pub use surface::MockFormSurface;
