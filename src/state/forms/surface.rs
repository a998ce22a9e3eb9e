//! Trait abstraction for the form surface the controller reads and writes

use super::field::{FieldKind, FieldName};
use crate::state::Notification;
use uuid::Uuid;

/// Everything the submission controller needs from the rendered form.
///
/// The terminal screen implements this; tests use the generated mock.
#[cfg_attr(test, mockall::automock)]
pub trait FormSurface {
    /// Required inputs and the kind each one was declared with
    fn required_fields(&self) -> Vec<(FieldName, FieldKind)>;

    /// Current raw text of an input
    fn field_value(&self, name: FieldName) -> String;

    /// Whether the terms checkbox is ticked
    fn terms_accepted(&self) -> bool;

    /// Display an inline error and the error visual state for an input
    fn show_field_error(&mut self, name: FieldName, message: &str);

    /// Remove the inline error and the error visual state for an input
    fn clear_field_error(&mut self, name: FieldName);

    fn set_submit_enabled(&mut self, enabled: bool);

    fn submit_label(&self) -> String;

    fn set_submit_label(&mut self, label: &str);

    /// Blocking notice the user must dismiss
    fn alert(&mut self, message: &str);

    fn show_notification(&mut self, notification: &Notification);

    fn remove_notification(&mut self, id: Uuid);
}
