//! Signup screen state: the terminal implementation of the form surface

use super::field::{FieldKind, FieldName};
use super::surface::FormSurface;
use crate::state::{Notification, NotificationKind};
use chrono::{DateTime, Local, Utc};
use uuid::Uuid;

/// Label shown on the submit button while idle
pub const SUBMIT_LABEL: &str = "Create account";

/// Trait for common focus navigation
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Element of the signup screen that can hold focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input(FieldName),
    Terms,
    Submit,
}

/// A text input as displayed on screen
#[derive(Debug, Clone)]
pub struct TextInput {
    pub name: FieldName,
    pub kind: FieldKind,
    pub value: String,
    /// Inline error, shown with a red border
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SubmitButton {
    pub label: String,
    pub enabled: bool,
}

/// Toast as displayed on screen
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    /// Message prefixed with the local time it was raised
    pub fn label(&self) -> String {
        format!(
            "{} {}",
            self.created_at.with_timezone(&Local).format("%H:%M:%S"),
            self.message
        )
    }
}

#[derive(Debug, Clone)]
pub struct SignupScreen {
    pub inputs: Vec<TextInput>,
    pub terms_accepted: bool,
    pub submit: SubmitButton,
    /// Blocking notice; input is ignored until dismissed
    pub alert: Option<String>,
    pub toasts: Vec<Toast>,
    pub active_field_index: usize,
    pub password_visible: bool,
}

impl Default for SignupScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupScreen {
    pub fn new() -> Self {
        Self {
            inputs: FieldName::ALL
                .iter()
                .map(|&name| TextInput {
                    name,
                    kind: name.declared_kind(),
                    value: String::new(),
                    error: None,
                })
                .collect(),
            terms_accepted: false,
            submit: SubmitButton {
                label: SUBMIT_LABEL.to_string(),
                enabled: true,
            },
            alert: None,
            toasts: Vec::new(),
            active_field_index: 0,
            password_visible: false,
        }
    }

    pub fn focus(&self) -> Focus {
        let inputs = self.inputs.len();
        match self.active_field_index {
            i if i < inputs => Focus::Input(self.inputs[i].name),
            i if i == inputs => Focus::Terms,
            _ => Focus::Submit,
        }
    }

    /// Input that currently has focus, if any
    pub fn focused_input(&self) -> Option<FieldName> {
        match self.focus() {
            Focus::Input(name) => Some(name),
            _ => None,
        }
    }

    pub fn input(&self, name: FieldName) -> Option<&TextInput> {
        self.inputs.iter().find(|i| i.name == name)
    }

    fn input_mut(&mut self, name: FieldName) -> Option<&mut TextInput> {
        self.inputs.iter_mut().find(|i| i.name == name)
    }

    /// Type a character into the focused input.
    /// Returns the input whose value changed.
    pub fn input_char(&mut self, c: char) -> Option<FieldName> {
        let name = self.focused_input()?;
        self.input_mut(name)?.value.push(c);
        Some(name)
    }

    /// Delete the last character of the focused input.
    /// Returns the input whose value changed.
    pub fn backspace(&mut self) -> Option<FieldName> {
        let name = self.focused_input()?;
        let input = self.input_mut(name)?;
        input.value.pop()?;
        Some(name)
    }

    #[allow(dead_code)]
    pub fn set_value(&mut self, name: FieldName, value: &str) {
        if let Some(input) = self.input_mut(name) {
            input.value = value.to_string();
        }
    }

    pub fn toggle_terms(&mut self) {
        self.terms_accepted = !self.terms_accepted;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Text to render for an input, masking the password unless revealed
    pub fn display_value(&self, input: &TextInput) -> String {
        if input.kind == FieldKind::Password && !self.password_visible {
            "•".repeat(input.value.chars().count())
        } else {
            input.value.clone()
        }
    }
}

impl Form for SignupScreen {
    fn field_count(&self) -> usize {
        self.inputs.len() + 2 // inputs, terms, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
}

impl FormSurface for SignupScreen {
    fn required_fields(&self) -> Vec<(FieldName, FieldKind)> {
        self.inputs.iter().map(|i| (i.name, i.kind)).collect()
    }

    fn field_value(&self, name: FieldName) -> String {
        self.input(name).map(|i| i.value.clone()).unwrap_or_default()
    }

    fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    fn show_field_error(&mut self, name: FieldName, message: &str) {
        if let Some(input) = self.input_mut(name) {
            input.error = Some(message.to_string());
        }
    }

    fn clear_field_error(&mut self, name: FieldName) {
        if let Some(input) = self.input_mut(name) {
            input.error = None;
        }
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit.enabled = enabled;
    }

    fn submit_label(&self) -> String {
        self.submit.label.clone()
    }

    fn set_submit_label(&mut self, label: &str) {
        self.submit.label = label.to_string();
    }

    fn alert(&mut self, message: &str) {
        self.alert = Some(message.to_string());
    }

    fn show_notification(&mut self, notification: &Notification) {
        self.toasts.push(Toast {
            id: notification.id,
            kind: notification.kind,
            message: notification.message.clone(),
            created_at: notification.created_at,
        });
    }

    fn remove_notification(&mut self, id: Uuid) {
        self.toasts.retain(|t| t.id != id);
    }
}
