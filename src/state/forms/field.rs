//! Form field value objects

use super::validator::{validate, Verdict};

/// Logical name of a required signup input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Password,
}

impl FieldName {
    /// All required inputs, in display order
    pub const ALL: [FieldName; 4] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Password,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }

    /// Kind the input is declared with on the signup screen
    pub fn declared_kind(&self) -> FieldKind {
        match self {
            Self::Email => FieldKind::Email,
            Self::Password => FieldKind::Password,
            Self::FirstName | Self::LastName => FieldKind::GenericRequired,
        }
    }
}

/// Validation rule set for a field, decided once when the form is scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Password,
    GenericRequired,
}

/// A required field tracked by the submission controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: FieldName,
    pub kind: FieldKind,
    pub value: String,
    /// Verdict for the current value
    pub is_valid: bool,
    /// Message currently displayed on the surface, if any
    pub error_message: Option<String>,
}

/// What the surface must do after a field event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorDisplay {
    /// Leave the displayed state alone
    Unchanged,
    Show(String),
    Clear,
}

impl Field {
    /// Create a field with no error displayed
    pub fn new(name: FieldName, kind: FieldKind, value: String) -> Self {
        let Verdict { is_valid, .. } = validate(kind, &value);
        Self {
            name,
            kind,
            value,
            is_valid,
            error_message: None,
        }
    }

    /// Value changed: recompute the verdict silently and drop any stale error
    pub fn on_input(&mut self, value: String) -> ErrorDisplay {
        self.is_valid = validate(self.kind, &value).is_valid;
        self.value = value;
        if self.error_message.take().is_some() {
            ErrorDisplay::Clear
        } else {
            ErrorDisplay::Unchanged
        }
    }

    /// Full validation, as on blur or submit-intent
    pub fn revalidate(&mut self, value: String) -> ErrorDisplay {
        let verdict = validate(self.kind, &value);
        self.value = value;
        self.is_valid = verdict.is_valid;

        if verdict.is_valid {
            if self.error_message.take().is_some() {
                ErrorDisplay::Clear
            } else {
                ErrorDisplay::Unchanged
            }
        } else if self.error_message.as_deref() == Some(verdict.message) {
            ErrorDisplay::Unchanged
        } else {
            self.error_message = Some(verdict.message.to_string());
            ErrorDisplay::Show(verdict.message.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::validator::{PASSWORD_MESSAGE, REQUIRED_MESSAGE};

    #[test]
    fn test_declared_kinds() {
        assert_eq!(FieldName::Email.declared_kind(), FieldKind::Email);
        assert_eq!(FieldName::Password.declared_kind(), FieldKind::Password);
        assert_eq!(FieldName::FirstName.declared_kind(), FieldKind::GenericRequired);
        assert_eq!(FieldName::LastName.declared_kind(), FieldKind::GenericRequired);
    }

    #[test]
    fn test_new_field_has_no_error_displayed() {
        let field = Field::new(FieldName::FirstName, FieldKind::GenericRequired, String::new());
        assert!(!field.is_valid);
        assert!(field.error_message.is_none());
    }

    #[test]
    fn test_revalidate_shows_error() {
        let mut field = Field::new(FieldName::Password, FieldKind::Password, String::new());
        let display = field.revalidate("short".to_string());
        assert_eq!(display, ErrorDisplay::Show(PASSWORD_MESSAGE.to_string()));
        assert!(!field.is_valid);
        assert_eq!(field.error_message.as_deref(), Some(PASSWORD_MESSAGE));
    }

    #[test]
    fn test_input_clears_stale_error_optimistically() {
        let mut field = Field::new(FieldName::Password, FieldKind::Password, String::new());
        field.revalidate("short".to_string());

        // Still too short, but the stale message goes away until the next blur
        let display = field.on_input("short1".to_string());
        assert_eq!(display, ErrorDisplay::Clear);
        assert!(field.error_message.is_none());
        assert!(!field.is_valid);
    }

    #[test]
    fn test_input_without_error_is_unchanged() {
        let mut field = Field::new(FieldName::LastName, FieldKind::GenericRequired, String::new());
        assert_eq!(field.on_input("D".to_string()), ErrorDisplay::Unchanged);
        assert!(field.is_valid);
    }

    #[test]
    fn test_revalidate_valid_twice_does_not_toggle() {
        let mut field = Field::new(FieldName::FirstName, FieldKind::GenericRequired, String::new());
        assert_eq!(field.revalidate("Jane".to_string()), ErrorDisplay::Unchanged);
        assert_eq!(field.revalidate("Jane".to_string()), ErrorDisplay::Unchanged);
        assert!(field.is_valid);
        assert!(field.error_message.is_none());
    }

    #[test]
    fn test_revalidate_invalid_twice_shows_once() {
        let mut field = Field::new(FieldName::FirstName, FieldKind::GenericRequired, String::new());
        assert_eq!(
            field.revalidate("  ".to_string()),
            ErrorDisplay::Show(REQUIRED_MESSAGE.to_string())
        );
        assert_eq!(field.revalidate("  ".to_string()), ErrorDisplay::Unchanged);
    }

    #[test]
    fn test_revalidate_fix_clears_error() {
        let mut field = Field::new(FieldName::FirstName, FieldKind::GenericRequired, String::new());
        field.revalidate(String::new());
        assert_eq!(field.revalidate("Jane".to_string()), ErrorDisplay::Clear);
        assert!(field.is_valid);
    }
}
