//! Pure validity predicates for required form fields

use super::field::FieldKind;
use regex::Regex;
use std::sync::LazyLock;

/// Minimal `local@domain.tld` shape with no whitespace.
/// Compiled once at first use.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Minimum password length, counted in characters after trimming.
///
/// A character is a Unicode scalar value, not a UTF-16 code unit as in a
/// browser's `String.length`: an emoji outside the Basic Multilingual Plane
/// counts once here but twice in JavaScript, so four of them are too short.
pub const MIN_PASSWORD_LEN: usize = 8;

pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PASSWORD_MESSAGE: &str = "Password must be at least 8 characters long";
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Result of validating one field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub is_valid: bool,
    /// Message to display when invalid
    pub message: &'static str,
}

/// Validate a raw field value according to its kind.
///
/// The value is trimmed before any rule is applied. The returned message is
/// the failure message for the kind and is meaningful only when
/// `is_valid` is false.
pub fn validate(kind: FieldKind, raw_value: &str) -> Verdict {
    let value = raw_value.trim();
    match kind {
        FieldKind::Email => Verdict {
            is_valid: EMAIL_REGEX.is_match(value),
            message: EMAIL_MESSAGE,
        },
        FieldKind::Password => Verdict {
            is_valid: value.chars().count() >= MIN_PASSWORD_LEN,
            message: PASSWORD_MESSAGE,
        },
        FieldKind::GenericRequired => Verdict {
            is_valid: !value.is_empty(),
            message: REQUIRED_MESSAGE,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod email {
        use super::*;

        #[test]
        fn test_accepts_minimal_address() {
            assert!(validate(FieldKind::Email, "jane@example.com").is_valid);
            assert!(validate(FieldKind::Email, "a@b.c").is_valid);
        }

        #[test]
        fn test_trims_surrounding_whitespace() {
            assert!(validate(FieldKind::Email, "  jane@example.com \t").is_valid);
        }

        #[test]
        fn test_rejects_inner_whitespace() {
            assert!(!validate(FieldKind::Email, "jane doe@example.com").is_valid);
            assert!(!validate(FieldKind::Email, "jane@exa mple.com").is_valid);
            assert!(!validate(FieldKind::Email, "jane@example.c om").is_valid);
        }

        #[test]
        fn test_rejects_missing_at_or_dot() {
            for value in ["", "jane", "jane.example.com", "jane@example", "@example.com"] {
                let verdict = validate(FieldKind::Email, value);
                assert!(!verdict.is_valid, "{value:?} should be invalid");
            }
        }

        #[test]
        fn test_rejects_dot_only_before_at() {
            assert!(!validate(FieldKind::Email, "jane.doe@example").is_valid);
        }

        #[test]
        fn test_rejects_second_at() {
            assert!(!validate(FieldKind::Email, "jane@doe@example.com").is_valid);
        }

        #[test]
        fn test_message() {
            let verdict = validate(FieldKind::Email, "nope");
            assert_eq!(verdict.message, "Please enter a valid email address");
        }
    }

    mod password {
        use super::*;

        #[test]
        fn test_length_boundary() {
            assert!(!validate(FieldKind::Password, "abcdefg").is_valid);
            assert!(validate(FieldKind::Password, "abcdefgh").is_valid);
        }

        #[test]
        fn test_padding_does_not_count() {
            assert!(!validate(FieldKind::Password, "   abcdefg   ").is_valid);
        }

        #[test]
        fn test_counts_characters_not_bytes() {
            assert!(!validate(FieldKind::Password, "ééééééé").is_valid);
            assert!(validate(FieldKind::Password, "éééééééé").is_valid);
        }

        #[test]
        fn test_counts_scalar_values_not_utf16_units() {
            let four = "😀😀😀😀";
            assert_eq!(four.encode_utf16().count(), 8);
            assert!(!validate(FieldKind::Password, four).is_valid);
            assert!(validate(FieldKind::Password, &four.repeat(2)).is_valid);
        }

        #[test]
        fn test_message() {
            let verdict = validate(FieldKind::Password, "short");
            assert_eq!(verdict.message, "Password must be at least 8 characters long");
        }
    }

    mod generic_required {
        use super::*;

        #[test]
        fn test_blank_is_invalid() {
            assert!(!validate(FieldKind::GenericRequired, "").is_valid);
            assert!(!validate(FieldKind::GenericRequired, "  ").is_valid);
        }

        #[test]
        fn test_any_text_is_valid() {
            assert!(validate(FieldKind::GenericRequired, "Jane").is_valid);
            assert!(validate(FieldKind::GenericRequired, " J ").is_valid);
        }

        #[test]
        fn test_message() {
            let verdict = validate(FieldKind::GenericRequired, "");
            assert_eq!(verdict.message, "This field is required");
        }
    }

    #[test]
    fn test_same_input_same_verdict() {
        let first = validate(FieldKind::Email, "jane@example.com");
        let second = validate(FieldKind::Email, "jane@example.com");
        assert_eq!(first, second);
    }
}
