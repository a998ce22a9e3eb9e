//! Reasons a submit-intent does not start a submission

use crate::state::FieldName;
use thiserror::Error;

/// A submit-intent that was turned away before reaching the transport.
///
/// All variants leave the controller Idle and can be retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    /// Per-field errors are already displayed inline
    #[error("{} required field(s) are invalid", .0.len())]
    FieldsInvalid(Vec<FieldName>),

    #[error("Please agree to the Terms & Conditions")]
    ConsentMissing,

    /// The submit control is disabled until the current attempt settles
    #[error("A submission is already in flight")]
    InFlight,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SubmitRejected::FieldsInvalid(vec![FieldName::Email, FieldName::Password]).to_string(),
            "2 required field(s) are invalid"
        );
        assert_eq!(
            SubmitRejected::ConsentMissing.to_string(),
            "Please agree to the Terms & Conditions"
        );
        assert_eq!(
            SubmitRejected::InFlight.to_string(),
            "A submission is already in flight"
        );
    }
}
