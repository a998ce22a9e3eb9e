//! Immutable form data handed to the submission transport

use serde::Serialize;
use std::fmt;

/// Values of the signup form at submit-intent time
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "terms")]
    pub terms_accepted: bool,
}

impl FormSnapshot {
    /// JSON for logs, with the password blanked out
    pub fn redacted_json(&self) -> String {
        let redacted = Self {
            password: "********".to_string(),
            ..self.clone()
        };
        serde_json::to_string(&redacted).unwrap_or_default()
    }
}

impl fmt::Debug for FormSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormSnapshot")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"********")
            .field("terms_accepted", &self.terms_accepted)
            .finish()
    }
}
