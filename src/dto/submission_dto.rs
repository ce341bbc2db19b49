use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The single response shape of all three submission workflows. Validation
/// failures travel inside this payload (HTTP 200, `success: false`), never as
/// transport errors, so any UI can render the outcome without exception handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub message: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_to_next_step: Option<bool>,
}

impl SubmissionResult {
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
            field_errors: None,
            redirect_target: None,
            skip_to_next_step: None,
        }
    }

    pub fn redirect(message: impl Into<String>, target: String) -> Self {
        Self {
            redirect_target: Some(target),
            ..Self::accepted(message)
        }
    }

    pub fn skip(message: impl Into<String>) -> Self {
        Self {
            skip_to_next_step: Some(true),
            ..Self::accepted(message)
        }
    }

    pub fn rejected(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            message: message.into(),
            success: false,
            field_errors: Some(field_errors),
            redirect_target: None,
            skip_to_next_step: None,
        }
    }
}

/// Shared vocabulary for the "Sí"/"No" radio fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    #[serde(rename = "Sí")]
    Yes,
    #[serde(rename = "No")]
    No,
}

impl YesNo {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "Sí" => Some(Self::Yes),
            "No" => Some(Self::No),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "Sí",
            Self::No => "No",
        }
    }
}

impl std::fmt::Display for YesNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
