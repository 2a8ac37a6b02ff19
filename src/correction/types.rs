//! Wire types of the correction exchange.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/correct`.
#[derive(Debug, Serialize)]
pub struct CorrectionRequest<'a> {
    pub code: &'a str,
}

/// Language the backend detected in the submitted code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Display name, e.g. "Python".
    pub name: String,
    /// File extension without the dot, e.g. "py".
    pub ext: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionResponse {
    pub corrected_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

/// Result of a user-triggered submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; nothing was sent.
    Skipped,
    /// Another submission was in flight; nothing was sent.
    Busy,
    Corrected {
        response: CorrectionResponse,
        latency: Duration,
    },
    /// The error message rendered into the output pane.
    Failed { message: String },
}

impl SubmitOutcome {
    pub fn corrected_code(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Corrected { response, .. } => Some(&response.corrected_code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(CorrectionRequest { code: "x=1" }).unwrap();
        assert_eq!(body, serde_json::json!({ "code": "x=1" }));
    }

    #[test]
    fn test_language_is_optional() {
        let plain: CorrectionResponse =
            serde_json::from_str(r#"{"corrected_code": "x = 1"}"#).unwrap();
        assert_eq!(plain.language, None);

        let tagged: CorrectionResponse = serde_json::from_str(
            r#"{"corrected_code": "x = 1", "language": {"name": "Python", "ext": "py"}}"#,
        )
        .unwrap();
        assert_eq!(tagged.language.unwrap().ext, "py");
    }
}
