//! Failure reporter.
//!
//! Converts a responder's discriminated result into the single
//! response every request gets. The remote verifier only ever sees a
//! body and a content type; a failure is a readable message, never a
//! dropped connection or a stack trace.

use log::error;

use crate::error::FixtureError;
use crate::responder::ResponsePayload;

/// Whether the verification action produced its fact or a diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// The one response a fixture invocation yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResponse {
    pub body: Vec<u8>,
    pub content_type: &'static str,
    pub outcome: Outcome,
}

impl VerificationResponse {
    pub fn is_failure(&self) -> bool {
        self.outcome == Outcome::Failure
    }
}

/// Finalize a responder result into the outward response.
pub fn finalize(result: Result<ResponsePayload, FixtureError>) -> VerificationResponse {
    match result {
        Ok(payload) => VerificationResponse {
            body: payload.body,
            content_type: payload.content_type,
            outcome: Outcome::Success,
        },
        Err(err) => {
            error!("fixture verification failed: {}", err);
            VerificationResponse {
                body: err.to_string().into_bytes(),
                content_type: "text/plain",
                outcome: Outcome::Failure,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_keeps_body_and_content_type() {
        let response = finalize(Ok(ResponsePayload {
            body: b"sum: 3".to_vec(),
            content_type: "text/plain",
        }));
        assert_eq!(response.outcome, Outcome::Success);
        assert_eq!(response.body, b"sum: 3");
        assert_eq!(response.content_type, "text/plain");
        assert!(!response.is_failure());
    }

    #[test]
    fn failure_becomes_readable_text() {
        let response = finalize(Err(FixtureError::MissingAsset {
            path: "assets/image.png".to_string(),
        }));
        assert_eq!(response.outcome, Outcome::Failure);
        assert_eq!(response.content_type, "text/plain");
        let body = String::from_utf8(response.body).expect("UTF-8 failure body");
        assert_eq!(body, "asset not found: assets/image.png");
    }
}
