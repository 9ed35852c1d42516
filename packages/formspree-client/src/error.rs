//! Error types for the Formspree client.

use thiserror::Error;

use crate::types::ErrorBody;

/// Result type for Formspree client operations.
pub type Result<T> = std::result::Result<T, FormspreeError>;

/// Formspree client errors.
#[derive(Debug, Error)]
pub enum FormspreeError {
    /// Configuration error (missing or malformed form id)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection refused, DNS failure, no response)
    #[error("Network error: {0}")]
    Network(String),

    /// Payload could not be encoded as JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend answered with a non-2xx status
    #[error("Submission rejected with status {status}")]
    Rejected {
        status: u16,
        /// Canonical reason phrase for `status`, if it has one
        reason: Option<String>,
        /// Response body, when it parsed as JSON
        body: Option<serde_json::Value>,
    },
}

impl FormspreeError {
    /// Best available diagnostic for a failure.
    ///
    /// For rejections this is the JSON body when one was returned, falling
    /// back to the reason phrase of the status code.
    pub fn details(&self) -> String {
        match self {
            FormspreeError::Rejected { status, reason, body } => match (body, reason) {
                (Some(body), _) => body.to_string(),
                (None, Some(reason)) => reason.clone(),
                (None, None) => status.to_string(),
            },
            other => other.to_string(),
        }
    }

    /// Typed view of the rejection body, if it has the backend's error shape.
    pub fn error_body(&self) -> Option<ErrorBody> {
        match self {
            FormspreeError::Rejected { body: Some(body), .. } => {
                serde_json::from_value(body.clone()).ok()
            }
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, FormspreeError::Network(_))
    }
}

impl From<reqwest::Error> for FormspreeError {
    fn from(err: reqwest::Error) -> Self {
        FormspreeError::Network(err.to_string())
    }
}
