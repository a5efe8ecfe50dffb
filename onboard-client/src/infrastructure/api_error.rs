use onboard_model::error::CreateUserErrorBody;
use thiserror::Error;

/// Errors surfaced by calls to the user directory backend.
///
/// Transport failures are flattened to strings so the error can travel inside
/// cloneable messages.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The backend answered with a structured error body.
    #[error("Request rejected with status {status}")]
    Rejected {
        status: u16,
        body: CreateUserErrorBody,
    },

    #[error("Request failed with status {status}: {text}")]
    Status { status: u16, text: String },
}

impl ApiError {
    /// The backend's structured error body, when there is one.
    pub fn error_body(&self) -> Option<&CreateUserErrorBody> {
        match self {
            Self::Rejected { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } | Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if err.is_builder() {
            Self::Client(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onboard_model::error::FieldError;
    use std::collections::HashMap;

    #[test]
    fn only_rejections_carry_a_body() {
        let body = CreateUserErrorBody {
            field_errors: HashMap::from([(
                "Username".to_string(),
                vec![FieldError {
                    status_code: "DUPLICATE_USERNAME".to_string(),
                    message: None,
                }],
            )]),
            ..Default::default()
        };
        let rejected = ApiError::Rejected { status: 400, body };
        assert_eq!(
            rejected.error_body().and_then(|b| b.username_status_code()),
            Some("DUPLICATE_USERNAME")
        );
        assert_eq!(rejected.status(), Some(400));

        let transport = ApiError::Transport("connection refused".to_string());
        assert!(transport.error_body().is_none());
        assert_eq!(transport.status(), None);
    }
}
