use onboard_model::options::{ProfileRecord, RoleRecord};

use crate::infrastructure::api_error::ApiError;

#[derive(Clone, Debug)]
pub enum Message {
    // Option lists
    Initialize,
    ProfileOptionsLoaded(Result<Vec<ProfileRecord>, ApiError>),
    RoleOptionsLoaded(Result<Vec<RoleRecord>, ApiError>),

    // Form input
    FieldChanged { name: String, value: String },
    ProfileSelected(String),
    RoleSelected(String),

    // Submission
    Submit,
    CreateUserSucceeded(serde_json::Value),
    CreateUserFailed(ApiError),
}

impl Message {
    pub fn field_changed(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::FieldChanged {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            // Option lists
            Self::Initialize => "UserCreation::Initialize",
            Self::ProfileOptionsLoaded(_) => "UserCreation::ProfileOptionsLoaded",
            Self::RoleOptionsLoaded(_) => "UserCreation::RoleOptionsLoaded",

            // Form input
            Self::FieldChanged { .. } => "UserCreation::FieldChanged",
            Self::ProfileSelected(_) => "UserCreation::ProfileSelected",
            Self::RoleSelected(_) => "UserCreation::RoleSelected",

            // Submission
            Self::Submit => "UserCreation::Submit",
            Self::CreateUserSucceeded(_) => "UserCreation::CreateUserSucceeded",
            Self::CreateUserFailed(_) => "UserCreation::CreateUserFailed",
        }
    }
}

/// Events the user creation domain emits to its embedder
#[derive(Clone, Debug, PartialEq)]
pub enum UserCreationEvent {
    UserCreated(serde_json::Value),
}
