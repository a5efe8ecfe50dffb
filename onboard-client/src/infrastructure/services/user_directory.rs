use async_trait::async_trait;
use onboard_model::{
    options::{ProfileRecord, RoleRecord},
    routes::v1,
    user::CreateUserRequest,
};
use std::sync::Arc;

use crate::infrastructure::{api_client::ApiClient, api_error::ApiError};

/// The three backend operations the registration form depends on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectoryService: Send + Sync {
    async fn fetch_profile_options(&self) -> Result<Vec<ProfileRecord>, ApiError>;
    async fn fetch_role_options(&self) -> Result<Vec<RoleRecord>, ApiError>;
    /// Create a user. The success payload is opaque to the client.
    async fn create_user(&self, request: CreateUserRequest)
    -> Result<serde_json::Value, ApiError>;
}

#[derive(Clone, Debug)]
pub struct UserDirectoryApiAdapter {
    client: Arc<ApiClient>,
}

impl UserDirectoryApiAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserDirectoryService for UserDirectoryApiAdapter {
    async fn fetch_profile_options(&self) -> Result<Vec<ProfileRecord>, ApiError> {
        self.client.get(v1::users::PROFILE_OPTIONS).await
    }

    async fn fetch_role_options(&self) -> Result<Vec<RoleRecord>, ApiError> {
        self.client.get(v1::users::ROLE_OPTIONS).await
    }

    async fn create_user(
        &self,
        request: CreateUserRequest,
    ) -> Result<serde_json::Value, ApiError> {
        self.client.post(v1::users::COLLECTION, &request).await
    }
}
