//! Wiring from configuration to a ready-to-run form runtime

pub mod bootstrap;

use std::sync::Arc;

pub use bootstrap::{AppConfig, ConfigError};

use crate::domains::ui::feedback_ui::NotificationSink;
use crate::domains::user_creation::{UserCreationDomain, UserCreationDomainState};
use crate::infrastructure::{
    api_client::ApiClient,
    api_error::ApiError,
    services::user_directory::{UserDirectoryApiAdapter, UserDirectoryService},
};
use crate::runtime::FormRuntime;

/// Build a runtime whose form talks to the configured HTTP backend.
pub fn build_runtime(
    config: &AppConfig,
    notifier: Arc<dyn NotificationSink>,
) -> Result<FormRuntime, ApiError> {
    let client = ApiClient::new(config.server_url(), config.request_timeout())?
        .with_token(config.api_token().map(str::to_owned));
    let service: Arc<dyn UserDirectoryService> =
        Arc::new(UserDirectoryApiAdapter::new(Arc::new(client)));
    Ok(runtime_with_service(service, notifier))
}

/// Build a runtime around any directory service implementation.
pub fn runtime_with_service(
    service: Arc<dyn UserDirectoryService>,
    notifier: Arc<dyn NotificationSink>,
) -> FormRuntime {
    let state = UserCreationDomainState::new(Some(service), notifier);
    FormRuntime::new(UserCreationDomain::new(state))
}
