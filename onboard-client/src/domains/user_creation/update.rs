use std::sync::Arc;

use log::{debug, error, info};
use onboard_model::options::to_option_pairs;

use crate::{
    common::{messages::DomainUpdateResult, task::Task},
    domains::{
        ui::feedback_ui::Notification,
        user_creation::{
            UserCreationDomainState,
            messages::{Message, UserCreationEvent},
        },
    },
    infrastructure::api_error::ApiError,
};

pub const SUCCESS_TITLE: &str = "User Created";
pub const SUCCESS_MESSAGE: &str = "User created successfully.";
pub const ERROR_TITLE: &str = "Error Message";
/// Shown when a failure carries no username status code.
pub const GENERIC_ERROR_MESSAGE: &str = "Unable to create user.";

/// Handle user creation domain messages
pub fn update_user_creation(
    state: &mut UserCreationDomainState,
    message: Message,
) -> DomainUpdateResult {
    debug!("User creation update: {}", message.name());

    match message {
        // Option lists
        Message::Initialize => {
            info!("Loading profile and role options");
            let Some(service) = state.directory_service.clone() else {
                error!("No UserDirectoryService available");
                return DomainUpdateResult::none();
            };
            let profiles = {
                let service = Arc::clone(&service);
                Task::perform(
                    async move { service.fetch_profile_options().await },
                    Message::ProfileOptionsLoaded,
                )
            };
            let roles = Task::perform(
                async move { service.fetch_role_options().await },
                Message::RoleOptionsLoaded,
            );
            DomainUpdateResult::task(Task::batch([profiles, roles]))
        }

        Message::ProfileOptionsLoaded(result) => {
            match result {
                Ok(records) => {
                    info!("Loaded {} profile options", records.len());
                    state.profile_options = Some(to_option_pairs(records));
                }
                Err(err) => error!("Failed to load profile options: {}", err),
            }
            DomainUpdateResult::none()
        }

        Message::RoleOptionsLoaded(result) => {
            match result {
                Ok(records) => {
                    info!("Loaded {} role options", records.len());
                    state.role_options = Some(to_option_pairs(records));
                }
                Err(err) => error!("Failed to load role options: {}", err),
            }
            DomainUpdateResult::none()
        }

        // Form input
        Message::FieldChanged { name, value } => {
            if state.form.set_field(&name, value) {
                debug!("Updated form field: {}", name);
            } else {
                debug!("Ignoring change for unknown form field: {}", name);
            }
            DomainUpdateResult::none()
        }

        Message::ProfileSelected(profile_id) => {
            debug!("Profile selected: {}", profile_id);
            state.form.set_profile(profile_id);
            DomainUpdateResult::none()
        }

        Message::RoleSelected(role_id) => {
            debug!("Role selected: {}", role_id);
            state.form.set_role(role_id);
            DomainUpdateResult::none()
        }

        // Submission
        Message::Submit => {
            let request = state.form.to_request();
            // Cleared before the request resolves, whatever its outcome.
            state.form.clear_after_submit();

            let Some(service) = state.directory_service.clone() else {
                error!("No UserDirectoryService available for user creation");
                state
                    .notifier
                    .notify(Notification::error(ERROR_TITLE, GENERIC_ERROR_MESSAGE));
                return DomainUpdateResult::none();
            };

            state.in_flight += 1;
            info!(
                "Submitting create user request for {:?} ({} in flight)",
                request.username, state.in_flight
            );
            DomainUpdateResult::task(Task::perform(
                async move { service.create_user(request).await },
                |result| match result {
                    Ok(payload) => Message::CreateUserSucceeded(payload),
                    Err(err) => Message::CreateUserFailed(err),
                },
            ))
        }

        Message::CreateUserSucceeded(payload) => {
            state.in_flight = state.in_flight.saturating_sub(1);
            state
                .notifier
                .notify(Notification::success(SUCCESS_TITLE, SUCCESS_MESSAGE));
            info!("User creation: {}", payload);
            DomainUpdateResult::with_events(
                Task::none(),
                vec![UserCreationEvent::UserCreated(payload)],
            )
        }

        Message::CreateUserFailed(err) => {
            state.in_flight = state.in_flight.saturating_sub(1);
            let status_code = username_status_code(&err);
            let message = status_code.unwrap_or(GENERIC_ERROR_MESSAGE);
            state
                .notifier
                .notify(Notification::error(ERROR_TITLE, message));
            error!("User not created: {}", err);
            error!("Status code: {:?}", status_code);
            DomainUpdateResult::none()
        }
    }
}

/// First username status code carried by a creation failure, if any.
pub fn username_status_code(err: &ApiError) -> Option<&str> {
    err.error_body().and_then(|body| body.username_status_code())
}
