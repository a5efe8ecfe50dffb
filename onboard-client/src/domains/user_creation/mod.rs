//! User creation domain
//!
//! Holds the registration form, the two reference option lists it offers,
//! and the submission logic that turns the form into a create-user call.

pub mod form;
pub mod messages;
pub mod update;

use std::sync::Arc;

use onboard_model::options::OptionPair;

use self::form::FormState;
use self::messages::Message;
use crate::common::messages::DomainUpdateResult;
use crate::domains::ui::feedback_ui::NotificationSink;
use crate::infrastructure::services::user_directory::UserDirectoryService;

/// User creation domain state
pub struct UserCreationDomainState {
    pub form: FormState,
    /// `None` until the profile list has loaded successfully
    pub profile_options: Option<Vec<OptionPair>>,
    /// `None` until the role list has loaded successfully
    pub role_options: Option<Vec<OptionPair>>,
    /// Submissions whose outcome has not come back yet
    pub in_flight: usize,
    pub directory_service: Option<Arc<dyn UserDirectoryService>>,
    pub notifier: Arc<dyn NotificationSink>,
}

impl UserCreationDomainState {
    pub fn new(
        directory_service: Option<Arc<dyn UserDirectoryService>>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            form: FormState::default(),
            profile_options: None,
            role_options: None,
            in_flight: 0,
            directory_service,
            notifier,
        }
    }
}

impl std::fmt::Debug for UserCreationDomainState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCreationDomainState")
            .field("form", &self.form)
            .field("profile_options", &self.profile_options)
            .field("role_options", &self.role_options)
            .field("in_flight", &self.in_flight)
            .field(
                "has_directory_service",
                &self.directory_service.as_ref().map(|_| true),
            )
            .finish()
    }
}

#[derive(Debug)]
pub struct UserCreationDomain {
    pub state: UserCreationDomainState,
}

impl UserCreationDomain {
    pub fn new(state: UserCreationDomainState) -> Self {
        Self { state }
    }

    pub fn update(&mut self, message: Message) -> DomainUpdateResult {
        update::update_user_creation(&mut self.state, message)
    }
}
