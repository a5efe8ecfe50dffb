use std::fmt;
use std::str::FromStr;

use onboard_model::user::CreateUserRequest;
use thiserror::Error;

/// Free-text inputs of the registration form.
///
/// The string form of each variant is the input name a front end reports
/// with its change events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    Alias,
    Username,
    Email,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        Self::FirstName,
        Self::LastName,
        Self::Alias,
        Self::Username,
        Self::Email,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Alias => "alias",
            Self::Username => "username",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown form field: {0}")]
pub struct FormFieldError(pub String);

impl FromStr for FormField {
    type Err = FormFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormFieldError(s.to_string()))
    }
}

/// Current values of the registration form.
///
/// Every slot is either empty or the value last written by an input or
/// selection event. Nothing is validated locally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub alias: String,
    pub username: String,
    pub email: String,
    pub profile_id: String,
    pub role_id: String,
}

impl FormState {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Alias => &self.alias,
            FormField::Username => &self.username,
            FormField::Email => &self.email,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Alias => &mut self.alias,
            FormField::Username => &mut self.username,
            FormField::Email => &mut self.email,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Write `value` into the input called `name`.
    ///
    /// Unknown names leave the form untouched; the return value says whether
    /// anything was written.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        match name.parse::<FormField>() {
            Ok(field) => {
                self.set(field, value);
                true
            }
            Err(_) => false,
        }
    }

    pub fn set_profile(&mut self, profile_id: impl Into<String>) {
        self.profile_id = profile_id.into();
    }

    pub fn set_role(&mut self, role_id: impl Into<String>) {
        self.role_id = role_id.into();
    }

    /// Snapshot the form into a create-user request. The profile selection
    /// is not part of the request.
    pub fn to_request(&self) -> CreateUserRequest {
        CreateUserRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            alias: self.alias.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            role_id: self.role_id.clone(),
        }
    }

    /// Reset what the operator sees after a submit. The profile selection
    /// survives so it can be reused for the next user.
    pub fn clear_after_submit(&mut self) {
        for field in FormField::ALL {
            self.slot_mut(field).clear();
        }
        self.role_id.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        FormState {
            first_name: "A".into(),
            last_name: "B".into(),
            alias: "ab".into(),
            username: "ab1".into(),
            email: "a@b.com".into(),
            profile_id: "p1".into(),
            role_id: "r1".into(),
        }
    }

    #[test]
    fn field_names_round_trip() {
        for field in FormField::ALL {
            assert_eq!(field.as_str().parse::<FormField>(), Ok(field));
        }
        assert_eq!(
            "profileId".parse::<FormField>(),
            Err(FormFieldError("profileId".to_string()))
        );
    }

    #[test]
    fn set_field_writes_only_the_named_slot() {
        for field in FormField::ALL {
            let mut form = filled();
            let before = form.clone();

            assert!(form.set_field(field.as_str(), "new value"));

            assert_eq!(form.field(field), "new value");
            for other in FormField::ALL.into_iter().filter(|f| *f != field) {
                assert_eq!(form.field(other), before.field(other));
            }
            assert_eq!(form.profile_id, before.profile_id);
            assert_eq!(form.role_id, before.role_id);
        }
    }

    #[test]
    fn unknown_field_is_a_no_op() {
        let mut form = filled();
        assert!(!form.set_field("middleName", "X"));
        assert!(!form.set_field("FirstName", "X"));
        assert_eq!(form, filled());
    }

    #[test]
    fn selections_use_dedicated_slots() {
        let mut form = FormState::default();
        form.set_profile("p9");
        form.set_role("r9");
        assert_eq!(form.profile_id, "p9");
        assert_eq!(form.role_id, "r9");
        assert_eq!(form.first_name, "");
    }

    #[test]
    fn request_omits_profile_and_copies_the_rest() {
        let request = filled().to_request();
        assert_eq!(
            request,
            CreateUserRequest {
                first_name: "A".into(),
                last_name: "B".into(),
                alias: "ab".into(),
                username: "ab1".into(),
                email: "a@b.com".into(),
                role_id: "r1".into(),
            }
        );
    }

    #[test]
    fn clear_after_submit_keeps_profile() {
        let mut form = filled();
        form.clear_after_submit();
        assert_eq!(
            form,
            FormState {
                profile_id: "p1".into(),
                ..FormState::default()
            }
        );
    }
}
