use std::collections::HashMap;

/// Field name the backend uses when it rejects the requested username.
pub const USERNAME_FIELD: &str = "Username";

/// A single validation failure attached to one request field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FieldError {
    /// Machine readable code, e.g. `DUPLICATE_USERNAME`.
    pub status_code: String,
    /// Human readable detail, when the backend sends one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub message: Option<String>,
}

/// A failure that is not tied to a particular field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PageError {
    /// Machine readable code.
    pub status_code: String,
    /// Human readable detail, when the backend sends one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub message: Option<String>,
}

/// Structured body the backend returns when it rejects a create-user call.
///
/// Every part is optional on the wire. Backends that fail before validation
/// may send nothing but a `message`, or an empty object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CreateUserErrorBody {
    /// Errors keyed by request field name, e.g. `Username`.
    pub field_errors: HashMap<String, Vec<FieldError>>,
    /// Errors that apply to the request as a whole.
    pub page_errors: Vec<PageError>,
    /// Top-level message for failures outside validation.
    pub message: Option<String>,
}

impl CreateUserErrorBody {
    /// Status code of the first error reported for `field`, if any.
    pub fn first_status_code(&self, field: &str) -> Option<&str> {
        self.field_errors
            .get(field)
            .and_then(|errors| errors.first())
            .map(|error| error.status_code.as_str())
    }

    /// Status code of the first username error, if any.
    pub fn username_status_code(&self) -> Option<&str> {
        self.first_status_code(USERNAME_FIELD)
    }
}
