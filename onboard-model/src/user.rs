/// Body of a create-user call.
///
/// This is a snapshot of the registration form taken when the operator
/// submits. The selected profile is deliberately absent: profile assignment
/// is left to the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CreateUserRequest {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Short alias.
    pub alias: String,
    /// Login name, unique across the directory.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Identifier of the selected role.
    pub role_id: String,
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_without_profile() {
        let request = CreateUserRequest {
            first_name: "A".into(),
            last_name: "B".into(),
            alias: "ab".into(),
            username: "ab1".into(),
            email: "a@b.com".into(),
            role_id: "r1".into(),
        };

        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 6);
        assert_eq!(object["firstName"], "A");
        assert_eq!(object["lastName"], "B");
        assert_eq!(object["roleId"], "r1");
        assert!(!object.contains_key("profileId"));
    }
}
