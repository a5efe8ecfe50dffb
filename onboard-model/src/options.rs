/// Profile record as returned by the profile option list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ProfileRecord {
    /// Backend identifier of the profile.
    pub profile_id: String,
    /// Human readable profile name.
    pub profile_name: String,
}

/// Role record as returned by the role option list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RoleRecord {
    /// Backend identifier of the role.
    pub role_id: String,
    /// Human readable role name.
    pub role_name: String,
}

/// Display-ready `{label, value}` projection of an option record.
///
/// Picklists render `label` and hand `value` back when an entry is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionPair {
    /// Text shown to the operator.
    pub label: String,
    /// Identifier submitted when the entry is selected.
    pub value: String,
}

impl OptionPair {
    /// Build a pair from any string-like label and value.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl From<ProfileRecord> for OptionPair {
    fn from(record: ProfileRecord) -> Self {
        Self {
            label: record.profile_name,
            value: record.profile_id,
        }
    }
}

impl From<RoleRecord> for OptionPair {
    fn from(record: RoleRecord) -> Self {
        Self {
            label: record.role_name,
            value: record.role_id,
        }
    }
}

/// Project a fetched record list into option pairs, preserving order.
pub fn to_option_pairs<R>(records: impl IntoIterator<Item = R>) -> Vec<OptionPair>
where
    R: Into<OptionPair>,
{
    records.into_iter().map(Into::into).collect()
}
