use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use storefront_auth::UserId;

/// A user row as held in the store's users collection.
///
/// Every field other than `id` may be missing or null; missing text fields
/// never match a search and a missing status counts as active. Numbers in
/// text columns are read as their decimal text, other shapes as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: UserId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    /// Raw role tag, compared exactly.
    #[serde(default, deserialize_with = "lenient_role")]
    pub role: String,
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<UserStatus>,
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

fn lenient_role<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

fn lenient_status<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<UserStatus>, D::Error> {
    Ok(lenient_text(deserializer)?.map(UserStatus::from))
}

/// Account status tag; unknown tags are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
    Other(String),
}

impl From<&str> for UserStatus {
    fn from(s: &str) -> Self {
        match s {
            "active" => UserStatus::Active,
            "inactive" => UserStatus::Inactive,
            "suspended" => UserStatus::Suspended,
            other => UserStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for UserStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "active" | "inactive" | "suspended" => UserStatus::from(s.as_str()),
            _ => UserStatus::Other(s),
        }
    }
}

impl From<UserStatus> for String {
    fn from(status: UserStatus) -> Self {
        match status {
            UserStatus::Active => "active".to_string(),
            UserStatus::Inactive => "inactive".to_string(),
            UserStatus::Suspended => "suspended".to_string(),
            UserStatus::Other(tag) => tag,
        }
    }
}

impl UserRecord {
    pub fn new(id: impl Into<UserId>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            email: None,
            phone: None,
            role: role.into(),
            status: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<UserStatus>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Check if user is an admin
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }

    /// Shoppers are tagged either `customer` or the legacy `user`.
    pub fn is_customer(&self) -> bool {
        matches!(self.role.as_str(), "customer" | "user")
    }

    /// Absent (or blank) status counts as active.
    pub fn is_active(&self) -> bool {
        match &self.status {
            None | Some(UserStatus::Active) => true,
            Some(UserStatus::Other(tag)) => tag.is_empty(),
            Some(_) => false,
        }
    }

    /// `needle` must already be lowercased and non-empty.
    pub fn matches_search(&self, needle: &str) -> bool {
        [&self.name, &self.email, &self.phone]
            .into_iter()
            .any(|field| contains_folded(field.as_deref(), needle))
    }
}

fn contains_folded(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(needle))
}
