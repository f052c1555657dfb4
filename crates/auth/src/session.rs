use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AuthResult;

/// Role tag carried by a signed-in user.
///
/// Tags are matched exactly: `"Admin"` is not [`Role::Admin`], it is kept
/// verbatim as [`Role::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Customer,
    User,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::Customer => "customer",
            Role::User => "user",
            Role::Other(tag) => tag,
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s {
            "admin" => Role::Admin,
            "customer" => Role::Customer,
            "user" => Role::User,
            other => Role::Other(other.to_string()),
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "admin" | "customer" | "user" => Role::from(s.as_str()),
            _ => Role::Other(s),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier as delivered by the store, either numeric or textual.
///
/// Comparison is strict, so `UserId::from(1)` never equals `UserId::from("1")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        UserId::Number(id)
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        UserId::Number(i64::from(id))
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        UserId::Text(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        UserId::Text(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(id) => write!(f, "{id}"),
            UserId::Text(id) => f.write_str(id),
        }
    }
}

/// Identity of the signed-in visitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: UserId,
    pub role: Role,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserSummary {
    pub fn new(id: impl Into<UserId>, role: impl Into<Role>) -> Self {
        Self {
            id: id.into(),
            role: role.into(),
            name: None,
            email: None,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

/// Snapshot of the store's authentication slice.
///
/// `is_authenticated` and `user` are kept consistent by the store; nothing
/// here checks that they agree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(default)]
    pub user: Option<UserSummary>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user: UserSummary) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user),
        }
    }

    /// Decode a snapshot serialised by the host store.
    ///
    /// ```
    /// use storefront_auth::{Role, Session};
    ///
    /// let session = Session::from_json(
    ///     r#"{"isAuthenticated": true, "user": {"id": 7, "role": "admin"}}"#,
    /// )
    /// .expect("valid snapshot");
    /// assert_eq!(session.user.map(|user| user.role), Some(Role::Admin));
    /// ```
    pub fn from_json(raw: &str) -> AuthResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Both flags agree that a user is signed in.
    pub fn is_signed_in(&self) -> bool {
        self.is_authenticated && self.user.is_some()
    }
}
