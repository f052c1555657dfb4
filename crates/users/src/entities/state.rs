use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entities::user::UserRecord;
use crate::types::UsersResult;

/// Shared, immutable list of user records.
///
/// Identity of the outer `Arc` is what the selectors key their caches on, so
/// a store that leaves the list untouched must hand the same `Arc` back.
pub type UserList = Arc<[Arc<UserRecord>]>;

/// Lifecycle of the fetch that fills the collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// Any further keys the backend sends along.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One snapshot of the store's users slice.
///
/// Cloning is cheap and keeps every slice's identity; build the next snapshot
/// with struct update syntax so unchanged slices stay shared:
///
/// ```
/// use storefront_users::{LoadStatus, UserRecord, UsersState};
///
/// let loaded = UsersState::with_items([UserRecord::new(1, "admin")]);
/// let refreshing = UsersState { status: LoadStatus::Loading, ..loaded.clone() };
/// assert!(std::sync::Arc::ptr_eq(
///     loaded.items.as_ref().unwrap(),
///     refreshing.items.as_ref().unwrap(),
/// ));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersState {
    #[serde(default)]
    pub items: Option<UserList>,
    #[serde(default)]
    pub status: LoadStatus,
    #[serde(default)]
    pub error: Option<Arc<str>>,
    #[serde(default)]
    pub pagination: Option<Arc<Pagination>>,
}

impl UsersState {
    pub fn with_items(records: impl IntoIterator<Item = UserRecord>) -> Self {
        Self {
            items: Some(records.into_iter().map(Arc::new).collect()),
            status: LoadStatus::Succeeded,
            ..Self::default()
        }
    }

    /// Decode a snapshot serialised by the host store.
    pub fn from_json(raw: &str) -> UsersResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
