//! Derived views over a [`UsersState`] snapshot.
//!
//! Each projection owns a private single-slot cache. A projection recomputes
//! only when the slice it reads (compared by pointer) or its parameter
//! differs from the previous call, and otherwise hands back the cached
//! `Arc`, so consumers can use `Arc::ptr_eq` to skip redundant work.

pub mod memo;

use std::sync::Arc;

use serde::Serialize;
use storefront_auth::UserId;

use crate::entities::{LoadStatus, Pagination, UserList, UserRecord, UsersState};
use memo::Memo;

/// Role filter value meaning "no filter".
pub const ALL_ROLES: &str = "all";

/// Headline counts for the admin users screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub admins: usize,
    pub customers: usize,
}

impl UserStats {
    fn tally(users: &[Arc<UserRecord>]) -> Self {
        users.iter().fold(
            Self {
                total: users.len(),
                ..Self::default()
            },
            |mut stats, user| {
                stats.active += usize::from(user.is_active());
                stats.admins += usize::from(user.is_admin());
                stats.customers += usize::from(user.is_customer());
                stats
            },
        )
    }
}

#[derive(Debug)]
pub struct UserSelectors {
    all_users: Memo<Option<UserList>, UserList>,
    pagination: Memo<Option<Arc<Pagination>>, Arc<Pagination>>,
    by_id: Memo<(UserList, UserId), Option<Arc<UserRecord>>>,
    by_role: Memo<(UserList, String), UserList>,
    by_search_term: Memo<(UserList, String), UserList>,
    stats: Memo<UserList, UserStats>,
}

impl Default for UserSelectors {
    fn default() -> Self {
        Self::new()
    }
}

impl UserSelectors {
    pub fn new() -> Self {
        Self {
            all_users: Memo::new("all_users"),
            pagination: Memo::new("pagination"),
            by_id: Memo::new("user_by_id"),
            by_role: Memo::new("users_by_role"),
            by_search_term: Memo::new("users_by_search_term"),
            stats: Memo::new("user_stats"),
        }
    }

    /// Every user in store order, or a shared empty list when none are loaded.
    pub fn all_users(&self, state: &UsersState) -> UserList {
        self.all_users
            .get_or_compute(state.items.clone(), |items| match items {
                Some(items) => Arc::clone(items),
                None => Arc::from(Vec::new()),
            })
    }

    pub fn is_loading(&self, state: &UsersState) -> bool {
        state.status == LoadStatus::Loading
    }

    pub fn error(&self, state: &UsersState) -> Option<Arc<str>> {
        state.error.clone()
    }

    pub fn status(&self, state: &UsersState) -> LoadStatus {
        state.status
    }

    pub fn pagination(&self, state: &UsersState) -> Arc<Pagination> {
        self.pagination
            .get_or_compute(state.pagination.clone(), |pagination| match pagination {
                Some(pagination) => Arc::clone(pagination),
                None => Arc::new(Pagination::default()),
            })
    }

    /// First user whose id equals `id`.
    pub fn user_by_id(&self, state: &UsersState, id: &UserId) -> Option<Arc<UserRecord>> {
        let users = self.all_users(state);
        self.by_id.get_or_compute((users, id.clone()), |(users, id)| {
            users.iter().find(|user| user.id == *id).cloned()
        })
    }

    /// Users whose role equals `role` exactly. `None`, the empty string (an
    /// unselected filter) and [`ALL_ROLES`] return [`Self::all_users`] itself,
    /// so records with a blank role cannot be selected on their own.
    pub fn users_by_role(&self, state: &UsersState, role: Option<&str>) -> UserList {
        let users = self.all_users(state);
        let Some(role) = role.filter(|role| !role.is_empty() && *role != ALL_ROLES) else {
            return users;
        };

        self.by_role
            .get_or_compute((users, role.to_owned()), |(users, role)| {
                users
                    .iter()
                    .filter(|user| user.role == *role)
                    .cloned()
                    .collect()
            })
    }

    /// Case-insensitive substring match on name, email, or phone. An empty or
    /// missing term returns [`Self::all_users`] itself.
    pub fn users_by_search_term(&self, state: &UsersState, term: Option<&str>) -> UserList {
        let users = self.all_users(state);
        let Some(term) = term.filter(|term| !term.is_empty()) else {
            return users;
        };

        self.by_search_term
            .get_or_compute((users, term.to_owned()), |(users, term)| {
                let needle = term.to_lowercase();
                users
                    .iter()
                    .filter(|user| user.matches_search(&needle))
                    .cloned()
                    .collect()
            })
    }

    pub fn stats(&self, state: &UsersState) -> UserStats {
        let users = self.all_users(state);
        self.stats
            .get_or_compute(users, |users| UserStats::tally(users))
    }

    /// Drop every cached result.
    pub fn clear(&self) {
        self.all_users.clear();
        self.pagination.clear();
        self.by_id.clear();
        self.by_role.clear();
        self.by_search_term.clear();
        self.stats.clear();
    }
}
