//! # Storefront Users Crate
//!
//! Read-only projections over the users slice of the storefront store, as
//! consumed by the admin dashboard.
//!
//! ## Architecture
//!
//! - **Entities**: snapshot types (`UsersState`, `UserRecord`, `Pagination`)
//! - **Selectors**: memoized projections over a snapshot
//! - **Types**: errors
//!
//! ## Usage
//!
//! ```rust
//! use storefront_users::{UserRecord, UserSelectors, UsersState};
//!
//! let selectors = UserSelectors::new();
//! let state = UsersState::with_items([
//!     UserRecord::new(1, "admin").with_name("Grace"),
//!     UserRecord::new(2, "customer").with_email("jane@example.com"),
//! ]);
//!
//! assert_eq!(selectors.users_by_search_term(&state, Some("JANE")).len(), 1);
//! assert_eq!(selectors.stats(&state).admins, 1);
//! ```

pub mod entities;
pub mod selectors;
pub mod types;

pub use entities::{LoadStatus, Pagination, UserList, UserRecord, UserStatus, UsersState};
pub use selectors::{UserSelectors, UserStats, ALL_ROLES};
pub use storefront_auth::UserId;
pub use types::{UsersError, UsersResult};
