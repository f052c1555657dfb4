//! Domain entities for the users slice of the store.
//!
//! These are read-only snapshots; the fetch workflow that fills them lives
//! with the host.

pub mod state;
pub mod user;

pub use state::{LoadStatus, Pagination, UserList, UsersState};
pub use user::{UserRecord, UserStatus};
