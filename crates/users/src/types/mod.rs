//! Shared types for the users crate.

pub mod errors;

pub use errors::{UsersError, UsersResult};
