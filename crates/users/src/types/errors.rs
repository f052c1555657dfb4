//! Error types for the users crate.

use thiserror::Error;

/// Projections never fail; only decoding a snapshot can.
#[derive(Debug, Error)]
pub enum UsersError {
    #[error("failed to decode users snapshot: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type UsersResult<T> = Result<T, UsersError>;
