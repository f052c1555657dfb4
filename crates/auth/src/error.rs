//! Error types for the access control crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("failed to decode session snapshot: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid {name} route {path:?}: routes must be absolute paths")]
    InvalidRoute { name: &'static str, path: String },
}

pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AuthError::InvalidRoute {
            name: "login",
            path: "login".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid login route \"login\": routes must be absolute paths"
        );
    }
}
