//! # Storefront Auth Crate
//!
//! Access decisions for the storefront and admin dashboard. Everything here is
//! a pure function of a [`Session`] snapshot handed in by the host store, so
//! the host decides when to re-evaluate (on every session change) and how to
//! apply the result.
//!
//! - [`decide`] / [`AccessGate::decide`]: render protected content or redirect
//! - [`RouteGuard`]: a gate bound to one route's allowed roles
//! - [`LandingRedirect`]: the one-shot redirect after signing in

pub mod error;
pub mod gate;
pub mod landing;
pub mod session;

pub use error::{AuthError, AuthResult};
pub use gate::{
    decide, landing_route, AccessGate, RenderDecision, RouteGuard, ADMIN_ROUTE, HOME_ROUTE,
    LOGIN_ROUTE,
};
pub use landing::{LandingRedirect, Navigation};
pub use session::{Role, Session, UserId, UserSummary};
