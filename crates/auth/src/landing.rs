//! Post-login redirect, fired once per sign-in.

use tracing::debug;

use crate::gate::AccessGate;
use crate::session::Session;

/// Navigation request handed to the host router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub to: String,
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

/// Tracks sign-in transitions and emits the landing navigation for each.
#[derive(Debug, Clone, Default)]
pub struct LandingRedirect {
    gate: AccessGate,
    fired_for_current_login: bool,
}

impl LandingRedirect {
    pub fn new(gate: AccessGate) -> Self {
        Self {
            gate,
            fired_for_current_login: false,
        }
    }

    /// Feed the latest session; returns a navigation only on the first
    /// observation after the visitor signs in, and only if they are not
    /// already on their landing route.
    pub fn observe(&mut self, session: &Session, current_path: &str) -> Option<Navigation> {
        let user = match session.user.as_ref() {
            Some(user) if session.is_authenticated => user,
            _ => {
                self.fired_for_current_login = false;
                return None;
            }
        };

        if self.fired_for_current_login {
            return None;
        }
        self.fired_for_current_login = true;

        let target = self.gate.landing_route(user);
        if target == current_path {
            debug!(user = %user.id, path = current_path, "already on landing route");
            return None;
        }

        debug!(user = %user.id, role = %user.role, to = target, "redirecting after sign-in");
        Some(Navigation {
            to: target.to_owned(),
            replace: true,
        })
    }

    /// Forget the current sign-in so the next observation redirects again.
    pub fn reset(&mut self) {
        self.fired_for_current_login = false;
    }
}
