//! Role-based access decisions for protected routes.

use storefront_config::RoutesConfig;
use tracing::debug;

use crate::error::{AuthError, AuthResult};
use crate::session::{Role, Session, UserSummary};

pub const LOGIN_ROUTE: &str = "/login";
pub const HOME_ROUTE: &str = "/";
pub const ADMIN_ROUTE: &str = "/admin";

/// Outcome of a gate check, applied by the host's navigation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderDecision {
    RenderProtectedContent,
    RedirectTo(String),
}

impl RenderDecision {
    pub fn is_render(&self) -> bool {
        matches!(self, RenderDecision::RenderProtectedContent)
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            RenderDecision::RedirectTo(path) => Some(path),
            RenderDecision::RenderProtectedContent => None,
        }
    }
}

/// Decide whether `session` may see content restricted to `allowed_roles`,
/// using the default route literals.
///
/// ```
/// use storefront_auth::{decide, RenderDecision, Role, Session, UserSummary};
///
/// let session = Session::signed_in(UserSummary::new(1, "customer"));
/// assert_eq!(
///     decide(&session, &[Role::Admin]),
///     RenderDecision::RedirectTo("/".into())
/// );
/// ```
pub fn decide(session: &Session, allowed_roles: &[Role]) -> RenderDecision {
    decide_with(session, allowed_roles, LOGIN_ROUTE, HOME_ROUTE)
}

/// Where a freshly signed-in user lands, using the default route literals.
pub fn landing_route(user: &UserSummary) -> &'static str {
    if user.is_admin() {
        ADMIN_ROUTE
    } else {
        HOME_ROUTE
    }
}

// Only the presence of `user` counts as signed in here; `is_authenticated` is not consulted.
fn decide_with(
    session: &Session,
    allowed_roles: &[Role],
    login: &str,
    home: &str,
) -> RenderDecision {
    let Some(user) = session.user.as_ref() else {
        debug!(to = login, "no signed-in user, redirecting to login");
        return RenderDecision::RedirectTo(login.to_owned());
    };

    if !allowed_roles.contains(&user.role) {
        debug!(user = %user.id, role = %user.role, to = home, "role not permitted");
        return RenderDecision::RedirectTo(home.to_owned());
    }

    RenderDecision::RenderProtectedContent
}

/// Access gate bound to the configured redirect targets.
#[derive(Debug, Clone, Default)]
pub struct AccessGate {
    routes: RoutesConfig,
}

impl AccessGate {
    pub fn new(routes: RoutesConfig) -> AuthResult<Self> {
        validate_route("login", &routes.login)?;
        validate_route("home", &routes.home)?;
        validate_route("admin", &routes.admin)?;
        Ok(Self { routes })
    }

    pub fn routes(&self) -> &RoutesConfig {
        &self.routes
    }

    pub fn decide(&self, session: &Session, allowed_roles: &[Role]) -> RenderDecision {
        decide_with(session, allowed_roles, &self.routes.login, &self.routes.home)
    }

    pub fn landing_route(&self, user: &UserSummary) -> &str {
        if user.is_admin() {
            &self.routes.admin
        } else {
            &self.routes.home
        }
    }

    /// Bind a fixed set of roles to this gate.
    pub fn guard(&self, allowed_roles: impl IntoIterator<Item = Role>) -> RouteGuard {
        RouteGuard {
            gate: self.clone(),
            allowed_roles: allowed_roles.into_iter().collect(),
        }
    }
}

fn validate_route(name: &'static str, path: &str) -> AuthResult<()> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(AuthError::InvalidRoute {
            name,
            path: path.to_owned(),
        })
    }
}

/// A gate check for one protected route, re-run on every session change.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    gate: AccessGate,
    allowed_roles: Vec<Role>,
}

impl RouteGuard {
    pub fn check(&self, session: &Session) -> RenderDecision {
        self.gate.decide(session, &self.allowed_roles)
    }

    pub fn allowed_roles(&self) -> &[Role] {
        &self.allowed_roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(role: &str) -> Session {
        Session::signed_in(UserSummary::new(1, role))
    }

    #[test]
    fn anonymous_session_goes_to_login_for_any_role_set() {
        let session = Session::anonymous();
        for allowed in [vec![], vec![Role::Admin], vec![Role::Customer, Role::User]] {
            assert_eq!(
                decide(&session, &allowed),
                RenderDecision::RedirectTo("/login".into())
            );
        }
    }

    #[test]
    fn user_presence_alone_decides_signed_in() {
        let session = Session {
            is_authenticated: false,
            user: Some(UserSummary::new(1, "admin")),
        };
        assert!(decide(&session, &[Role::Admin]).is_render());

        let session = Session {
            is_authenticated: true,
            user: None,
        };
        assert_eq!(decide(&session, &[Role::Admin]).redirect_target(), Some("/login"));
    }

    #[test]
    fn empty_role_set_redirects_every_signed_in_user_home() {
        assert_eq!(
            decide(&session_with("admin"), &[]),
            RenderDecision::RedirectTo("/".into())
        );
    }

    #[test]
    fn role_match_is_exact() {
        let decision = decide(&session_with("Admin"), &[Role::Admin]);
        assert_eq!(decision.redirect_target(), Some("/"));
    }

    #[test]
    fn landing_route_sends_admins_to_dashboard() {
        assert_eq!(landing_route(&UserSummary::new(1, "admin")), "/admin");
        assert_eq!(landing_route(&UserSummary::new(2, "customer")), "/");
        assert_eq!(landing_route(&UserSummary::new(3, "staff")), "/");
    }

    #[test]
    fn default_gate_uses_route_literals() {
        let gate = AccessGate::default();
        assert_eq!(gate.routes(), &RoutesConfig::default());
        assert_eq!(
            gate.decide(&Session::anonymous(), &[Role::Admin]),
            RenderDecision::RedirectTo(LOGIN_ROUTE.into())
        );
        assert_eq!(gate.landing_route(&UserSummary::new(1, "admin")), ADMIN_ROUTE);
    }

    #[test]
    fn gate_rejects_relative_routes() {
        let routes = RoutesConfig {
            login: "login".into(),
            ..RoutesConfig::default()
        };
        let err = AccessGate::new(routes).unwrap_err();
        assert!(matches!(err, AuthError::InvalidRoute { name: "login", .. }));

        let routes = RoutesConfig {
            admin: String::new(),
            ..RoutesConfig::default()
        };
        assert!(AccessGate::new(routes).is_err());
    }
}
