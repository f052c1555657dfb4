use anyhow::{Context, Result};
use storefront_auth::{AccessGate, LandingRedirect, Navigation, Role, RouteGuard, Session};
use storefront_config::AppConfig;
use storefront_users::UserSelectors;
use tracing::info;

pub mod telemetry {
    use anyhow::Result;
    use storefront_config::TelemetryConfig;
    use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

    /// Install the global fmt subscriber. `RUST_LOG` wins over the configured filter.
    pub fn init_tracing(config: &TelemetryConfig) -> Result<()> {
        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(&config.filter)
                .map_err(|error| anyhow::anyhow!("invalid telemetry filter: {error}"))?,
        };

        let subscriber = SubscriberBuilder::default()
            .with_env_filter(env_filter)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|error| anyhow::anyhow!("failed to set tracing subscriber: {error}"))
    }
}

/// Everything the rendering layer needs, built once from configuration.
#[derive(Debug)]
pub struct Storefront {
    gate: AccessGate,
    landing: LandingRedirect,
    users: UserSelectors,
}

impl Storefront {
    pub fn initialise(config: &AppConfig) -> Result<Self> {
        let gate = AccessGate::new(config.routes.clone())
            .context("invalid route configuration")?;
        let landing = LandingRedirect::new(gate.clone());

        info!(
            login = %config.routes.login,
            home = %config.routes.home,
            admin = %config.routes.admin,
            "storefront access core ready"
        );

        Ok(Self {
            gate,
            landing,
            users: UserSelectors::new(),
        })
    }

    pub fn gate(&self) -> &AccessGate {
        &self.gate
    }

    pub fn users(&self) -> &UserSelectors {
        &self.users
    }

    /// Guard for the admin dashboard routes.
    pub fn admin_guard(&self) -> RouteGuard {
        self.gate.guard([Role::Admin])
    }

    /// Guard for pages any signed-in shopper or admin may see.
    pub fn account_guard(&self) -> RouteGuard {
        self.gate.guard([Role::Admin, Role::Customer, Role::User])
    }

    /// Feed a session change from the store; returns the post-login
    /// navigation when one is due.
    pub fn on_session_change(
        &mut self,
        session: &Session,
        current_path: &str,
    ) -> Option<Navigation> {
        self.landing.observe(session, current_path)
    }
}
