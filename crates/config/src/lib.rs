use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

const DEFAULT_CONFIG_FILES: &[&str] = &[
    "storefront.toml",
    "config/storefront.toml",
    "crates/config/storefront.toml",
    "../storefront.toml",
    "../config/storefront.toml",
    "../crates/config/storefront.toml",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub routes: RoutesConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Redirect targets used by the access gate and the post-login redirect.
///
/// The defaults must match the host routing table.
///
/// ```
/// use storefront_config::RoutesConfig;
///
/// let routes = RoutesConfig::default();
/// assert_eq!(routes.login, "/login");
/// assert_eq!(routes.home, "/");
/// assert_eq!(routes.admin, "/admin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutesConfig {
    #[serde(default = "RoutesConfig::default_login")]
    pub login: String,
    #[serde(default = "RoutesConfig::default_home")]
    pub home: String,
    #[serde(default = "RoutesConfig::default_admin")]
    pub admin: String,
}

impl RoutesConfig {
    fn default_login() -> String {
        "/login".to_string()
    }

    fn default_home() -> String {
        "/".to_string()
    }

    fn default_admin() -> String {
        "/admin".to_string()
    }
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            login: Self::default_login(),
            home: Self::default_home(),
            admin: Self::default_admin(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Fallback `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "TelemetryConfig::default_filter")]
    pub filter: String,
}

impl TelemetryConfig {
    fn default_filter() -> String {
        "info".to_string()
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: Self::default_filter(),
        }
    }
}

/// Load the application configuration by combining defaults, files, and environment overrides.
///
/// ```
/// use storefront_config::load;
///
/// std::env::remove_var("STOREFRONT_CONFIG");
///
/// let config = load().expect("configuration should load with defaults");
/// assert!(!config.routes.login.is_empty());
/// ```
pub fn load() -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::default();

    let mut builder = config::Config::builder()
        .set_default("routes.login", defaults.routes.login.clone())?
        .set_default("routes.home", defaults.routes.home.clone())?
        .set_default("routes.admin", defaults.routes.admin.clone())?
        .set_default("telemetry.filter", defaults.telemetry.filter.clone())?;

    if let Some(path) = config_file() {
        builder = builder.add_source(config::File::from(path));
    }

    builder = builder
        .add_source(config::Environment::with_prefix("STOREFRONT").separator("__"));

    let cfg = builder.build().context("unable to build configuration")?;

    let config = cfg
        .try_deserialize::<AppConfig>()
        .context("invalid configuration")?;

    debug!(?config, "loaded storefront configuration");
    Ok(config)
}

/// `STOREFRONT_CONFIG` if set, else the first default location that exists
/// under the working directory.
fn config_file() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("STOREFRONT_CONFIG") {
        let path = PathBuf::from(path);
        debug!(path = %path.display(), "loading configuration via STOREFRONT_CONFIG");
        return Some(path);
    }

    let cwd = std::env::current_dir().ok()?;
    let found = DEFAULT_CONFIG_FILES
        .iter()
        .map(|candidate| cwd.join(candidate))
        .find(|path| path.is_file());

    match &found {
        Some(path) => debug!(path = %path.display(), "loading configuration file"),
        None => debug!("no configuration file found, using defaults and environment"),
    }
    found
}
