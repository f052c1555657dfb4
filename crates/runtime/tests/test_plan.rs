use anyhow::Result;
use serde_json::json;
use storefront_auth::{Navigation, RenderDecision, Session};
use storefront_config::{AppConfig, TelemetryConfig};
use storefront_runtime::{telemetry, Storefront};
use storefront_users::UsersState;

fn session(value: serde_json::Value) -> Session {
    Session::from_json(&value.to_string()).expect("session snapshot should decode")
}

#[test]
fn initialise_uses_configured_routes() -> Result<()> {
    let mut config = AppConfig::default();
    config.routes.login = "/signin".into();
    config.routes.admin = "/dashboard".into();

    let storefront = Storefront::initialise(&config)?;
    assert_eq!(storefront.gate().routes().login, "/signin");
    assert_eq!(
        storefront.admin_guard().check(&Session::anonymous()),
        RenderDecision::RedirectTo("/signin".into())
    );
    Ok(())
}

#[test]
fn initialise_rejects_relative_routes() {
    let mut config = AppConfig::default();
    config.routes.home = "shop".into();

    let error = Storefront::initialise(&config).expect_err("relative route should fail");
    assert_eq!(error.to_string(), "invalid route configuration");
    assert!(format!("{error:#}").contains("\"shop\""));
}

#[test]
fn guards_apply_their_role_sets() -> Result<()> {
    let storefront = Storefront::initialise(&AppConfig::default())?;
    let customer = session(json!({"isAuthenticated": true, "user": {"id": 8, "role": "customer"}}));
    let legacy = session(json!({"isAuthenticated": true, "user": {"id": 9, "role": "user"}}));

    assert_eq!(
        storefront.admin_guard().check(&customer),
        RenderDecision::RedirectTo("/".into())
    );
    assert!(storefront.account_guard().check(&customer).is_render());
    assert!(storefront.account_guard().check(&legacy).is_render());
    Ok(())
}

#[test]
fn session_changes_drive_landing_redirect() -> Result<()> {
    let mut storefront = Storefront::initialise(&AppConfig::default())?;
    let admin = session(json!({"isAuthenticated": true, "user": {"id": 1, "role": "admin"}}));

    assert_eq!(storefront.on_session_change(&Session::anonymous(), "/login"), None);
    assert_eq!(
        storefront.on_session_change(&admin, "/login"),
        Some(Navigation {
            to: "/admin".into(),
            replace: true
        })
    );
    assert_eq!(storefront.on_session_change(&admin, "/admin"), None);
    Ok(())
}

#[test]
fn user_selectors_are_shared_across_renders() -> Result<()> {
    let storefront = Storefront::initialise(&AppConfig::default())?;
    let state = UsersState::from_json(
        &json!({"items": [{"id": 1, "role": "admin"}, {"id": 2, "role": "user"}]}).to_string(),
    )?;

    let first = storefront.users().users_by_role(&state, Some("user"));
    let second = storefront.users().users_by_role(&state, Some("user"));
    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert_eq!(storefront.users().stats(&state).customers, 1);
    Ok(())
}

#[test]
fn init_tracing_installs_subscriber_once() {
    let config = TelemetryConfig::default();
    telemetry::init_tracing(&config).expect("first subscriber install should succeed");
    assert!(telemetry::init_tracing(&config).is_err());
}
