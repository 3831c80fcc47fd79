use super::*;

// =============================================================
// Guard decisions
// =============================================================

#[test]
fn authenticated_navigation_is_allowed() {
    let config = GuardConfig::default();
    assert_eq!(evaluate(true, "/dashboard", &config), RouteDecision::Allow);
}

#[test]
fn unauthenticated_navigation_redirects_to_sign_in() {
    let config = GuardConfig::default();
    assert_eq!(
        evaluate(false, "/dashboard", &config),
        RouteDecision::Redirect("/signin".to_owned())
    );
}

#[test]
fn decision_ignores_the_target_route() {
    let config = GuardConfig::default();
    for target in ["/profile", "/create", "/edit/c1", ""] {
        assert_eq!(evaluate(true, target, &config), RouteDecision::Allow);
        assert_eq!(
            evaluate(false, target, &config),
            RouteDecision::Redirect("/signin".to_owned())
        );
    }
}

#[test]
fn redirect_honors_configured_sign_in_route() {
    let config = GuardConfig {
        sign_in_route: "/login".to_owned(),
        post_sign_out_route: "/".to_owned(),
    };
    assert_eq!(
        evaluate(false, "/profile", &config),
        RouteDecision::Redirect("/login".to_owned())
    );
}

#[test]
fn default_config_routes() {
    let config = GuardConfig::default();
    assert_eq!(config.sign_in_route, "/signin");
    assert_eq!(config.post_sign_out_route, "/");
}
