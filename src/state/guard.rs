#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;

/// Redirect destinations for the guard and for sign-out.
///
/// Earlier revisions of the app hard-coded these inconsistently (sign-out
/// landed on `/` in some handlers and `/login` in others), so both routes
/// are caller configuration with sensible defaults. Provided via context
/// next to the auth signal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardConfig {
    /// Where denied navigation attempts are sent.
    pub sign_in_route: String,
    /// Where callers navigate after committing a sign-out.
    pub post_sign_out_route: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            sign_in_route: "/signin".to_owned(),
            post_sign_out_route: "/".to_owned(),
        }
    }
}

/// Outcome of one guard evaluation: render the target or go to sign-in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(String),
}

/// Decide whether a navigation to `target` may render.
///
/// Pure function over the current authentication flag: no storage or
/// network access, evaluated synchronously before the protected view's
/// first paint. Each navigation attempt resolves to exactly one decision;
/// there is no retry inside the guard — the user retriggers evaluation by
/// navigating again, typically after signing in.
pub fn evaluate(is_authenticated: bool, target: &str, config: &GuardConfig) -> RouteDecision {
    if is_authenticated {
        RouteDecision::Allow
    } else {
        log::debug!("denied navigation to {target}; redirecting to sign-in");
        RouteDecision::Redirect(config.sign_in_route.clone())
    }
}

/// Wraps a protected route's view.
///
/// Evaluates [`evaluate`] against the current location at render time and
/// shows either the children or a redirect to the configured sign-in route.
/// The decision is made before the protected content's first paint, so a
/// signed-out visitor never sees a flash of the protected view. Auth store
/// mutations re-run the evaluation through the signal graph.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<GuardConfig>();
    let location = use_location();

    move || {
        let decision = evaluate(
            auth.get().is_authenticated(),
            &location.pathname.get(),
            &config,
        );
        match decision {
            RouteDecision::Allow => children().into_any(),
            RouteDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
        }
    }
}
