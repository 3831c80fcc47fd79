//! Top navigation bar with brand, catalog links, and session controls.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::guard::GuardConfig;
use crate::util::storage::BrowserStorage;

/// Navigation bar. The session controls flip between "Sign in" and the
/// current user's name with a sign-out button. Sign-out commits the state
/// mutation first and navigates afterward as a separate step, so the
/// signed-out state is never observed mid-redirect.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<GuardConfig>();
    let navigate = use_navigate();

    let user_name = move || {
        auth.get()
            .current_user()
            .map(|u| u.name.clone())
            .unwrap_or_default()
    };

    let on_sign_out = move |_| {
        auth.update(|a| a.sign_out(&BrowserStorage));
        navigate(&config.post_sign_out_route, NavigateOptions::default());
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">
                <span class="navbar__logo">"ED"</span>
                "EdCourse"
            </a>
            <nav class="navbar__links">
                <a href="/explore">"Explore"</a>
                <a href="/categories">"Categories"</a>
                <Show when=move || auth.get().is_authenticated()>
                    <a href="/create">"Add Course"</a>
                    <a href="/profile">"Profile"</a>
                </Show>
            </nav>
            <div class="navbar__session">
                <Show
                    when=move || auth.get().is_authenticated()
                    fallback=|| {
                        view! { <a class="navbar__signin" href="/signin">"Sign in"</a> }
                    }
                >
                    <span class="navbar__user">{user_name}</span>
                    <button class="navbar__signout" on:click=on_sign_out.clone()>
                        "Sign out"
                    </button>
                </Show>
            </div>
        </header>
    }
}
