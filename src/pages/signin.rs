//! Sign-in page: credential form that commits the session on success.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

use crate::components::toast::{Toast, ToastMessage};
#[cfg(feature = "csr")]
use crate::state::auth::AuthState;
use crate::util::forms;
#[cfg(feature = "csr")]
use crate::util::storage::BrowserStorage;

/// Sign-in page. Credential verification happens against the account
/// service; on success the verified `{token, user}` pair is committed to
/// the auth store (the commit step only) and the user is sent home.
#[component]
pub fn SignInPage() -> impl IntoView {
    #[cfg(feature = "csr")]
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let toast = RwSignal::new(None::<ToastMessage>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_value = email.get();
        let password_value = password.get();
        email_error.set(forms::validate_email(&email_value));
        password_error.set(forms::validate_password(&password_value, 6));
        if email_error.get().is_some() || password_error.get().is_some() {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_in(&email_value, &password_value).await {
                    Ok(resp) => {
                        let mut commit = Ok(());
                        auth.update(|a| {
                            commit = a.sign_in(&BrowserStorage, resp.token, resp.user);
                        });
                        match commit {
                            Ok(()) => {
                                toast.set(Some(ToastMessage::success("Login successful!")));
                                navigate("/", NavigateOptions::default());
                            }
                            Err(err) => {
                                log::error!("sign-in commit rejected: {err}");
                                toast.set(Some(ToastMessage::error("Login failed")));
                            }
                        }
                    }
                    Err(err) => {
                        toast.set(Some(ToastMessage::error(err.to_string())));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <span class="auth-page__logo">"ED"</span>
                <h2>"Sign in to your account"</h2>
                <p class="auth-page__alt">
                    "OR " <a href="/signup">"Create your account"</a>
                </p>

                <form class="auth-page__form" on:submit=submit>
                    <label class="auth-page__label">
                        "Email"
                        <input
                            class="auth-page__input"
                            type="email"
                            placeholder="Email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    {move || {
                        email_error
                            .get()
                            .map(|e| view! { <div class="auth-page__error">{e}</div> })
                    }}

                    <label class="auth-page__label">
                        "Password"
                        <input
                            class="auth-page__input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    {move || {
                        password_error
                            .get()
                            .map(|e| view! { <div class="auth-page__error">{e}</div> })
                    }}

                    <button class="btn btn--primary auth-page__submit" type="submit">
                        "Log in"
                    </button>
                </form>

                <Toast message=toast/>
            </div>

            <a class="auth-page__back" href="/">"← Back to landing page"</a>
        </div>
    }
}
