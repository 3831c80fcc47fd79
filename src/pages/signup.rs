//! Sign-up page: account registration form.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

use crate::components::toast::{Toast, ToastMessage};
use crate::util::forms;

/// Sign-up page. Registration does not create a session: after a success
/// toast the user is sent to the sign-in page to verify their credentials.
#[component]
pub fn SignUpPage() -> impl IntoView {
    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let name_error = RwSignal::new(None::<String>);
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let toast = RwSignal::new(None::<ToastMessage>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let name_value = name.get();
        let email_value = email.get();
        let password_value = password.get();
        name_error.set(forms::validate_name(&name_value));
        email_error.set(forms::validate_email(&email_value));
        password_error.set(forms::validate_password(&password_value, 8));
        if name_error.get().is_some()
            || email_error.get().is_some()
            || password_error.get().is_some()
        {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&name_value, &email_value, &password_value).await {
                    Ok(()) => {
                        toast.set(Some(ToastMessage::success("User Registered Successfully!")));
                        // Let the toast land before moving to sign-in.
                        gloo_timers::future::TimeoutFuture::new(1_200).await;
                        navigate("/signin", NavigateOptions::default());
                    }
                    Err(err) => {
                        toast.set(Some(ToastMessage::error(err.to_string())));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (name_value, email_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <span class="auth-page__logo">"ED"</span>
                <h2>"Create your account here!"</h2>
                <p class="auth-page__alt">
                    "OR " <a href="/signin">"Sign in instead"</a>
                </p>

                <form class="auth-page__form" on:submit=submit>
                    <label class="auth-page__label">
                        "Full Name"
                        <input
                            class="auth-page__input"
                            type="text"
                            placeholder="Full Name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    {move || {
                        name_error
                            .get()
                            .map(|e| view! { <div class="auth-page__error">{e}</div> })
                    }}

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
                        "Sign up"
                    </button>
                </form>

                <Toast message=toast/>
            </div>

            <a class="auth-page__back" href="/">"← Back to landing page"</a>
        </div>
    }
}
