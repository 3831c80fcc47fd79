//! Edit-course page. Protected: the router wraps it with the route guard.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

use crate::components::course_form::CourseForm;
use crate::components::toast::{Toast, ToastMessage};
use crate::net::types::CourseInput;
#[cfg(feature = "csr")]
use crate::net::api::ApiError;
#[cfg(feature = "csr")]
use crate::state::auth::AuthState;
#[cfg(feature = "csr")]
use crate::state::guard::GuardConfig;
#[cfg(feature = "csr")]
use crate::util::storage::BrowserStorage;

/// Edit-course page — loads the existing record into a [`CourseForm`] and
/// submits the changes as a `PUT`. Stale tokens force a sign-out, the same
/// as on create.
#[component]
pub fn EditCoursePage() -> impl IntoView {
    #[cfg(feature = "csr")]
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "csr")]
    let config = expect_context::<GuardConfig>();
    #[cfg(feature = "csr")]
    let navigate = use_navigate();
    let toast = RwSignal::new(None::<ToastMessage>);

    let params = use_params_map();
    let course_id = move || params.read().get("id").unwrap_or_default();

    let course = LocalResource::new(move || {
        let id = course_id();
        async move { crate::net::api::fetch_course(&id).await }
    });

    let on_submit = Callback::new(move |input: CourseInput| {
        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            let config = config.clone();
            let id = course_id();
            leptos::task::spawn_local(async move {
                let Some(token) = auth.get_untracked().token().map(ToOwned::to_owned) else {
                    return;
                };
                match crate::net::api::update_course(&id, &input, &token).await {
                    Ok(updated) => {
                        toast.set(Some(ToastMessage::success("Course updated!")));
                        navigate(&format!("/course/{}", updated.id), NavigateOptions::default());
                    }
                    Err(ApiError::Unauthorized) => {
                        auth.update(|a| a.sign_out(&BrowserStorage));
                        navigate(&config.sign_in_route, NavigateOptions::default());
                    }
                    Err(err) => {
                        toast.set(Some(ToastMessage::error(err.to_string())));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = input;
        }
    });

    view! {
        <div class="course-form-page">
            <h1>"Edit Course"</h1>
            <Suspense fallback=move || view! { <p>"Loading course..."</p> }>
                {move || {
                    course
                        .get()
                        .map(|found| match found {
                            Some(c) => view! {
                                <CourseForm
                                    initial=Some(c)
                                    submit_label="Save Changes"
                                    on_submit=on_submit
                                />
                            }
                            .into_any(),
                            None => view! {
                                <div class="course-form-page__missing">
                                    <p>"Course not found."</p>
                                    <a href="/explore">"Back to courses"</a>
                                </div>
                            }
                            .into_any(),
                        })
                }}
            </Suspense>
            <Toast message=toast/>
        </div>
    }
}
