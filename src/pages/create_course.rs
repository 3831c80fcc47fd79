//! Create-course page. Protected: the router wraps it with the route guard.

use leptos::prelude::*;
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

/// Create-course page — a blank [`CourseForm`] that posts to the catalog.
/// A 401 on submit means the persisted token went stale while the page was
/// open: the session is force-signed-out and the user lands on sign-in.
#[component]
pub fn CreateCoursePage() -> impl IntoView {
    #[cfg(feature = "csr")]
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "csr")]
    let config = expect_context::<GuardConfig>();
    #[cfg(feature = "csr")]
    let navigate = use_navigate();
    let toast = RwSignal::new(None::<ToastMessage>);

    let on_submit = Callback::new(move |input: CourseInput| {
        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let Some(token) = auth.get_untracked().token().map(ToOwned::to_owned) else {
                    return;
                };
                match crate::net::api::create_course(&input, &token).await {
                    Ok(course) => {
                        toast.set(Some(ToastMessage::success("Course created!")));
                        navigate(&format!("/course/{}", course.id), NavigateOptions::default());
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
            <h1>"Add a Course"</h1>
            <CourseForm initial=None submit_label="Create Course" on_submit=on_submit/>
            <Toast message=toast/>
        </div>
    }
}
