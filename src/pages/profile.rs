//! Profile page: the signed-in user's identity and their courses.
//! Protected: the router wraps it with the route guard.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

use crate::components::toast::{Toast, ToastMessage};
#[cfg(feature = "csr")]
use crate::net::api::ApiError;
use crate::net::types::Course;
use crate::state::auth::AuthState;
#[cfg(feature = "csr")]
use crate::state::guard::GuardConfig;
#[cfg(feature = "csr")]
use crate::util::storage::BrowserStorage;

/// Profile page — reads the auth store for identity display and fetches the
/// user's own courses, with edit and delete actions per course.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "csr")]
    let config = expect_context::<GuardConfig>();
    #[cfg(feature = "csr")]
    let navigate = use_navigate();
    let toast = RwSignal::new(None::<ToastMessage>);

    let user_id = move || {
        auth.get()
            .current_user()
            .map(|u| u.id.clone())
            .unwrap_or_default()
    };

    let courses = LocalResource::new(move || {
        let id = user_id();
        async move {
            if id.is_empty() {
                None
            } else {
                crate::net::api::fetch_user_courses(&id).await
            }
        }
    });

    let on_delete = Callback::new(move |course_id: String| {
        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let Some(token) = auth.get_untracked().token().map(ToOwned::to_owned) else {
                    return;
                };
                match crate::net::api::delete_course(&course_id, &token).await {
                    Ok(()) => {
                        toast.set(Some(ToastMessage::success("Course deleted successfully")));
                        courses.refetch();
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
            let _ = course_id;
        }
    });

    let identity = move || {
        auth.get().current_user().cloned().map(|user| {
            let avatar = match user.avatar_url.clone() {
                Some(url) => view! {
                    <img class="profile-page__avatar" src=url alt=user.name.clone()/>
                }
                .into_any(),
                None => view! {
                    <div class="profile-page__initials">{initials(&user.name)}</div>
                }
                .into_any(),
            };
            view! {
                <div class="profile-page__identity">
                    {avatar}
                    <div class="profile-page__who">
                        <h2>{user.name.clone()}</h2>
                        <p>{user.email.clone()}</p>
                        <p class="profile-page__since">
                            {format!("Member since {}", user.created_at)}
                        </p>
                    </div>
                </div>
            }
        })
    };

    view! {
        <div class="profile-page">
            <h1>"User Profile"</h1>
            {identity}

            <h2>"My Courses"</h2>
            <Suspense fallback=move || view! { <p>"Loading courses..."</p> }>
                {move || {
                    courses
                        .get()
                        .map(|list| {
                            let mine = list.unwrap_or_default();
                            if mine.is_empty() {
                                view! { <p>"You have not created any courses yet."</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="profile-page__courses">
                                        {mine
                                            .into_iter()
                                            .map(|c| owned_course_row(c, on_delete))
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                .into_any()
                            }
                        })
                }}
            </Suspense>

            <Toast message=toast/>
        </div>
    }
}

fn owned_course_row(course: Course, on_delete: Callback<String>) -> impl IntoView {
    let edit_href = format!("/edit/{}", course.id);
    let delete_id = course.id.clone();

    view! {
        <div class="profile-page__course">
            <div class="profile-page__course-info">
                <h3>{course.title.clone()}</h3>
                <p>{course.category.clone()}</p>
            </div>
            <div class="profile-page__course-actions">
                <a class="btn" href=edit_href>"Edit"</a>
                <button
                    class="btn btn--danger"
                    on:click=move |_| on_delete.run(delete_id.clone())
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}

/// Uppercase initials of the first two name words, for the avatar fallback.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
