//! Course detail page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::Course;

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200";

/// Course detail page — reads the course id from the route parameter and
/// fetches the record on mount.
#[component]
pub fn CoursePage() -> impl IntoView {
    let params = use_params_map();
    let course_id = move || params.read().get("id").unwrap_or_default();

    let course = LocalResource::new(move || {
        let id = course_id();
        async move { crate::net::api::fetch_course(&id).await }
    });

    view! {
        <div class="course-page">
            <Suspense fallback=move || view! { <p>"Loading course..."</p> }>
                {move || {
                    course
                        .get()
                        .map(|found| match found {
                            Some(c) => course_detail(c).into_any(),
                            None => view! {
                                <div class="course-page__missing">
                                    <p>"Course not found."</p>
                                    <a href="/explore">"Back to courses"</a>
                                </div>
                            }
                            .into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

fn course_detail(course: Course) -> impl IntoView {
    let image = course
        .image
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned());
    let price = course
        .price
        .map_or_else(|| "Free".to_owned(), |p| format!("${p:.2}"));

    let prerequisites = (!course.prerequisites.is_empty()).then(|| {
        view! {
            <h2>"Prerequisites"</h2>
            <ul class="course-page__list">
                {course
                    .prerequisites
                    .clone()
                    .into_iter()
                    .map(|p| view! { <li>{p}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        }
    });

    let objectives = (!course.learning_objective.is_empty()).then(|| {
        view! {
            <h2>"What you will learn"</h2>
            <ul class="course-page__list">
                {course
                    .learning_objective
                    .clone()
                    .into_iter()
                    .map(|o| view! { <li>{o}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        }
    });

    view! {
        <article class="course-page__detail">
            <img class="course-page__image" src=image alt=course.title.clone()/>
            <div class="course-page__body">
                <span class="course-page__category">{course.category.clone()}</span>
                <h1>{course.title.clone()}</h1>
                <p class="course-page__description">{course.description.clone()}</p>
                <dl class="course-page__facts">
                    <dt>"Instructor"</dt>
                    <dd>{course.instructor.clone()}</dd>
                    <dt>"Duration"</dt>
                    <dd>{course.duration.clone()}</dd>
                    <dt>"Price"</dt>
                    <dd>{price}</dd>
                </dl>

                {prerequisites}
                {objectives}
            </div>
        </article>
    }
}
