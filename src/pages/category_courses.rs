//! Courses-in-a-category page.
//!
//! The route carries the category as a slug (`/category/web-development`);
//! the catalog is fetched and filtered client-side by slug so the page
//! works from a direct link, not only from in-app navigation.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::course_card::CourseCard;
use crate::net::types::unslugify;

/// Courses filtered to one category, identified by the route slug.
#[component]
pub fn CategoryCoursesPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("name").unwrap_or_default();

    let courses = LocalResource::new(|| crate::net::api::fetch_courses());

    let heading = move || format!("Courses in \u{201c}{}\u{201d}", unslugify(&slug()));

    view! {
        <div class="category-courses-page">
            <h1>{heading}</h1>
            <Suspense fallback=move || view! { <p>"Loading courses..."</p> }>
                {move || {
                    let wanted = slug();
                    courses
                        .get()
                        .map(|list| {
                            let matching: Vec<_> = list
                                .unwrap_or_default()
                                .into_iter()
                                .filter(|c| c.category_slug() == wanted)
                                .collect();
                            if matching.is_empty() {
                                view! { <p>"No courses found in this category."</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="category-courses-page__grid">
                                        {matching
                                            .into_iter()
                                            .map(|c| view! { <CourseCard course=c/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
