//! Explore page: the full course list with a category filter.

use leptos::prelude::*;

use crate::components::course_card::CourseCard;
use crate::net::types::Course;

/// Explore page — fetches the catalog once and filters client-side.
#[component]
pub fn ExplorePage() -> impl IntoView {
    let courses = LocalResource::new(|| crate::net::api::fetch_courses());
    let categories = LocalResource::new(|| crate::net::api::fetch_categories());
    let selected = RwSignal::new("All".to_owned());

    let filtered = move |list: Vec<Course>| -> Vec<Course> {
        let category = selected.get();
        if category == "All" {
            list
        } else {
            list.into_iter()
                .filter(|c| c.category == category)
                .collect()
        }
    };

    view! {
        <div class="explore-page">
            <header class="explore-page__header">
                <h1>"Explore Courses"</h1>
                <div class="explore-page__filters">
                    <button
                        class=move || filter_class(&selected.get(), "All")
                        on:click=move |_| selected.set("All".to_owned())
                    >
                        "All"
                    </button>
                    {move || {
                        categories
                            .get()
                            .flatten()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|c| {
                                let title = c.title.clone();
                                let label = c.title.clone();
                                view! {
                                    <button
                                        class=move || filter_class(&selected.get(), &title)
                                        on:click=move |_| selected.set(label.clone())
                                    >
                                        {c.title.clone()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </header>

            <Suspense fallback=move || view! { <p>"Loading courses..."</p> }>
                {move || {
                    courses
                        .get()
                        .map(|list| match list {
                            Some(list) => {
                                let visible = filtered(list);
                                if visible.is_empty() {
                                    view! { <p>"No courses found in this category."</p> }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="explore-page__grid">
                                            {visible
                                                .into_iter()
                                                .map(|c| view! { <CourseCard course=c/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                    .into_any()
                                }
                            }
                            None => view! { <p class="explore-page__error">"Failed to fetch courses."</p> }
                                .into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

fn filter_class(selected: &str, this: &str) -> &'static str {
    if selected == this {
        "explore-page__filter explore-page__filter--active"
    } else {
        "explore-page__filter"
    }
}
