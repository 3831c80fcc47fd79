//! Landing page: hero, catalog stats, featured courses, and top categories.

use leptos::prelude::*;

use crate::components::category_card::CategoryCard;
use crate::components::course_card::CourseCard;

const STATS: [(&str, &str); 4] = [
    ("120+", "Courses"),
    ("25,000+", "Students"),
    ("120+", "Instructors"),
    ("25+", "Categories"),
];

/// Landing page — hero section plus a featured slice of the catalog.
#[component]
pub fn LandingPage() -> impl IntoView {
    let courses = LocalResource::new(|| crate::net::api::fetch_courses());
    let categories = LocalResource::new(|| crate::net::api::fetch_categories());

    view! {
        <div class="landing-page">
            <section class="landing-page__hero">
                <div class="landing-page__copy">
                    <h1>
                        "Unlock Your Potential with "
                        <span class="landing-page__accent">"Expert-Led"</span>
                        " Courses"
                    </h1>
                    <p>
                        "Discover thousands of courses across various domains taught by \
                         industry experts and advance your career with in-demand skills."
                    </p>
                    <div class="landing-page__actions">
                        <a class="btn btn--primary" href="/explore">"Explore Courses"</a>
                        <a class="btn" href="/categories">"View Categories"</a>
                    </div>
                    <div class="landing-page__stats">
                        {STATS
                            .into_iter()
                            .map(|(value, label)| {
                                view! {
                                    <div class="landing-page__stat">
                                        <p class="landing-page__stat-value">{value}</p>
                                        <p class="landing-page__stat-label">{label}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </section>

            <section class="landing-page__featured">
                <h2>"Featured Courses"</h2>
                <Suspense fallback=move || view! { <p>"Loading courses..."</p> }>
                    {move || {
                        courses
                            .get()
                            .map(|list| {
                                let featured: Vec<_> =
                                    list.unwrap_or_default().into_iter().take(3).collect();
                                if featured.is_empty() {
                                    view! { <p>"No courses available yet."</p> }.into_any()
                                } else {
                                    view! {
                                        <div class="landing-page__grid">
                                            {featured
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
            </section>

            <section class="landing-page__categories">
                <h2>"Top Categories"</h2>
                <Suspense fallback=move || view! { <p>"Loading categories..."</p> }>
                    {move || {
                        categories
                            .get()
                            .map(|list| {
                                view! {
                                    <div class="landing-page__grid">
                                        {list
                                            .unwrap_or_default()
                                            .into_iter()
                                            .take(3)
                                            .map(|c| view! { <CategoryCard category=c/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
