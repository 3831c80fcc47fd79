//! Reusable card component for course list items.

use leptos::prelude::*;

use crate::net::types::Course;

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200";

/// A clickable card representing a course in a list or grid.
#[component]
pub fn CourseCard(course: Course) -> impl IntoView {
    let href = format!("/course/{}", course.id);
    let image = course
        .image
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned());
    let price = course
        .price
        .map_or_else(|| "Free".to_owned(), |p| format!("${p:.2}"));

    view! {
        <a class="course-card" href=href>
            <img class="course-card__image" src=image alt=course.title.clone()/>
            <span class="course-card__category">{course.category.clone()}</span>
            <h3 class="course-card__title">{course.title.clone()}</h3>
            <p class="course-card__instructor">
                {format!("Instructor: {}", course.instructor)}
            </p>
            <p class="course-card__duration">{format!("Duration: {}", course.duration)}</p>
            <span class="course-card__price">{price}</span>
        </a>
    }
}
