//! Reusable card component for category list items.

use leptos::prelude::*;

use crate::net::types::Category;

/// A clickable card linking to the courses of one category.
#[component]
pub fn CategoryCard(category: Category) -> impl IntoView {
    let href = format!("/category/{}", category.slug());

    view! {
        <a class="category-card" href=href>
            <h3 class="category-card__title">{category.title.clone()}</h3>
            <p class="category-card__description">{category.description.clone()}</p>
        </a>
    }
}
