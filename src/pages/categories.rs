//! Categories page: the full category list.

use leptos::prelude::*;

use crate::components::category_card::CategoryCard;

/// Categories page — a grid of category cards linking into the catalog.
#[component]
pub fn CategoriesPage() -> impl IntoView {
    let categories = LocalResource::new(|| crate::net::api::fetch_categories());

    view! {
        <div class="categories-page">
            <h1>"Categories"</h1>
            <Suspense fallback=move || view! { <p>"Loading categories..."</p> }>
                {move || {
                    categories
                        .get()
                        .map(|list| match list {
                            Some(list) if !list.is_empty() => view! {
                                <div class="categories-page__grid">
                                    {list
                                        .into_iter()
                                        .map(|c| view! { <CategoryCard category=c/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                            .into_any(),
                            Some(_) => view! { <p>"No categories yet."</p> }.into_any(),
                            None => view! {
                                <p class="categories-page__error">"Failed to fetch categories."</p>
                            }
                            .into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
