//! Shared course form used by the create and edit pages.
//!
//! Owns field state and client-side validation; the hosting page decides
//! what to do with a valid [`CourseInput`] (create vs. update) and handles
//! the API call and its failure modes.

#[cfg(test)]
#[path = "course_form_test.rs"]
mod course_form_test;

use leptos::prelude::*;

use crate::net::types::{Course, CourseInput};
use crate::util::forms;

/// Course form fields with inline validation. `initial` pre-fills the form
/// for editing; `on_submit` fires only when every field validates.
#[component]
pub fn CourseForm(
    initial: Option<Course>,
    submit_label: &'static str,
    on_submit: Callback<CourseInput>,
) -> impl IntoView {
    let title = RwSignal::new(initial.as_ref().map(|c| c.title.clone()).unwrap_or_default());
    let description = RwSignal::new(
        initial
            .as_ref()
            .map(|c| c.description.clone())
            .unwrap_or_default(),
    );
    let instructor = RwSignal::new(
        initial
            .as_ref()
            .map(|c| c.instructor.clone())
            .unwrap_or_default(),
    );
    let duration = RwSignal::new(
        initial
            .as_ref()
            .map(|c| c.duration.clone())
            .unwrap_or_default(),
    );
    let category = RwSignal::new(
        initial
            .as_ref()
            .map(|c| c.category.clone())
            .unwrap_or_default(),
    );
    let image = RwSignal::new(
        initial
            .as_ref()
            .and_then(|c| c.image.clone())
            .unwrap_or_default(),
    );
    let prerequisites = RwSignal::new(entries(
        initial
            .as_ref()
            .map(|c| c.prerequisites.clone())
            .unwrap_or_default(),
    ));
    let objectives = RwSignal::new(entries(
        initial
            .as_ref()
            .map(|c| c.learning_objective.clone())
            .unwrap_or_default(),
    ));

    let title_error = RwSignal::new(None::<String>);
    let description_error = RwSignal::new(None::<String>);
    let instructor_error = RwSignal::new(None::<String>);
    let duration_error = RwSignal::new(None::<String>);
    let category_error = RwSignal::new(None::<String>);
    let image_error = RwSignal::new(None::<String>);

    // Category options for the select, fetched on mount.
    let categories = LocalResource::new(|| crate::net::api::fetch_categories());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        title_error.set(forms::validate_course_title(&title.get()));
        description_error.set(forms::validate_course_description(&description.get()));
        instructor_error.set(forms::validate_instructor(&instructor.get()));
        duration_error.set(forms::validate_duration(&duration.get()));
        category_error.set(forms::validate_category(&category.get()));
        image_error.set(forms::validate_image_url(&image.get()));

        let invalid = title_error.get().is_some()
            || description_error.get().is_some()
            || instructor_error.get().is_some()
            || duration_error.get().is_some()
            || category_error.get().is_some()
            || image_error.get().is_some();
        if invalid {
            return;
        }

        on_submit.run(CourseInput {
            title: title.get().trim().to_owned(),
            description: description.get().trim().to_owned(),
            instructor: instructor.get().trim().to_owned(),
            duration: duration.get().trim().to_owned(),
            category: category.get(),
            image: image.get().trim().to_owned(),
            prerequisites: collect(&prerequisites.get()),
            learning_objective: collect(&objectives.get()),
        });
    };

    view! {
        <form class="course-form" on:submit=submit>
            <label class="course-form__label">
                "Course Title"
                <input
                    class="course-form__input"
                    type="text"
                    placeholder="Full Stack Web Development"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </label>
            <FieldError error=title_error/>

            <label class="course-form__label">
                "Description"
                <textarea
                    class="course-form__input"
                    placeholder="Describe what the course covers..."
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <FieldError error=description_error/>

            <label class="course-form__label">
                "Instructor"
                <input
                    class="course-form__input"
                    type="text"
                    placeholder="Jane Smith"
                    prop:value=move || instructor.get()
                    on:input=move |ev| instructor.set(event_target_value(&ev))
                />
            </label>
            <FieldError error=instructor_error/>

            <label class="course-form__label">
                "Course Duration"
                <input
                    class="course-form__input"
                    type="text"
                    placeholder="8 weeks"
                    prop:value=move || duration.get()
                    on:input=move |ev| duration.set(event_target_value(&ev))
                />
            </label>
            <FieldError error=duration_error/>

            <label class="course-form__label">
                "Category"
                <select
                    class="course-form__input"
                    prop:value=move || category.get()
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    <option value="">"Select a category"</option>
                    {move || {
                        categories
                            .get()
                            .flatten()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|c| view! { <option value=c.title.clone()>{c.title.clone()}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>
            <FieldError error=category_error/>

            <label class="course-form__label">
                "Image URL"
                <input
                    class="course-form__input"
                    type="url"
                    placeholder="https://example.com/course.png"
                    prop:value=move || image.get()
                    on:input=move |ev| image.set(event_target_value(&ev))
                />
            </label>
            <FieldError error=image_error/>

            <StringListEditor label="Prerequisites" entries=prerequisites/>
            <StringListEditor label="Learning Objectives" entries=objectives/>

            <button class="btn btn--primary course-form__submit" type="submit">
                {submit_label}
            </button>
        </form>
    }
}

/// Inline validation message under a field.
#[component]
fn FieldError(error: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|e| view! { <div class="course-form__error">{e}</div> })
    }
}

/// Growable list of free-text entries (prerequisites, objectives).
#[component]
fn StringListEditor(
    label: &'static str,
    entries: RwSignal<Vec<RwSignal<String>>>,
) -> impl IntoView {
    let add = move |_| entries.update(|e| e.push(RwSignal::new(String::new())));
    let remove_last = move |_| {
        entries.update(|e| {
            if e.len() > 1 {
                e.pop();
            }
        });
    };

    view! {
        <fieldset class="course-form__list">
            <legend>{label}</legend>
            <For
                each={move || entries.get().into_iter().enumerate().collect::<Vec<_>>()}
                key={|(i, _)| *i}
                children={move |(_, entry): (usize, RwSignal<String>)| {
                    view! {
                        <input
                            class="course-form__input"
                            type="text"
                            prop:value=move || entry.get()
                            on:input=move |ev| entry.set(event_target_value(&ev))
                        />
                    }
                }}
            />
            <div class="course-form__list-actions">
                <button type="button" class="btn" on:click=add>"+ Add"</button>
                <button type="button" class="btn" on:click=remove_last>"- Remove"</button>
            </div>
        </fieldset>
    }
}

fn entries(values: Vec<String>) -> Vec<RwSignal<String>> {
    if values.is_empty() {
        vec![RwSignal::new(String::new())]
    } else {
        values.into_iter().map(RwSignal::new).collect()
    }
}

fn collect(entries: &[RwSignal<String>]) -> Vec<String> {
    entries
        .iter()
        .map(|e| e.get().trim().to_owned())
        .filter(|e| !e.is_empty())
        .collect()
}
