//! Reusable view components shared across pages.

pub mod category_card;
pub mod course_card;
pub mod course_form;
pub mod footer;
pub mod navbar;
pub mod toast;
