//! Routed pages. Each module holds one page component; protected pages are
//! wrapped with the route guard in `app.rs`, not here.

pub mod categories;
pub mod category_courses;
pub mod course;
pub mod create_course;
pub mod edit_course;
pub mod explore;
pub mod landing;
pub mod profile;
pub mod signin;
pub mod signup;
