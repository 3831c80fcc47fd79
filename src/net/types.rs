//! Wire types shared with the course-catalog backend.
//!
//! The backend is a Mongo-backed service: record ids arrive as `_id` and
//! field names are camelCase. Serde renames keep the Rust side idiomatic.
//! Everything except ids is defaulted on deserialize so a sparse record
//! still renders instead of failing the whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user record, as returned by the account service and as
/// persisted alongside the session token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// A course catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructor: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub learning_objective: Vec<String>,
    #[serde(default, alias = "userId")]
    pub created_by: Option<String>,
}

/// A course category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Payload for `POST /user/login`.
#[derive(Clone, Debug, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Response from a successful credential verification: the pair the auth
/// store commits as the session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SignInResponse {
    pub token: String,
    pub user: User,
}

/// Payload for `POST /user/register`.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Course fields for create and update calls; the backend assigns the id.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInput {
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub duration: String,
    pub category: String,
    pub image: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prerequisites: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub learning_objective: Vec<String>,
}

impl Course {
    /// URL-safe slug of the course category, used for category routes.
    pub fn category_slug(&self) -> String {
        slugify(&self.category)
    }
}

impl Category {
    /// URL-safe slug of the category title.
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }
}

/// Lowercase a display name and replace whitespace runs with dashes.
pub fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// The inverse of [`slugify`] for display purposes: dashes back to spaces.
pub fn unslugify(slug: &str) -> String {
    slug.replace('-', " ")
}
