//! REST helpers for the account and course services.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning `None`/`Err` since the backend is only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Reads return `Option` so list and detail pages degrade to their empty
//! states without crashing. Mutations return `Result<_, ApiError>` so forms
//! can distinguish an expired session (which forces a sign-out) from other
//! failures. Token validity is never checked eagerly: a 401/403 from any
//! authenticated call is the signal.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{Category, Course, CourseInput, RegisterRequest, SignInRequest, SignInResponse};

/// Base URL of the account service.
pub const AUTH_API: &str = "https://blog-hqx2.onrender.com";

/// Base URL of the course/category service.
pub const COURSE_API: &str = "https://blog-1rng.onrender.com";

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("session expired or not authorized")]
    Unauthorized,
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-success HTTP status. 401/403 means the bearer token is no
    /// longer valid and the caller should force a sign-out.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::Unauthorized,
            other => Self::Status(other),
        }
    }
}

/// Verify credentials against the account service.
///
/// On success the returned `{token, user}` pair is what the caller commits
/// to the auth store; this function does not touch session state itself.
///
/// # Errors
///
/// Fails on network errors, non-success statuses, or an unparsable body.
pub async fn sign_in(email: &str, password: &str) -> Result<SignInResponse, ApiError> {
    let body = SignInRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    };
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&format!("{AUTH_API}/user/login"))
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::from_status(resp.status()));
        }
        resp.json::<SignInResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = body;
        Err(ApiError::Network("not available off the browser".to_owned()))
    }
}

/// Register a new account via `POST /user/register`.
///
/// # Errors
///
/// Fails on network errors or a non-success status.
pub async fn register(name: &str, email: &str, password: &str) -> Result<(), ApiError> {
    let body = RegisterRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    };
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&format!("{AUTH_API}/user/register"))
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::from_status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = body;
        Err(ApiError::Network("not available off the browser".to_owned()))
    }
}

/// Fetch the full course list. Returns `None` on any failure or off the
/// browser.
pub async fn fetch_courses() -> Option<Vec<Course>> {
    get_json(&format!("{COURSE_API}/mycourse")).await
}

/// Fetch a single course by id.
pub async fn fetch_course(id: &str) -> Option<Course> {
    get_json(&format!("{COURSE_API}/mycourse/{id}")).await
}

/// Fetch the courses created by a user. Cache-busted with a timestamp
/// because the backend caches aggressively after edits.
pub async fn fetch_user_courses(user_id: &str) -> Option<Vec<Course>> {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::now() as u64;
        get_json(&format!("{COURSE_API}/mycourse/{user_id}?t={now}")).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = user_id;
        None
    }
}

/// Fetch the category list.
pub async fn fetch_categories() -> Option<Vec<Category>> {
    get_json(&format!("{COURSE_API}/category")).await
}

/// Create a course via `POST /mycourse/create` with a bearer token.
///
/// # Errors
///
/// `ApiError::Unauthorized` when the token is no longer accepted; network,
/// status, and decode failures otherwise.
pub async fn create_course(input: &CourseInput, token: &str) -> Result<Course, ApiError> {
    send_course(
        Method::Post,
        &format!("{COURSE_API}/mycourse/create"),
        input,
        token,
    )
    .await
}

/// Update a course via `PUT /mycourse/{id}` with a bearer token.
///
/// # Errors
///
/// Same taxonomy as [`create_course`].
pub async fn update_course(id: &str, input: &CourseInput, token: &str) -> Result<Course, ApiError> {
    send_course(Method::Put, &format!("{COURSE_API}/mycourse/{id}"), input, token).await
}

/// Delete a course via `DELETE /mycourse/{id}` with a bearer token.
///
/// # Errors
///
/// `ApiError::Unauthorized` when the token is no longer accepted; network
/// and status failures otherwise.
pub async fn delete_course(id: &str, token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::delete(&format!("{COURSE_API}/mycourse/{id}"))
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::from_status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, token);
        Err(ApiError::Network("not available off the browser".to_owned()))
    }
}

enum Method {
    Post,
    Put,
}

async fn send_course(
    method: Method,
    url: &str,
    input: &CourseInput,
    token: &str,
) -> Result<Course, ApiError> {
    #[cfg(feature = "csr")]
    {
        let builder = match method {
            Method::Post => gloo_net::http::Request::post(url),
            Method::Put => gloo_net::http::Request::put(url),
        };
        let resp = builder
            .header("Authorization", &format!("Bearer {token}"))
            .json(input)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::from_status(resp.status()));
        }
        resp.json::<Course>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (method, url, input, token);
        Err(ApiError::Network("not available off the browser".to_owned()))
    }
}

#[cfg(feature = "csr")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Option<T> {
    let resp = gloo_net::http::Request::get(url).send().await.ok()?;
    if !resp.ok() {
        log::debug!("GET {url} failed with status {}", resp.status());
        return None;
    }
    resp.json::<T>().await.ok()
}

#[cfg(not(feature = "csr"))]
async fn get_json<T>(url: &str) -> Option<T> {
    let _ = url;
    None
}
