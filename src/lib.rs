//! # edcourse
//!
//! Leptos + WASM front end for the EdCourse course catalog. Replaces the
//! React + Vite client with a Rust-native UI layer: sign-up/sign-in,
//! course and category browsing, course create/edit, and a profile view,
//! all backed by the remote REST API.
//!
//! The structural core is the client-side session store
//! ([`state::auth::AuthState`]) and the route-access guard
//! ([`state::guard`]); pages and components are thin views over the
//! [`net::api`] helpers.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
