//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so components depend on small focused models:
//! `auth` owns the session, `guard` decides route access. The auth state is
//! a single injected instance held in an `RwSignal` provided via context,
//! never ambient global state, so it can be tested in isolation against an
//! in-memory storage adapter.

pub mod auth;
pub mod guard;
