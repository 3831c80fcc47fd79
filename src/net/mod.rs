//! Network layer: wire types shared with the REST backend and the
//! gloo-net request helpers.

pub mod api;
pub mod types;
