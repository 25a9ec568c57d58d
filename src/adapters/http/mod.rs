//! HTTP inbound adapter (axum). Serves the action list as JSON-API documents.

pub mod routes;
pub mod view;

pub use routes::{router, serve};
