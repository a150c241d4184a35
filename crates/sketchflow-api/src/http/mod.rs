//! HTTP layer for Sketchflow.
//!
//! Axum router serving the interpretation endpoint, the workflow store and
//! node uploads, with permissive CORS for the browser client.

pub mod error;
pub mod handlers;
pub mod router;

#[cfg(test)]
pub(crate) mod test_support;
