//! HTTP request handlers.

pub mod interpret;
pub mod upload;
pub mod workflow;
