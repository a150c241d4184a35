//! Shared domain types for Sketchflow.
//!
//! This crate contains the data shapes that flow through the
//! natural-language-to-diagram pipeline: diagram actions, model prompts,
//! interpretation outcomes, stored workflows, configuration, and the
//! associated error types.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod config;
pub mod diagram;
pub mod error;
pub mod interpret;
pub mod llm;
pub mod workflow;
