//! Business logic and port definitions for Sketchflow.
//!
//! This crate owns the natural-language-to-diagram pipeline (prompt
//! building, model reply interpretation) and defines the traits that the
//! infrastructure layer implements. It depends only on `sketchflow-types`
//! -- never on `sketchflow-infra` or any network/filesystem crate.

pub mod diagram;
pub mod interpret;
pub mod llm;
pub mod prompt;
pub mod service;
pub mod storage;
