//! Infrastructure layer for Sketchflow.
//!
//! Contains implementations of the ports defined in `sketchflow-core`:
//! the OpenAI-compatible Model Gateway (reqwest), the filesystem workflow
//! and upload stores, plus config loading and credential lookup.

pub mod config;
pub mod filesystem;
pub mod llm;
pub mod secret;
