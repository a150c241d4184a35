//! Workflow CLI commands: list, show.

use anyhow::{Context, Result};
use console::style;

use sketchflow_core::storage::workflow_store::WorkflowStore;
use sketchflow_types::error::StorageError;

use crate::state::AppState;

/// List saved workflows.
pub async fn list_workflows(state: &AppState, json: bool) -> Result<()> {
    let names = state.workflow_store.list().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    if names.is_empty() {
        println!();
        println!(
            "  {} No workflows saved in {}",
            style("i").blue().bold(),
            style(state.workflow_store.dir().display()).dim()
        );
        println!();
        return Ok(());
    }

    println!();
    for name in &names {
        println!("  {}", style(name).cyan());
    }
    println!();
    println!("  {}", style(format!("{} workflow(s)", names.len())).dim());
    println!();
    Ok(())
}

/// Print a saved workflow, pretty-printed when it is valid JSON.
pub async fn show_workflow(state: &AppState, name: &str) -> Result<()> {
    let data = match state.workflow_store.load(name).await {
        Ok(data) => data,
        Err(StorageError::NotFound(_)) => anyhow::bail!("Workflow not found: {name}"),
        Err(e) => return Err(e).with_context(|| format!("failed to load workflow '{name}'")),
    };

    match serde_json::from_str::<serde_json::Value>(&data) {
        Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Err(_) => println!("{data}"),
    }
    Ok(())
}
