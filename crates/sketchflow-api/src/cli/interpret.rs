//! `sketchflow interpret` - run the pipeline once from the terminal.

use anyhow::Result;
use console::style;

use sketchflow_core::diagram::{parse_actions, Diagram};
use sketchflow_types::diagram::DiagramAction;
use sketchflow_types::interpret::InterpretationOutcome;

use crate::state::AppState;

/// Interpret `message` and print the outcome.
///
/// Structured replies are re-validated as an action list and applied to an
/// empty diagram, so the summary shows what a client would actually draw.
pub async fn run(state: &AppState, message: &str, json: bool) -> Result<()> {
    let outcome = state.interpret_service.interpret(message).await?;

    if json {
        let value = match &outcome {
            InterpretationOutcome::Success(value) => {
                serde_json::json!({"outcome": outcome.label(), "value": value})
            }
            InterpretationOutcome::RateLimited(text) | InterpretationOutcome::RawFallback(text) => {
                serde_json::json!({"outcome": outcome.label(), "text": text})
            }
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match outcome {
        InterpretationOutcome::Success(value) => match parse_actions(&value) {
            Ok(list) => {
                println!();
                println!(
                    "  {} {} action(s)",
                    style("✓").green().bold(),
                    list.len()
                );
                for action in &list.actions {
                    println!("    {}", describe(action));
                }

                let mut diagram = Diagram::new();
                let summary = diagram.apply(&list);
                println!();
                println!(
                    "  {}",
                    style(format!(
                        "{} node(s), {} edge(s) added, {} skipped",
                        summary.nodes_added, summary.edges_added, summary.skipped
                    ))
                    .dim()
                );
                println!();
            }
            Err(err) => {
                println!(
                    "  {} Reply is not a valid action list: {err}",
                    style("!").yellow().bold()
                );
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
        },
        InterpretationOutcome::RateLimited(text) => {
            println!("  {} {}", style("⏳").bold(), style(text).yellow());
        }
        InterpretationOutcome::RawFallback(text) => {
            println!(
                "  {} Model did not return structured data:",
                style("!").yellow().bold()
            );
            println!("{text}");
        }
    }

    Ok(())
}

fn describe(action: &DiagramAction) -> String {
    match action {
        DiagramAction::AddNode {
            label,
            component_type,
        } => format!(
            "{} node {} ({})",
            style("+").green(),
            style(label).cyan(),
            component_type
        ),
        DiagramAction::AddEdge {
            source,
            target,
            label,
        } => {
            let suffix = label
                .as_deref()
                .map(|l| format!(" [{l}]"))
                .unwrap_or_default();
            format!(
                "{} edge {} → {}{suffix}",
                style("+").green(),
                style(source).cyan(),
                style(target).cyan()
            )
        }
    }
}
