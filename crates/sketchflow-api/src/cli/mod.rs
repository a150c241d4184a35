//! CLI command definitions for the `sketchflow` binary.

pub mod interpret;
pub mod workflow;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Turn plain-English descriptions into architecture diagram actions.
#[derive(Parser)]
#[command(name = "sketchflow", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding config.toml, workflows/ and uploads/.
    #[arg(long, global = true, env = "SKETCHFLOW_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Only log errors (command results are still printed).
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit log lines as JSON.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Export spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server.
    Serve {
        /// Port to listen on (overrides config.toml).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config.toml).
        #[arg(long)]
        host: Option<String>,
    },

    /// Interpret one message and print the resulting diagram actions.
    Interpret {
        /// The natural-language description, e.g. "Add a Kafka node".
        message: String,
    },

    /// Inspect saved workflows.
    Workflow {
        #[command(subcommand)]
        action: WorkflowCommand,
    },
}

#[derive(Subcommand)]
pub enum WorkflowCommand {
    /// List saved workflow names.
    #[command(alias = "ls")]
    List,

    /// Print a saved workflow.
    Show {
        /// Workflow name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        <Cli as clap::CommandFactory>::command().debug_assert();
    }

    #[test]
    fn parses_interpret_with_global_flags() {
        let cli = Cli::try_parse_from([
            "sketchflow",
            "interpret",
            "Add a Kafka node",
            "--json",
            "-vv",
            "--data-dir",
            "/tmp/sf",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/sf")));
        assert!(matches!(cli.command, Commands::Interpret { message } if message == "Add a Kafka node"));
    }

    #[test]
    fn serve_flags_are_optional() {
        let cli = Cli::try_parse_from(["sketchflow", "serve"]).unwrap();
        assert!(matches!(cli.command, Commands::Serve { port: None, host: None }));

        let cli = Cli::try_parse_from(["sketchflow", "serve", "-p", "9000", "--host", "0.0.0.0"])
            .unwrap();
        assert!(
            matches!(cli.command, Commands::Serve { port: Some(9000), host: Some(ref h) } if h == "0.0.0.0")
        );
    }
}
