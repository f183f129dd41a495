//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for depscope using
//! clap's derive API. The CLI is a thin adapter over
//! [`crate::analyzer::DependencyAnalyzer`]: it parses input, constructs
//! the analyzer, and renders results. All dependency semantics live in
//! the core modules.
//!
//! # Commands
//!
//! - `demo`: Load the sample dataset, drain the queue, print reachability reports
//! - `shell`: Interactive line-based shell (also the default with no subcommand)
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to the `demo` command)
//!
//! # Example
//!
//! ```bash
//! depscope demo
//! depscope demo --json --probe A,F
//! depscope shell
//! ```

mod args;
mod execute;
mod shell;

use anyhow::Result;
use clap::{Parser, Subcommand};

// Re-export argument structs
pub use args::DemoArgs;

// Re-export the sample dataset loader for library users and tests
pub use execute::load_sample_dataset;

use crate::analyzer::DependencyAnalyzer;
use crate::output::{OutputConfig, OutputMode};

/// Depscope - an event-driven service dependency analyzer
///
/// Ingests service-dependency events through a FIFO queue and answers
/// transitive-reachability queries over the resulting directed graph.
#[derive(Parser, Debug)]
#[command(name = "depscope")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the demo scenario
    ///
    /// Loads the sample dependency dataset into the queue, processes all
    /// events, then prints every known service and reachability reports
    /// for a list of probe services.
    Demo(DemoArgs),

    /// Start the interactive shell
    ///
    /// Line-based commands for publishing events, draining the queue,
    /// and querying the graph. This is also the default when no
    /// subcommand is given.
    Shell,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    pub fn execute(&self) -> Result<()> {
        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        let output_config = OutputConfig::from_env();

        // One explicitly constructed analyzer per invocation; commands
        // receive it by reference rather than reaching for a global.
        let mut analyzer = DependencyAnalyzer::new();

        match &self.command {
            Some(Commands::Demo(args)) => {
                execute::execute_demo(&mut analyzer, args, output_mode, &output_config)
            }
            Some(Commands::Shell) | None => {
                shell::run_shell(&mut analyzer, &output_config)?;
                Ok(())
            }
        }
    }
}
