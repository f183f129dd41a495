//! Interactive line-based shell.
//!
//! Reads commands from stdin and dispatches against a
//! [`DependencyAnalyzer`]. Malformed input (wrong arity, unparseable
//! latency) is rejected here with a usage message; the core performs no
//! validation of its own.

use std::io::{self, BufRead, Write};

use super::execute::load_sample_dataset;
use crate::analyzer::DependencyAnalyzer;
use crate::error::Result;
use crate::output::{self, OutputConfig};

const HELP_TEXT: &str = "Commands:
  add <source> <target> <latency> - Queue a dependency event
  process                         - Process all queued events
  reachable <service>             - Get reachable services from a service
  services                        - List all services
  queue                           - Show queue status
  demo                            - Load demo dataset into the queue
  clear                           - Clear the graph
  help                            - Show this help
  quit                            - Exit";

/// Run the interactive shell until `quit`/`exit` or end of input.
pub fn run_shell(analyzer: &mut DependencyAnalyzer, config: &OutputConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!(
        "{}",
        output::info("=== Dependency Analyzer Interactive Mode ===", config)
    );
    println!("{HELP_TEXT}");
    println!();

    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            // End of input: treat like quit
            println!();
            return Ok(());
        };
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        let command = parts[0].to_ascii_lowercase();

        match command.as_str() {
            "add" => handle_add(analyzer, &parts, config),
            "process" => {
                let before = analyzer.processed_event_count();
                analyzer.process_all_queued_events();
                let processed = analyzer.processed_event_count() - before;
                println!("{}", output::success(&format!("Processed {processed} events"), config));
            }
            "reachable" => handle_reachable(analyzer, &parts, config),
            "services" => {
                println!(
                    "All services: {}",
                    output::format_service_set(&analyzer.all_services())
                );
            }
            "queue" => {
                println!("Queue size: {}", analyzer.queue_size());
                println!("Total processed: {}", analyzer.processed_event_count());
            }
            "demo" => {
                load_sample_dataset(analyzer);
                println!(
                    "{}",
                    output::success("Demo dataset loaded into queue", config)
                );
            }
            "clear" => {
                analyzer.clear_graph();
                println!("{}", output::success("Graph cleared", config));
            }
            "help" => println!("{HELP_TEXT}"),
            "quit" | "exit" => {
                println!("Goodbye!");
                return Ok(());
            }
            _ => {
                println!(
                    "{}",
                    output::error(&format!("Unknown command: {command}"), config)
                );
            }
        }
    }
}

/// Handle `add <source> <target> <latency>`.
fn handle_add(analyzer: &mut DependencyAnalyzer, parts: &[&str], config: &OutputConfig) {
    if parts.len() != 4 {
        println!("Usage: add <source> <target> <latency>");
        return;
    }

    let latency_ms: u64 = match parts[3].parse() {
        Ok(value) => value,
        Err(_) => {
            println!(
                "{}",
                output::error(&format!("Invalid latency value: '{}'", parts[3]), config)
            );
            return;
        }
    };

    analyzer.publish_dependency_event(parts[1], parts[2], latency_ms);
    println!("{}", output::success("Event published to queue", config));
}

/// Handle `reachable <service>`.
fn handle_reachable(analyzer: &DependencyAnalyzer, parts: &[&str], config: &OutputConfig) {
    if parts.len() != 2 {
        println!("Usage: reachable <service>");
        return;
    }

    let service = parts[1];
    if analyzer.has_service(service) {
        let reachable = analyzer.reachable_services(service);
        println!(
            "Reachable from {}: {}",
            output::info(service, config),
            output::format_service_set(&reachable)
        );
    } else {
        println!(
            "{}",
            output::error(&format!("Service '{service}' not found"), config)
        );
    }
}
