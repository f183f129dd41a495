//! Command execution logic.
//!
//! This module contains the implementation of the non-interactive CLI
//! commands. The interactive shell lives in `shell.rs`.

use anyhow::Result;
use std::collections::BTreeMap;

use super::args::DemoArgs;
use crate::analyzer::DependencyAnalyzer;
use crate::output::{self, OutputConfig, OutputMode};

/// The sample dependency dataset: `(source, target, latency_ms)`.
///
/// Exercises multiple paths (A→B→D and A→C→D), a cycle (C→E→F→C), and a
/// leaf chain (F→G→H).
const SAMPLE_DATASET: &[(&str, &str, u64)] = &[
    ("A", "B", 5),
    ("A", "C", 3),
    ("B", "D", 2),
    ("C", "D", 7),
    ("C", "E", 4),
    ("D", "F", 6),
    ("E", "F", 1),
    ("F", "C", 8),
    ("F", "G", 10),
    ("G", "H", 9),
];

/// Publish the sample dataset into the analyzer's queue.
///
/// Events are queued only; call
/// [`DependencyAnalyzer::process_all_queued_events`] to apply them.
pub fn load_sample_dataset(analyzer: &mut DependencyAnalyzer) {
    for &(source, target, latency_ms) in SAMPLE_DATASET {
        analyzer.publish_dependency_event(source, target, latency_ms);
    }
}

/// Execute the demo command
pub fn execute_demo(
    analyzer: &mut DependencyAnalyzer,
    args: &DemoArgs,
    output_mode: OutputMode,
    config: &OutputConfig,
) -> Result<()> {
    load_sample_dataset(analyzer);
    analyzer.process_all_queued_events();

    match output_mode {
        OutputMode::Json => {
            let reachability: BTreeMap<String, Option<Vec<String>>> = args
                .probe
                .iter()
                .map(|service| {
                    let reachable = analyzer
                        .has_service(service)
                        .then(|| output::sorted_services(&analyzer.reachable_services(service)));
                    (service.clone(), reachable)
                })
                .collect();

            output::print_json(&serde_json::json!({
                "processed_events": analyzer.processed_event_count(),
                "services": output::sorted_services(&analyzer.all_services()),
                "reachability": reachability,
            }))?;
        }
        OutputMode::Text => {
            println!("{}", output::info("=== Dependency Analyzer Demo ===", config));
            println!();
            println!(
                "Processed {} events",
                analyzer.processed_event_count()
            );
            println!(
                "All services in the graph: {}",
                output::format_service_set(&analyzer.all_services())
            );
            println!();

            for service in &args.probe {
                if analyzer.has_service(service) {
                    let reachable = analyzer.reachable_services(service);
                    println!(
                        "Reachable services from '{}': {}",
                        output::info(service, config),
                        output::format_service_set(&reachable)
                    );
                } else {
                    println!(
                        "{}",
                        output::error(&format!("Service '{service}' not found in graph"), config)
                    );
                }
            }
        }
    }

    Ok(())
}
