//! CLI argument structs.
//!
//! Each command has its own argument struct with clap derive attributes
//! for parsing and validation.

use clap::Parser;

/// Arguments for the `demo` command
#[derive(Parser, Debug, Clone)]
pub struct DemoArgs {
    /// Services to probe for reachability (comma-separated)
    ///
    /// Defaults to a fixed list covering interior nodes, a cycle member,
    /// and a leaf of the sample dataset.
    #[arg(long, value_delimiter = ',', default_values_t = default_probes())]
    pub probe: Vec<String>,
}

fn default_probes() -> Vec<String> {
    ["A", "F", "B", "G", "E"]
        .into_iter()
        .map(String::from)
        .collect()
}
