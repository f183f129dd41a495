//! Domain types for dependency analysis.
//!
//! This module contains the core value types shared by the event queue,
//! the service graph, and the ingestion pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Event kind that the ingestion pipeline applies to the graph.
///
/// Events of any other kind are accepted into the queue but silently
/// discarded (while still being counted) when drained.
pub const DEPENDENCY_KIND: &str = "dependency";

/// An observed dependency between two services.
///
/// Immutable once constructed; two events are equal when all four fields
/// match. Latency is carried for reporting purposes only and is never
/// consulted by graph traversal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyEvent {
    /// Event kind. Only [`DEPENDENCY_KIND`] produces a graph edge.
    #[serde(rename = "type")]
    pub kind: String,

    /// The service that depends on (calls) the target.
    pub source: String,

    /// The service being depended upon.
    pub target: String,

    /// Observed call latency in milliseconds.
    pub latency_ms: u64,
}

impl DependencyEvent {
    /// Create a new event with an explicit kind.
    pub fn new(
        kind: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        latency_ms: u64,
    ) -> Self {
        Self {
            kind: kind.into(),
            source: source.into(),
            target: target.into(),
            latency_ms,
        }
    }

    /// Create a new event of kind [`DEPENDENCY_KIND`].
    pub fn dependency(
        source: impl Into<String>,
        target: impl Into<String>,
        latency_ms: u64,
    ) -> Self {
        Self::new(DEPENDENCY_KIND, source, target, latency_ms)
    }

    /// Whether the ingestion pipeline applies this event to the graph.
    pub fn is_dependency(&self) -> bool {
        self.kind == DEPENDENCY_KIND
    }
}

impl fmt::Display for DependencyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"type\": \"{}\", \"source\": \"{}\", \"target\": \"{}\", \"latency_ms\": {}}}",
            self.kind, self.source, self.target, self.latency_ms
        )
    }
}
