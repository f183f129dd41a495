//! Dependency analyzer: the owning context for queue, graph, and counter.
//!
//! This module provides the [`DependencyAnalyzer`] struct that owns the
//! event queue and the service graph and drives the ingestion pipeline
//! between them. Construct it explicitly and pass it where needed; there
//! is no global instance.
//!
//! # Ingestion Model
//!
//! Producers publish events at the queue tail; draining pulls events off
//! the head one at a time and applies each to the graph. Only events of
//! kind [`DEPENDENCY_KIND`] become edges — every other kind is discarded
//! after consumption but still counts as processed. Queries run against
//! the live graph at any time, including between drains.
//!
//! # Concurrency
//!
//! Single-threaded and synchronous throughout: every operation runs to
//! completion on the caller's thread, and [`DependencyAnalyzer::process_all_queued_events`]
//! is a tight loop with no yield points. Concurrent producers would need
//! a locking discipline on the queue and a reader/writer split on the
//! graph; neither is provided here.

use crate::domain::{DependencyEvent, DEPENDENCY_KIND};
use crate::graph::ServiceGraph;
use crate::queue::EventQueue;
use std::collections::{HashMap, HashSet};

/// Facade over the event queue, the service graph, and the ingestion
/// pipeline's processed-event counter.
#[derive(Debug, Default)]
pub struct DependencyAnalyzer {
    /// Buffer of events awaiting ingestion.
    queue: EventQueue,

    /// The live dependency graph.
    graph: ServiceGraph,

    /// Events processed since construction or the last counter reset.
    /// Counts every consumed event, graph-affecting or not.
    processed_events: u64,
}

impl DependencyAnalyzer {
    /// Create an analyzer with an empty queue and an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Publishing =====

    /// Build a [`DEPENDENCY_KIND`] event and enqueue it.
    ///
    /// Never fails for well-formed inputs; the event is applied to the
    /// graph only when the queue is later drained.
    pub fn publish_dependency_event(&mut self, source: &str, target: &str, latency_ms: u64) {
        self.publish_event(DependencyEvent::dependency(source, target, latency_ms));
    }

    /// Enqueue a caller-built event of any kind.
    pub fn publish_event(&mut self, event: DependencyEvent) {
        tracing::trace!(kind = %event.kind, source = %event.source, target = %event.target, "event queued");
        self.queue.publish(event);
    }

    // ===== Ingestion pipeline =====

    /// Consume and process exactly one event from the queue.
    ///
    /// Returns the consumed event, or `None` if the queue was empty.
    /// When an event is present it is applied to the graph (at most one
    /// mutation) and the processed counter is incremented, regardless of
    /// whether its kind survived the filter.
    pub fn consume_one(&mut self) -> Option<DependencyEvent> {
        let event = self.queue.consume()?;
        self.apply_event(&event);
        self.processed_events += 1;
        Some(event)
    }

    /// Drain the queue, applying every event to the graph.
    ///
    /// Runs as a tight synchronous loop until the queue reports empty;
    /// there is no partial-progress signal and no cancellation. Callers
    /// needing bounded-time draining should cap iterations with
    /// [`DependencyAnalyzer::consume_one`] instead.
    pub fn process_all_queued_events(&mut self) {
        let mut drained = 0u64;
        while let Some(event) = self.queue.consume() {
            self.apply_event(&event);
            self.processed_events += 1;
            drained += 1;
        }
        tracing::debug!(drained, total = self.processed_events, "queue drained");
    }

    /// Apply a single event to the graph.
    ///
    /// Only [`DEPENDENCY_KIND`] events mutate the graph; other kinds are
    /// a filtering outcome, not an error path.
    fn apply_event(&mut self, event: &DependencyEvent) {
        if event.is_dependency() {
            self.graph.add_dependency(&event.source, &event.target);
        } else {
            tracing::trace!(kind = %event.kind, "event discarded by kind filter");
        }
    }

    /// Whether the queue still holds unprocessed events.
    pub fn has_pending_events(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Number of events waiting in the queue.
    pub fn queue_size(&self) -> usize {
        self.queue.len()
    }

    /// Total events processed since construction or the last reset.
    pub fn processed_event_count(&self) -> u64 {
        self.processed_events
    }

    /// Reset the processed-event counter to zero.
    ///
    /// Touches neither the queue nor the graph.
    pub fn reset_counter(&mut self) {
        self.processed_events = 0;
    }

    // ===== Graph queries =====

    /// All services transitively reachable from `name`, excluding
    /// `name` itself. Empty for unknown services.
    pub fn reachable_services(&self, name: &str) -> HashSet<String> {
        self.graph.reachable_services(name)
    }

    /// All known service names.
    pub fn all_services(&self) -> HashSet<String> {
        self.graph.all_services()
    }

    /// Whether `name` is a known service.
    pub fn has_service(&self, name: &str) -> bool {
        self.graph.has_service(name)
    }

    /// A deep snapshot of the graph's adjacency structure.
    pub fn adjacency_list(&self) -> HashMap<String, HashSet<String>> {
        self.graph.adjacency_list()
    }

    /// Number of known services.
    pub fn service_count(&self) -> usize {
        self.graph.service_count()
    }

    /// Clear the graph and reset the processed-event counter.
    ///
    /// Any un-drained events remain in the queue untouched.
    pub fn clear_graph(&mut self) {
        self.graph.clear();
        self.processed_events = 0;
        tracing::debug!(pending = self.queue.len(), "graph cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consume_one_applies_and_counts() {
        let mut analyzer = DependencyAnalyzer::new();
        analyzer.publish_dependency_event("a", "b", 5);

        let event = analyzer.consume_one().unwrap();
        assert_eq!(event.source, "a");
        assert_eq!(analyzer.processed_event_count(), 1);
        assert!(analyzer.has_service("a"));
        assert!(analyzer.has_service("b"));

        assert!(analyzer.consume_one().is_none());
        assert_eq!(analyzer.processed_event_count(), 1);
    }

    #[test]
    fn non_dependency_kinds_count_but_do_not_mutate() {
        let mut analyzer = DependencyAnalyzer::new();
        analyzer.publish_event(DependencyEvent::new("heartbeat", "a", "b", 0));
        analyzer.process_all_queued_events();

        assert_eq!(analyzer.processed_event_count(), 1);
        assert!(!analyzer.has_service("a"));
        assert!(!analyzer.has_service("b"));
        assert!(analyzer.all_services().is_empty());
    }

    #[test]
    fn reset_counter_leaves_queue_and_graph_alone() {
        let mut analyzer = DependencyAnalyzer::new();
        analyzer.publish_dependency_event("a", "b", 1);
        analyzer.process_all_queued_events();
        analyzer.publish_dependency_event("b", "c", 1);

        analyzer.reset_counter();

        assert_eq!(analyzer.processed_event_count(), 0);
        assert_eq!(analyzer.queue_size(), 1);
        assert!(analyzer.has_service("a"));
    }
}
