//! Integration tests for the dependency analyzer facade.
//!
//! These tests verify the ingestion pipeline end to end: publishing,
//! draining, kind filtering, counter bookkeeping, and clear semantics.

use depscope::analyzer::DependencyAnalyzer;
use depscope::cli::load_sample_dataset;
use depscope::domain::DependencyEvent;
use rstest::rstest;
use std::collections::HashSet;

fn set(names: &[&str]) -> HashSet<String> {
    names.iter().map(ToString::to_string).collect()
}

// ============================================================================
// Publish / Drain Tests
// ============================================================================

#[test]
fn test_publish_does_not_touch_graph_until_drain() {
    let mut analyzer = DependencyAnalyzer::new();
    analyzer.publish_dependency_event("a", "b", 5);

    assert_eq!(analyzer.queue_size(), 1);
    assert!(analyzer.has_pending_events());
    assert!(!analyzer.has_service("a"));
    assert_eq!(analyzer.processed_event_count(), 0);

    analyzer.process_all_queued_events();

    assert_eq!(analyzer.queue_size(), 0);
    assert!(!analyzer.has_pending_events());
    assert!(analyzer.has_service("a"));
    assert!(analyzer.has_service("b"));
    assert_eq!(analyzer.processed_event_count(), 1);
}

#[test]
fn test_consume_one_partial_drain() {
    let mut analyzer = DependencyAnalyzer::new();
    analyzer.publish_dependency_event("a", "b", 1);
    analyzer.publish_dependency_event("b", "c", 2);
    analyzer.publish_dependency_event("c", "d", 3);

    // FIFO: the first published event comes out first.
    let event = analyzer.consume_one().unwrap();
    assert_eq!((event.source.as_str(), event.target.as_str()), ("a", "b"));
    assert_eq!(analyzer.processed_event_count(), 1);
    assert_eq!(analyzer.queue_size(), 2);

    // Queries run mid-stream against the live graph.
    assert!(analyzer.has_service("a"));
    assert!(!analyzer.has_service("c"));
    assert_eq!(analyzer.reachable_services("a"), set(&["b"]));

    analyzer.process_all_queued_events();
    assert_eq!(analyzer.processed_event_count(), 3);
    assert_eq!(analyzer.reachable_services("a"), set(&["b", "c", "d"]));
}

#[test]
fn test_drain_on_empty_queue_is_a_no_op() {
    let mut analyzer = DependencyAnalyzer::new();
    analyzer.process_all_queued_events();

    assert_eq!(analyzer.processed_event_count(), 0);
    assert!(analyzer.all_services().is_empty());
}

// ============================================================================
// Kind Filtering Tests
// ============================================================================

#[rstest]
#[case::heartbeat("heartbeat")]
#[case::metric("metric")]
#[case::empty_kind("")]
fn test_non_dependency_kind_counts_without_edges(#[case] kind: &str) {
    let mut analyzer = DependencyAnalyzer::new();
    analyzer.publish_event(DependencyEvent::new(kind, "a", "b", 0));
    analyzer.process_all_queued_events();

    assert_eq!(analyzer.processed_event_count(), 1);
    assert!(analyzer.all_services().is_empty());
}

#[test]
fn test_mixed_kinds_filter_per_event() {
    let mut analyzer = DependencyAnalyzer::new();
    analyzer.publish_dependency_event("a", "b", 1);
    analyzer.publish_event(DependencyEvent::new("heartbeat", "x", "y", 0));
    analyzer.publish_dependency_event("b", "c", 2);
    analyzer.process_all_queued_events();

    assert_eq!(analyzer.processed_event_count(), 3);
    assert_eq!(analyzer.all_services(), set(&["a", "b", "c"]));
    assert!(!analyzer.has_service("x"));
    assert!(!analyzer.has_service("y"));
}

// ============================================================================
// Clear Semantics Tests
// ============================================================================

#[test]
fn test_clear_graph_resets_counter_but_not_queue() {
    let mut analyzer = DependencyAnalyzer::new();
    analyzer.publish_dependency_event("a", "b", 1);
    analyzer.publish_dependency_event("b", "c", 2);
    analyzer.consume_one();

    // One event drained, one still queued.
    assert_eq!(analyzer.processed_event_count(), 1);
    assert_eq!(analyzer.queue_size(), 1);

    analyzer.clear_graph();

    assert!(analyzer.all_services().is_empty());
    assert_eq!(analyzer.processed_event_count(), 0);
    assert_eq!(analyzer.queue_size(), 1);

    // The surviving event still applies on the next drain.
    analyzer.process_all_queued_events();
    assert_eq!(analyzer.processed_event_count(), 1);
    assert_eq!(analyzer.all_services(), set(&["b", "c"]));
}

// ============================================================================
// End-to-End Scenario
// ============================================================================

#[test]
fn test_sample_dataset_end_to_end() {
    let mut analyzer = DependencyAnalyzer::new();
    load_sample_dataset(&mut analyzer);

    assert_eq!(analyzer.queue_size(), 10);

    analyzer.process_all_queued_events();

    assert_eq!(analyzer.processed_event_count(), 10);
    assert_eq!(analyzer.all_services().len(), 8);
    assert_eq!(
        analyzer.reachable_services("A"),
        set(&["B", "C", "D", "E", "F", "G", "H"])
    );
    assert_eq!(analyzer.reachable_services("F"), set(&["C", "E", "G", "H"]));
    assert!(analyzer.reachable_services("H").is_empty());
}

#[test]
fn test_adjacency_snapshot_through_facade() {
    let mut analyzer = DependencyAnalyzer::new();
    analyzer.publish_dependency_event("a", "b", 1);
    analyzer.process_all_queued_events();

    let mut snapshot = analyzer.adjacency_list();
    snapshot.get_mut("a").unwrap().insert("z".to_string());

    assert!(!analyzer.has_service("z"));
    assert_eq!(analyzer.reachable_services("a"), set(&["b"]));
}
