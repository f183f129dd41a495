//! FIFO event queue decoupling producers from the graph mutator.
//!
//! The queue is unbounded by design: backpressure is out of scope for a
//! single-threaded analyzer, and a caller wanting bounded-time draining
//! caps iterations outside the core.

use crate::domain::DependencyEvent;
use std::collections::VecDeque;

/// An ordered, unbounded buffer of dependency events.
///
/// Insertion order equals consumption order. Duplicate events are stored
/// distinctly; the queue has no notion of identity beyond position.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<DependencyEvent>,
}

impl EventQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event at the tail. Never fails.
    pub fn publish(&mut self, event: DependencyEvent) {
        self.events.push_back(event);
    }

    /// Remove and return the head event, or `None` when the queue is empty.
    ///
    /// An empty queue is an ordinary outcome, not an error.
    pub fn consume(&mut self) -> Option<DependencyEvent> {
        self.events.pop_front()
    }

    /// Whether the queue holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events waiting to be consumed.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}
