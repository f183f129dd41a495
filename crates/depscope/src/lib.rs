//! Depscope - an event-driven service dependency analyzer.
//!
//! This crate provides both a CLI application and a library for building
//! a directed service-dependency graph from queued events and answering
//! transitive-reachability queries over it.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod analyzer;
pub mod domain;
pub mod error;
pub mod graph;
pub mod queue;

// Public CLI module (needed by binary)
pub mod cli;

// Output formatting helpers
pub mod output;
