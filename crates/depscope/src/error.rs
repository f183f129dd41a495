//! Error types for depscope CLI operations.
//!
//! The core data structures have no failure modes of their own: an
//! unknown-service query yields an empty set and consuming from an empty
//! queue yields `None`, both ordinary control flow. Errors here exist for
//! the orchestration layer (terminal I/O in the interactive shell).

use std::io;
use thiserror::Error;

/// The error type for depscope CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Output serialization error.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A specialized Result type for depscope operations.
pub type Result<T> = std::result::Result<T, Error>;
