//! Error types shared between client and server.
//!
//! The `QuoteError` enum unifies the failure cases of every hop in the relay
//! (network, decoding, persistence, local I/O and deadline breaches), allowing
//! crates to propagate a single error type.
use std::io;
use std::time::Duration;

use thiserror::Error;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Connection refused, DNS failure or any other transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The remote side answered with a non-success HTTP status.
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// Malformed or unexpected JSON shape.
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Write failure, schema problem or lost connection in the quote store.
    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),

    /// The operation did not complete before its deadline.
    #[error("{operation} timed out after {budget:?}")]
    Timeout {
        /// Short name of the bounded operation (e.g. `upstream fetch`).
        operation: &'static str,
        /// Budget the deadline was created with.
        budget: Duration,
    },
}

impl QuoteError {
    /// `true` when the error is a deadline breach.
    pub fn is_timeout(&self) -> bool {
        matches!(self, QuoteError::Timeout { .. })
    }
}
