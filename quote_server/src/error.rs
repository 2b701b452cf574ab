//! Error type of the quote endpoint.
//!
//! Wraps the shared `QuoteError` with the step that produced it, so the HTTP
//! layer can pick a response without inspecting error details.
use quote_common::QuoteError;
use thiserror::Error;

/// Why a quote request failed.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The upstream rate API call failed (network, status, decode or timeout).
    #[error("fetch failed: {0}")]
    Fetch(#[source] QuoteError),

    /// The quote was fetched but could not be persisted.
    #[error("persist failed: {0}")]
    Persist(#[source] QuoteError),

    /// The task running the request panicked or was cancelled.
    #[error("request task aborted: {0}")]
    Aborted(String),
}
