//!
//! Common types and utilities shared by the quote server and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — upstream `Quote` and the minimal `BidResponse` payload.
//! - `deadline` — explicit per-hop deadlines and their reference budgets.
//! - `net` — networking constants and small helpers.
#![warn(missing_docs)]
pub mod deadline;
pub mod error;
pub mod net;
pub mod quote;
pub mod result;

pub use deadline::Deadline;
pub use error::QuoteError;
pub use quote::{BidResponse, Quote};
pub use result::Result;
