//! Quote relay HTTP server.
//!
//! Serves `GET /cotacao`: each request fetches the current USD→BRL quote from
//! the upstream rate API, appends it to a SQLite table and answers with the
//! bid. The building blocks are:
//!
//! - `RateFetcher` — one deadline-bound GET to the upstream API, decoded into a
//!   `Quote`.
//! - `QuoteStore` — SQLite pool shared by all requests; `save` inserts one row
//!   under its own deadline.
//! - `QuoteService` — per-request orchestration (fetch → persist → respond)
//!   and the HTTP status mapping.
//! - `QuoteListener` — TCP accept loop serving each connection with hyper on
//!   its own task.
//!
//! Deadlines are independent per hop: the service never inherits the caller's
//! remaining budget, and a caller giving up does not cancel a store write that
//! is already running.
#![warn(missing_docs)]
pub mod args;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod listener;
pub mod model;
pub mod service;
pub mod store;

#[cfg(test)]
mod test_support;

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use fetcher::RateFetcher;
pub use listener::QuoteListener;
pub use service::QuoteService;
pub use store::QuoteStore;
