//! Domain models for the quote server.
//!
//! - `stored_quote` — `StoredQuoteRow`, a quote persisted with its row id.
//! - `request_state` — per-request lifecycle of the quote endpoint.

pub mod request_state;
pub mod stored_quote;

pub use request_state::RequestState;
pub use stored_quote::StoredQuoteRow;
