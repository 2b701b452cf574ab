//! Lifecycle of one `GET /cotacao` request.
//!
//! `Received → Fetching → Persisting → Responding`; any failure moves the
//! request straight to `Failed`. Transitions only go forward.
use log::{debug, error};
use strum_macros::Display;

use crate::error::ServiceError;

/// Current step of an inbound quote request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RequestState {
    /// Request accepted, nothing done yet.
    Received,
    /// Waiting on the upstream rate API.
    Fetching,
    /// Writing the fetched quote to the store.
    Persisting,
    /// Both steps succeeded, the bid is being returned.
    Responding,
    /// A step failed; the caller gets a server error.
    Failed,
}

impl RequestState {
    /// Move to `next`, logging the transition.
    pub fn advance(&mut self, next: RequestState) {
        debug!("Quote request {} -> {}", self, next);
        *self = next;
    }

    /// Mark the request failed and hand the error back for propagation.
    pub fn fail(&mut self, reason: ServiceError) -> ServiceError {
        error!("Quote request failed while {}: {}", self, reason);
        *self = RequestState::Failed;
        reason
    }
}
