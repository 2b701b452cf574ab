//! Explicit deadlines for blocking calls.
//!
//! Every hop of the relay (client → service, service → upstream, service →
//! store) takes a `Deadline` as a parameter instead of inheriting one from the
//! caller. A deadline is an absolute instant; `Deadline::run` fails with
//! [`QuoteError::Timeout`] when the wrapped operation has not completed by
//! then. Deadlines are never forwarded between tiers.
use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::error::QuoteError;
use crate::result::Result;

/// Budget for the service's call to the upstream rate API.
pub const FETCH_TIMEOUT: Duration = Duration::from_millis(200);
/// Budget for persisting one quote row.
pub const STORE_TIMEOUT: Duration = Duration::from_millis(10);
/// Budget for the client's whole call to the service.
pub const CLIENT_TIMEOUT: Duration = Duration::from_millis(300);

/// Absolute point in time after which a blocking operation must abort.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
    budget: Duration,
}

impl Deadline {
    /// Deadline `budget` from now.
    pub fn after(budget: Duration) -> Self {
        Self {
            at: Instant::now() + budget,
            budget,
        }
    }

    /// Budget this deadline was created with.
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Time left before the deadline, zero once expired.
    pub fn remaining(&self) -> Duration {
        self.at.saturating_duration_since(Instant::now())
    }

    /// `true` once the deadline instant has passed.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.at
    }

    /// Drive `operation` to completion or fail with `Timeout` at the deadline.
    ///
    /// An already-expired deadline fails without polling `operation`. When the
    /// deadline fires the future is dropped, cancelling whatever it was doing.
    pub async fn run<F, T>(self, name: &'static str, operation: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if self.is_expired() {
            return Err(self.timeout(name));
        }
        match tokio::time::timeout_at(self.at, operation).await {
            Ok(result) => result,
            Err(_) => Err(self.timeout(name)),
        }
    }

    fn timeout(&self, operation: &'static str) -> QuoteError {
        QuoteError::Timeout {
            operation,
            budget: self.budget,
        }
    }
}
