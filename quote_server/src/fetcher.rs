//! Upstream rate API client.
//!
//! `RateFetcher::fetch` issues exactly one GET per call. Sending the request
//! and reading the body are both bounded by the caller's deadline; nothing is
//! retried.
use log::debug;
use quote_common::{Deadline, Quote, QuoteError, Result};
use reqwest::Client;

/// Fetches the current USD→BRL quote from the upstream API.
#[derive(Debug, Clone)]
pub struct RateFetcher {
    client: Client,
    url: String,
}

impl RateFetcher {
    /// Create a fetcher for `url` with its own HTTP client.
    pub fn new(url: &str) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, url))
    }

    /// Create a fetcher that reuses an existing HTTP client.
    pub fn with_client(client: Client, url: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
        }
    }

    /// Upstream URL this fetcher calls.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode one quote.
    ///
    /// Fails with `Timeout` if not complete by `deadline`, `Network` on
    /// transport errors, `Status` on a non-success response and `Decode`
    /// when the body is not a complete upstream document.
    pub async fn fetch(&self, deadline: Deadline) -> Result<Quote> {
        debug!("Fetching quote from {} ({:?} budget)", self.url, deadline.budget());
        deadline
            .run("upstream fetch", async {
                let response = self.client.get(&self.url).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(QuoteError::Status(status.as_u16()));
                }
                let body = response.bytes().await?;
                Quote::from_upstream_json(&body)
            })
            .await
    }
}
