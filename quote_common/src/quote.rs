//! Quote payloads exchanged along the relay.
//!
//! The upstream API emits every numeric-looking value as a JSON string, so all
//! `Quote` fields stay opaque text. Decoding is all-or-nothing: every field is
//! required and any missing or mistyped field discards the whole document.
use serde::{Deserialize, Serialize};

use crate::result::Result;

/// One snapshot of USD→BRL exchange-rate fields from the upstream source.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub code: String,
    pub codein: String,
    pub name: String,
    pub high: String,
    pub low: String,
    #[serde(rename = "varBid")]
    pub var_bid: String,
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    /// Buy-side rate, the only field exposed to the client.
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
    pub create_date: String,
}

/// Upstream document: the quote keyed by its currency pair.
#[derive(Debug, Deserialize)]
struct UpstreamDocument {
    #[serde(rename = "USDBRL")]
    usdbrl: Quote,
}

impl Quote {
    /// Decode the upstream `{"USDBRL": {...}}` document.
    pub fn from_upstream_json(body: &[u8]) -> Result<Quote> {
        let document: UpstreamDocument = serde_json::from_slice(body)?;
        Ok(document.usdbrl)
    }

    /// Minimal payload returned to callers of the quote service.
    pub fn to_bid_response(&self) -> BidResponse {
        BidResponse {
            bid: self.bid.clone(),
        }
    }
}

/// Body of a successful quote service response.
///
/// Encoded as a bare JSON string (`"5.43"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BidResponse {
    /// Buy-side rate, verbatim from the upstream quote.
    pub bid: String,
}

/// Shapes accepted when decoding a bid payload.
#[derive(Deserialize)]
#[serde(untagged)]
enum BidPayload {
    Bare(String),
    Object { bid: String },
}

impl BidResponse {
    /// Encode the response to JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        let json = serde_json::to_vec(self)?;
        Ok(json)
    }

    /// Decode either the bare string form or `{"bid": "..."}`.
    pub fn from_json(body: &[u8]) -> Result<BidResponse> {
        let bid = match serde_json::from_slice::<BidPayload>(body)? {
            BidPayload::Bare(bid) | BidPayload::Object { bid } => bid,
        };
        Ok(BidResponse { bid })
    }
}
