//! Quote Client — asks the quote service for the current USD→BRL bid and
//! writes `Dólar: <bid>` to a local file.
//!
//! The call to the service is bounded by its own deadline (300 ms by default).
//! The output file is only touched after a complete, decoded response, so a
//! failed run leaves whatever was there before.
#![warn(missing_docs)]
pub mod args;
pub mod client;
pub mod output;

use log::error;
use quote_common::{QuoteError, Result};

pub use client::{ClientConfig, QuoteClient};

/// Apply the invocation's exit policy to the outcome of `QuoteClient::run`.
///
/// Local I/O failures are fatal and returned so the process exits abnormally.
/// Every other failure is logged and the invocation ends without output.
pub fn settle(outcome: Result<()>) -> Result<()> {
    match outcome {
        Ok(()) => Ok(()),
        Err(QuoteError::Io(e)) => {
            error!("Failed to write the exchange rate file: {}", e);
            Err(QuoteError::Io(e))
        }
        Err(e) => {
            error!("Error getting exchange rate: {}", e);
            Ok(())
        }
    }
}
