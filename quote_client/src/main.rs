//! Quote Client — fetches the current USD→BRL bid from the quote service and
//! writes it to a file.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --url http://localhost:8080/cotacao --output cotacao.txt --timeout-ms 300
//! ```
//!
//! Network and decode failures are logged and the client exits without
//! writing anything; a failure to create or write the output file aborts with
//! a non-zero exit status.
use clap::Parser;
use quote_client::args::Args;
use quote_client::{QuoteClient, settle};
use quote_common::Result;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();
    let client = QuoteClient::new(args.client_config())?;
    settle(client.run().await)
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
