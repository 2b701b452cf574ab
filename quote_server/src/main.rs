//! Quote relay server binary.
//!
//! Opens (and if needed creates) the SQLite database, makes sure the
//! `exchange` table exists, then serves `GET /cotacao` until Ctrl+C.
use std::sync::Arc;

use clap::Parser;
use log::{error, info};
use quote_common::Result;
use quote_server::args::Args;
use quote_server::{QuoteListener, QuoteService, QuoteStore, RateFetcher};

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();
    let config = args.service_config();

    let store = QuoteStore::connect(&args.database).await?;
    store.initialize().await?;
    info!("Quote store ready at {}", args.database.display());

    let fetcher = RateFetcher::new(&config.upstream_url)?;
    info!(
        "Upstream {} (fetch budget {:?}, store budget {:?})",
        fetcher.url(),
        config.fetch_timeout,
        config.store_timeout
    );
    let service = Arc::new(QuoteService::new(fetcher, store, config));

    let listener = QuoteListener::bind(&args.bind).await?;
    listener.serve(Arc::clone(&service), shutdown_signal()).await?;

    service.close().await;
    info!("Quote server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl+C received. Shutting down server..."),
        Err(e) => {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
