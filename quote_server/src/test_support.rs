//! Fixtures shared by the server's unit tests.
use std::time::Duration;

use quote_common::Quote;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::store::QuoteStore;

pub const UPSTREAM_PATH: &str = "/json/last/USD-BRL";

pub fn upstream_body(bid: &str) -> String {
    format!(
        r#"{{"USDBRL":{{"code":"USD","codein":"BRL","name":"Dólar Americano/Real Brasileiro","high":"5.4512","low":"5.4021","varBid":"-0.0123","pctChange":"-0.23","bid":"{bid}","ask":"5.4410","timestamp":"1718035199","create_date":"2024-06-10 12:59:59"}}}}"#
    )
}

pub fn sample_quote(bid: &str) -> Quote {
    Quote::from_upstream_json(upstream_body(bid).as_bytes()).unwrap()
}

pub async fn mock_upstream(body: &str, delay: Duration) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(UPSTREAM_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .set_delay(delay),
        )
        .mount(&server)
        .await;
    server
}

pub async fn temp_store() -> (TempDir, QuoteStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = QuoteStore::connect(&dir.path().join("exchange.db"))
        .await
        .unwrap();
    store.initialize().await.unwrap();
    (dir, store)
}
