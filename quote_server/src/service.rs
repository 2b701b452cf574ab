//! The `GET /cotacao` endpoint.
//!
//! Each request runs fetch, then persist, then respond, strictly in that
//! order and with independent deadlines. A successful fetch is still a failed
//! request if the quote cannot be stored. Callers only ever see an opaque
//! server error; details go to the log.
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{CONTENT_TYPE, HeaderValue};
use hyper::{Method, Request, Response, StatusCode};
use log::{error, info};
use quote_common::net::QUOTE_PATH;
use quote_common::{BidResponse, Deadline};

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::fetcher::RateFetcher;
use crate::model::RequestState;
use crate::store::QuoteStore;

const FETCH_FAILED_BODY: &str = "Failed to get exchange rate";
const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// Orchestrates the rate fetcher and the quote store for each request.
#[derive(Debug)]
pub struct QuoteService {
    fetcher: RateFetcher,
    store: QuoteStore,
    config: ServiceConfig,
}

impl QuoteService {
    /// Build the service around an already initialised store.
    pub fn new(fetcher: RateFetcher, store: QuoteStore, config: ServiceConfig) -> Self {
        Self {
            fetcher,
            store,
            config,
        }
    }

    /// The store this service writes to.
    pub fn store(&self) -> &QuoteStore {
        &self.store
    }

    /// Run one request: exactly one upstream fetch and one store write.
    pub async fn handle(&self) -> Result<BidResponse, ServiceError> {
        let mut state = RequestState::Received;

        state.advance(RequestState::Fetching);
        let quote = self
            .fetcher
            .fetch(Deadline::after(self.config.fetch_timeout))
            .await
            .map_err(|e| state.fail(ServiceError::Fetch(e)))?;

        state.advance(RequestState::Persisting);
        let id = self
            .store
            .save(&quote, Deadline::after(self.config.store_timeout))
            .await
            .map_err(|e| state.fail(ServiceError::Persist(e)))?;

        state.advance(RequestState::Responding);
        info!("Served bid {} (row {})", quote.bid, id);
        Ok(quote.to_bid_response())
    }

    /// Map an HTTP request onto `handle`.
    ///
    /// The request work runs on its own task: if the caller hangs up, the
    /// connection future is dropped but an in-flight store write still
    /// finishes.
    pub async fn respond<B>(self: Arc<Self>, request: Request<B>) -> Response<Full<Bytes>> {
        if request.uri().path() != QUOTE_PATH {
            return text_response(StatusCode::NOT_FOUND, "Not Found");
        }
        if request.method() != Method::GET {
            return text_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
        }

        let service = Arc::clone(&self);
        let outcome = match tokio::spawn(async move { service.handle().await }).await {
            Ok(outcome) => outcome,
            Err(e) => Err(ServiceError::Aborted(e.to_string())),
        };

        match outcome {
            Ok(bid) => match bid.to_json_bytes() {
                Ok(body) => json_response(body),
                Err(e) => {
                    error!("Failed to encode bid response: {}", e);
                    text_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY)
                }
            },
            Err(ServiceError::Fetch(_)) => {
                text_response(StatusCode::INTERNAL_SERVER_ERROR, FETCH_FAILED_BODY)
            }
            Err(ServiceError::Persist(_)) => {
                text_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY)
            }
            Err(e @ ServiceError::Aborted(_)) => {
                error!("{}", e);
                text_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY)
            }
        }
    }

    /// Close the underlying store.
    pub async fn close(&self) {
        self.store.close().await;
    }
}

fn json_response(body: Vec<u8>) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(body)));
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

fn text_response(status: StatusCode, body: &'static str) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from_static(body.as_bytes())));
    *response.status_mut() = status;
    response.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{UPSTREAM_PATH, mock_upstream, temp_store, upstream_body};
    use http_body_util::BodyExt;
    use quote_common::QuoteError;
    use std::time::Duration;
    use tempfile::TempDir;
    use wiremock::MockServer;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    fn config(upstream: &MockServer) -> ServiceConfig {
        ServiceConfig {
            upstream_url: format!("{}{}", upstream.uri(), UPSTREAM_PATH),
            fetch_timeout: Duration::from_secs(2),
            store_timeout: Duration::from_secs(2),
        }
    }

    async fn service(config: ServiceConfig) -> (TempDir, Arc<QuoteService>) {
        let (dir, store) = temp_store().await;
        let fetcher = RateFetcher::new(&config.upstream_url).unwrap();
        (dir, Arc::new(QuoteService::new(fetcher, store, config)))
    }

    fn get(uri: &str) -> Request<()> {
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(())
            .unwrap()
    }

    async fn body_text(response: Response<Full<Bytes>>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn handle_fetches_then_persists() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(UPSTREAM_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string(upstream_body("5.43")))
            .expect(1)
            .mount(&upstream)
            .await;
        let (_dir, service) = service(config(&upstream)).await;

        let bid = service.handle().await.unwrap();

        assert_eq!(bid.bid, "5.43");
        let rows = service.store().rows().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].quote.bid, "5.43");
        assert_eq!(rows[0].quote.ask, "5.4410");
    }

    #[tokio::test]
    async fn repeated_requests_append_independent_rows() {
        let upstream = mock_upstream(&upstream_body("5.43"), Duration::ZERO).await;
        let (_dir, service) = service(config(&upstream)).await;

        service.handle().await.unwrap();
        service.handle().await.unwrap();

        let rows = service.store().rows().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_ne!(rows[0].id, rows[1].id);
        assert_eq!(rows[0].quote, rows[1].quote);
    }

    #[tokio::test]
    async fn malformed_upstream_skips_store() {
        let upstream = mock_upstream(r#"{"USDBRL":{"bid":"5.43"}}"#, Duration::ZERO).await;
        let (_dir, service) = service(config(&upstream)).await;

        let err = service.handle().await.unwrap_err();

        assert!(matches!(err, ServiceError::Fetch(QuoteError::Decode(_))), "got {err:?}");
        assert!(service.store().rows().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn upstream_timeout_skips_store() {
        let upstream = mock_upstream(&upstream_body("5.43"), Duration::from_millis(600)).await;
        let mut config = config(&upstream);
        config.fetch_timeout = Duration::from_millis(200);
        let (_dir, service) = service(config).await;

        let err = service.handle().await.unwrap_err();

        match err {
            ServiceError::Fetch(e) => assert!(e.is_timeout(), "got {e:?}"),
            other => panic!("expected fetch failure, got {other:?}"),
        }
        assert!(service.store().rows().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn store_deadline_is_independent_of_fetch() {
        let upstream = mock_upstream(&upstream_body("5.43"), Duration::ZERO).await;
        let mut config = config(&upstream);
        config.store_timeout = Duration::ZERO;
        let (_dir, service) = service(config).await;

        let err = service.handle().await.unwrap_err();

        match err {
            ServiceError::Persist(e) => assert!(e.is_timeout(), "got {e:?}"),
            other => panic!("expected persist failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn responds_with_bid_as_json_string() {
        let upstream = mock_upstream(&upstream_body("5.43"), Duration::ZERO).await;
        let (_dir, service) = service(config(&upstream)).await;

        let response = service.respond(get(QUOTE_PATH)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(body_text(response).await, r#""5.43""#);
    }

    #[tokio::test]
    async fn upstream_failure_is_opaque_server_error() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(UPSTREAM_PATH))
            .respond_with(ResponseTemplate::new(502).set_body_string("secret upstream detail"))
            .mount(&upstream)
            .await;
        let (_dir, service) = service(config(&upstream)).await;

        let response = service.respond(get(QUOTE_PATH)).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, FETCH_FAILED_BODY);
    }

    #[tokio::test]
    async fn unreachable_store_fails_request_after_successful_fetch() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(UPSTREAM_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string(upstream_body("5.43")))
            .expect(1)
            .mount(&upstream)
            .await;
        let (_dir, service) = service(config(&upstream)).await;
        service.close().await;

        let response = Arc::clone(&service).respond(get(QUOTE_PATH)).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, INTERNAL_ERROR_BODY);
    }

    #[tokio::test]
    async fn unknown_route_and_method_are_rejected() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(upstream_body("5.43")))
            .expect(0)
            .mount(&upstream)
            .await;
        let (_dir, service) = service(config(&upstream)).await;

        let missing = Arc::clone(&service).respond(get("/other")).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let post = Request::builder()
            .method(Method::POST)
            .uri(QUOTE_PATH)
            .body(())
            .unwrap();
        let rejected = Arc::clone(&service).respond(post).await;
        assert_eq!(rejected.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
