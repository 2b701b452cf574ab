//! TCP accept loop serving the quote endpoint over HTTP/1.
use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use log::{debug, error, info};
use quote_common::Result;
use tokio::net::TcpListener;

use crate::service::QuoteService;

/// HTTP listener for the quote endpoint.
///
/// Accepts TCP connections and serves each one on its own task, so a failing
/// or slow client never blocks the others.
pub struct QuoteListener {
    /// The underlying TCP listening socket.
    pub(crate) socket: TcpListener,
}

impl QuoteListener {
    /// Bind a new listener to the provided `bind_addr` (e.g., `0.0.0.0:8080`).
    pub async fn bind(bind_addr: &str) -> Result<Self> {
        let socket = TcpListener::bind(bind_addr).await?;
        Ok(Self { socket })
    }

    /// Address the listener is actually bound to.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// Accept connections until `shutdown` resolves.
    ///
    /// Connection-level errors are logged and never stop the accept loop.
    pub async fn serve<S>(self, service: Arc<QuoteService>, shutdown: S) -> Result<()>
    where
        S: Future<Output = ()>,
    {
        info!("Quote service is listening on {}", self.socket.local_addr()?);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Listener stopped accepting connections");
                    break;
                }
                accepted = self.socket.accept() => match accepted {
                    Ok((stream, peer)) => {
                        debug!("Accepted connection from {}", peer);
                        let service = Arc::clone(&service);
                        tokio::spawn(async move {
                            let handler = service_fn(move |request| {
                                let service = Arc::clone(&service);
                                async move { Ok::<_, Infallible>(service.respond(request).await) }
                            });
                            if let Err(e) = http1::Builder::new()
                                .serve_connection(TokioIo::new(stream), handler)
                                .await
                            {
                                error!("Connection error with {}: {}", peer, e);
                            }
                        });
                    }
                    Err(e) => error!("TCP accept error: {}", e),
                },
            }
        }
        Ok(())
    }
}
