//! Hyper service wrapping a shared [`Dispatcher`].

use std::convert::Infallible;
use std::future::{Ready, ready};
use std::net::SocketAddr;
use std::sync::Arc;

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Request, Response, StatusCode};
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::service::Service;
use tracing::info;

use restive::{Dispatcher, boundary};

/// Tracing target for per-request logging.
pub(crate) const REQUEST_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::request");

/// Serves one connection's requests from a shared dispatcher.
#[derive(Debug, Clone)]
pub struct DispatchService {
    dispatcher: Arc<Dispatcher>,
    peer: SocketAddr,
}

impl DispatchService {
    /// Creates a service for the connection from `peer`.
    #[must_use]
    pub fn new(dispatcher: Arc<Dispatcher>, peer: SocketAddr) -> Self {
        Self { dispatcher, peer }
    }

    /// Answers `request` and logs the outcome.
    ///
    /// Successful bodies are labelled `application/json`, which is what every
    /// resource the daemon registers produces.
    #[must_use]
    pub fn respond<B>(&self, request: &Request<B>) -> Response<Full<Bytes>> {
        let mut response = boundary::handle(&self.dispatcher, request)
            .map(|body| Full::new(Bytes::from(body)));

        info!(
            target: REQUEST_TARGET,
            peer = %self.peer,
            method = %request.method(),
            uri = %request.uri(),
            status = response.status().as_u16(),
            "handled request"
        );

        if response.status() == StatusCode::OK {
            response
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        response
    }
}

impl Service<Request<Incoming>> for DispatchService {
    type Response = Response<Full<Bytes>>;
    type Error = Infallible;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn call(&self, request: Request<Incoming>) -> Self::Future {
        ready(Ok(self.respond(&request)))
    }
}
