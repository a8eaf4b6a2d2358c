//! Accept loop serving a dispatcher over HTTP/1.1 and HTTP/2.

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as HttpConnBuilder;
use hyper_util::server::graceful::GracefulShutdown;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use restive::Dispatcher;

use crate::service::DispatchService;

/// Tracing target for server lifecycle events.
pub(crate) const SERVER_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::server");

/// Errors raised while starting the server.
#[derive(Debug, Error)]
pub enum ServeError {
    /// The listen address could not be bound.
    #[error("failed to bind {addr}")]
    Bind {
        /// Address that was requested.
        addr: SocketAddr,
        /// Underlying socket error.
        #[source]
        source: io::Error,
    },
}

/// Binds a TCP listener on `addr`.
///
/// # Errors
///
/// Returns [`ServeError::Bind`] when the socket cannot be bound.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServeError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })
}

/// Serves connections from `listener` until `shutdown` resolves.
///
/// Once `shutdown` fires no new connections are accepted, and the call
/// returns after every in-flight connection has finished.
pub async fn serve<F>(listener: TcpListener, dispatcher: Arc<Dispatcher>, shutdown: F)
where
    F: Future<Output = ()>,
{
    let graceful = GracefulShutdown::new();
    let http = HttpConnBuilder::new(TokioExecutor::new());

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            result = listener.accept() => {
                let (stream, peer) = match result {
                    Ok(accepted) => accepted,
                    Err(error) => {
                        warn!(target: SERVER_TARGET, %error, "failed to accept connection");
                        continue;
                    }
                };

                debug!(target: SERVER_TARGET, %peer, "accepted connection");
                let service = DispatchService::new(Arc::clone(&dispatcher), peer);
                let conn = http.serve_connection(TokioIo::new(stream), service);
                let conn = graceful.watch(conn.into_owned());

                tokio::spawn(async move {
                    if let Err(error) = conn.await {
                        warn!(target: SERVER_TARGET, %peer, %error, "connection error");
                    }
                });
            }

            () = &mut shutdown => {
                info!(target: SERVER_TARGET, "shutdown requested, draining connections");
                break;
            }
        }
    }

    graceful.shutdown().await;
    info!(target: SERVER_TARGET, "all connections drained");
}

/// Resolves when the process receives Ctrl-C.
///
/// A failure to install the signal handler is logged and treated as an
/// immediate shutdown request.
pub async fn ctrl_c() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(target: SERVER_TARGET, %error, "failed to listen for Ctrl-C");
    }
}
