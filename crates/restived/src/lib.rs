//! HTTP daemon serving restive resources.
//!
//! Startup loads [`restive_config::Config`], installs telemetry, registers the
//! [`demo`] resources with a [`restive::Dispatcher`] and serves it until
//! Ctrl-C. Each connection gets a [`DispatchService`] sharing the same
//! dispatcher; the dispatcher is never mutated after startup.

pub mod demo;
pub mod server;
mod service;
pub mod telemetry;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use restive_config::Config;

pub use server::{ServeError, bind, serve};
pub use service::DispatchService;
pub use telemetry::{TelemetryError, TelemetryHandle};

/// Runs the daemon until Ctrl-C.
///
/// # Errors
///
/// Fails when telemetry cannot be installed, the listen address is invalid or
/// the socket cannot be bound.
pub async fn run(config: &Config) -> Result<()> {
    telemetry::initialise(config).context("failed to initialise telemetry")?;

    let addr = config.listen_addr()?;
    let dispatcher = Arc::new(demo::demo_dispatcher(config.pretty_json));
    let listener = server::bind(addr).await?;
    let local = listener.local_addr().context("failed to read bound address")?;

    info!(
        addr = %local,
        prefixes = ?dispatcher.registry().prefixes(),
        version = env!("CARGO_PKG_VERSION"),
        "restived listening"
    );
    debug!(resources = ?dispatcher.describe(), "registered resources");

    server::serve(listener, dispatcher, server::ctrl_c()).await;
    Ok(())
}
