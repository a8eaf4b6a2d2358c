//! Runtime configuration for the restive daemon.
//!
//! Values are layered with command-line flags taking precedence over
//! environment variables, which take precedence over the built-in defaults:
//!
//! | Field         | Flag            | Environment           | Default          |
//! |---------------|-----------------|-----------------------|------------------|
//! | `listen`      | `--listen`      | `RESTIVE_LISTEN`      | `127.0.0.1:3003` |
//! | `log_filter`  | `--log-filter`  | `RESTIVE_LOG_FILTER`  | `info`           |
//! | `log_format`  | `--log-format`  | `RESTIVE_LOG_FORMAT`  | `compact`        |
//! | `pretty_json` | `--pretty-json` | `RESTIVE_PRETTY_JSON` | `false`          |

mod defaults;
mod logging;

use std::ffi::OsString;
use std::net::{AddrParseError, SocketAddr};

use clap::Parser;
use serde::Serialize;
use thiserror::Error;

pub use crate::defaults::DEFAULT_LISTEN;
pub use crate::logging::{DEFAULT_LOG_FILTER, LogFormat, LogFormatParseError, default_log_format};

/// Daemon configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Parser)]
#[command(
    name = "restived",
    version,
    about = "Serve restive resources over HTTP"
)]
pub struct Config {
    /// Socket address to listen on.
    #[arg(long, env = "RESTIVE_LISTEN", default_value = DEFAULT_LISTEN)]
    pub listen: String,
    /// Tracing filter directive, e.g. `info` or `restive=debug`.
    #[arg(long, env = "RESTIVE_LOG_FILTER", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
    /// Log output format.
    #[arg(long, env = "RESTIVE_LOG_FORMAT", default_value_t = default_log_format())]
    pub log_format: LogFormat,
    /// Indent JSON bodies produced by the demonstration resources.
    #[arg(long, env = "RESTIVE_PRETTY_JSON")]
    pub pretty_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN.to_owned(),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            log_format: default_log_format(),
            pretty_json: false,
        }
    }
}

impl Config {
    /// Loads configuration from the process arguments and environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the arguments or environment are
    /// invalid, or when help or version output was requested.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_iter(std::env::args_os())
    }

    /// Loads configuration from explicit arguments and the environment.
    ///
    /// The first item is the program name, as with [`std::env::args_os`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when parsing fails.
    pub fn load_from_iter<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Self::try_parse_from(args)?)
    }

    /// Parses [`Config::listen`] as a socket address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ListenAddress`] when the value is not an
    /// `address:port` pair.
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.listen
            .parse()
            .map_err(|source| ConfigError::ListenAddress {
                value: self.listen.clone(),
                source,
            })
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Command-line or environment input was rejected.
    #[error(transparent)]
    Parse(#[from] clap::Error),
    /// The listen address could not be parsed.
    #[error("invalid listen address '{value}'")]
    ListenAddress {
        /// Offending value.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: AddrParseError,
    },
}
