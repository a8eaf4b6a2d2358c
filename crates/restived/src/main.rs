//! `restived` entry point.

use anyhow::Result;

use restive_config::{Config, ConfigError};

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        // Help, version and usage errors print themselves and pick the exit code.
        Err(ConfigError::Parse(error)) => error.exit(),
        Err(error) => return Err(error.into()),
    };
    restived::run(&config).await
}
