//! tracing subscriber installation for the CLI.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

use crate::error::{RegionError, Result};

/// Environment variable that overrides every other filter source.
pub const LOG_ENV: &str = "REGIONTOC_LOG";

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Pick the filter expression: `REGIONTOC_LOG`, then `-v`, then config.
pub fn select_filter(env_value: Option<String>, verbose: u8, configured: &str) -> String {
    match (env_value, verbose) {
        (Some(value), _) if !value.trim().is_empty() => value,
        (_, 0) => configured.to_string(),
        (_, 1) => "regiontoc=debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global fmt subscriber on stderr.
///
/// The filter is always validated. Only the first successful call installs
/// the subscriber; later and concurrent calls wait for it and return `Ok`.
pub fn init(filter: &str) -> Result<()> {
    let env_filter = EnvFilter::try_new(filter)
        .map_err(|e| RegionError::Config(format!("invalid log filter '{}': {}", filter, e)))?;

    INSTALLED.get_or_try_init(|| install_subscriber(env_filter))?;
    Ok(())
}

fn install_subscriber(filter: EnvFilter) -> Result<()> {
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .try_init()
        .map_err(|e| RegionError::Config(format!("failed to install logging: {}", e)))
}
