//! Diagnostics on stderr.
//!
//! Only the exit code is a stable interface; everything written here is for
//! humans. `RUST_LOG` overrides the level picked from `-v`.

use std::io::IsTerminal;

use anyhow::{anyhow, Result};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Level used when neither `-v` nor `RUST_LOG` is given.
pub const QUIET_LEVEL: LevelFilter = LevelFilter::ERROR;

/// Level used with `-v`.
pub const VERBOSE_LEVEL: LevelFilter = LevelFilter::INFO;

/// Builds the filter for the given verbosity, honouring `RUST_LOG`.
pub fn env_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { VERBOSE_LEVEL } else { QUIET_LEVEL };
    EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
}

/// Installs the global subscriber. Call once, from `main`.
pub fn init(verbose: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow!("Failed to initialise logging: {e}"))
}
