// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structured logging setup
//!
//! Everything goes to stderr so stdout stays reserved for the jump target
//! the shell function `cd`s into.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable overriding the log filter
pub const LOG_ENV: &str = "AUTOJUMP_LOG";

/// Initialize the global subscriber; `verbose` raises the default level to debug
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "autojump=debug"
    } else {
        "autojump=warn"
    }
}
