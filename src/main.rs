// SPDX-License-Identifier: MIT OR Apache-2.0

//! autojump - Jump to frequently visited directories
//!
//! Each invocation loads the weight store, performs one action and writes
//! the store back.

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Action, Cli};

use autojump::config::Config;
use autojump::logging;
use autojump::{Matcher, WeightStore};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    match cli.action().context("no action given")? {
        Action::Completions(shell) => commands::completions(shell),
        Action::Jump(query) => {
            let (store, matcher) = open_session(&cli)?;
            commands::jump(&store, &matcher, query)?;
        }
        Action::Add(dir) => {
            let (mut store, _) = open_session(&cli)?;
            commands::add(&mut store, dir)?;
        }
        Action::Stat => {
            let (store, _) = open_session(&cli)?;
            commands::stat(&store, cli.format)?;
        }
        Action::Complete(query) => {
            let (store, matcher) = open_session(&cli)?;
            commands::complete(&store, &matcher, query, cli.format)?;
        }
    }

    Ok(())
}

/// Resolve config and load the store; completions never get here.
fn open_session(cli: &Cli) -> Result<(WeightStore, Matcher)> {
    let config = Config::load();
    let data_file = config.data_file(cli.data_file.as_deref())?;
    Ok((commands::open_store(&data_file), config.matcher()))
}
