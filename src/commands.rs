// SPDX-License-Identifier: MIT OR Apache-2.0

//! One entry point per CLI action

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, warn};

use autojump::{Matcher, WeightStore};

use crate::cli::{Cli, OutputFormat};

/// Load the store, or fall back to one that never saves.
pub fn open_store(path: &Path) -> WeightStore {
    match WeightStore::load(path) {
        Ok(store) => store,
        Err(err) => {
            warn!("{err}");
            warn!("continuing without a persistent store; visits will not be recorded");
            WeightStore::detached()
        }
    }
}

pub fn add(store: &mut WeightStore, dir: &str) -> Result<()> {
    if let Some(weight) = store.add(dir) {
        debug!(dir, weight, "recorded visit");
    }
    store.save().context("failed to record visit")?;
    Ok(())
}

pub fn jump(store: &WeightStore, matcher: &Matcher, query: &str) -> Result<()> {
    let target = matcher.resolve(query, store);
    debug!(query, target = %target, "resolved jump target");
    store.save().context("failed to save weight store")?;

    let mut stdout = io::stdout().lock();
    write!(stdout, "{target}")?;
    stdout.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct StatEntry<'a> {
    path: &'a str,
    weight: f64,
}

#[derive(Serialize)]
struct StatReport<'a> {
    data_file: Option<String>,
    entries: Vec<StatEntry<'a>>,
    total_weight: f64,
}

pub fn stat(store: &WeightStore, format: OutputFormat) -> Result<()> {
    let mut stdout = io::stdout().lock();
    let rows = store.by_weight();
    let data_file = store
        .backing_path()
        .map(|path| path.display().to_string());

    match format {
        OutputFormat::Json => {
            let report = StatReport {
                data_file,
                entries: rows
                    .iter()
                    .map(|&(path, weight)| StatEntry { path, weight })
                    .collect(),
                total_weight: store.total_weight(),
            };
            writeln!(stdout, "{}", serde_json::to_string_pretty(&report)?)?;
        }
        OutputFormat::Text => {
            for (path, weight) in &rows {
                writeln!(stdout, "{weight:.1}:\t{path}")?;
            }
            writeln!(stdout, "{}", "_".repeat(40))?;
            writeln!(stdout)?;
            writeln!(
                stdout,
                "Total weight: {:.0}. Number of entries: {}.",
                store.total_weight(),
                store.len()
            )?;
            writeln!(
                stdout,
                "Data:\t{}",
                data_file.as_deref().unwrap_or("(not persisted)")
            )?;
        }
    }
    Ok(())
}

pub fn complete(
    store: &WeightStore,
    matcher: &Matcher,
    query: &str,
    format: OutputFormat,
) -> Result<()> {
    let candidates = matcher.rank(query, store);
    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Json => {
            writeln!(stdout, "{}", serde_json::to_string_pretty(&candidates)?)?;
        }
        OutputFormat::Text => {
            for candidate in &candidates {
                writeln!(stdout, "{}", candidate.path)?;
            }
        }
    }
    Ok(())
}

pub fn completions(shell: Shell) {
    let mut command = Cli::command();
    clap_complete::generate(shell, &mut command, "autojump", &mut io::stdout());
}
