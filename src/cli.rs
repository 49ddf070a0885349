// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI argument parsing using clap

use clap::{ArgGroup, Parser};
use clap_complete::Shell;
use std::path::PathBuf;

/// autojump - Jump to frequently visited directories
///
/// Prints the best-matching previously visited directory for a fuzzy
/// query, weighted by how often each directory was visited.
#[derive(Parser, Debug)]
#[command(name = "autojump")]
#[command(
    author,
    version,
    about,
    long_about = None,
    override_usage = "autojump [OPTIONS] <DIRECTORY | --add DIRECTORY | --stat | --complete QUERY>",
    after_help = "Shell integration:\n  j() { cd \"$(autojump \"$@\")\"; }\n  cd() { builtin cd \"$@\" && autojump --add \"$PWD\"; }"
)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .args(["query", "add", "stat", "complete", "completions"])
))]
pub struct Cli {
    /// Directory to jump to (fuzzy)
    #[arg(value_name = "DIRECTORY")]
    pub query: Option<String>,

    /// Record a visit to DIRECTORY
    #[arg(long, value_name = "DIRECTORY")]
    pub add: Option<String>,

    /// Show stored directories and their weights
    #[arg(short, long)]
    pub stat: bool,

    /// List ranked candidates for QUERY, one per line
    #[arg(long, value_name = "QUERY")]
    pub complete: Option<String>,

    /// Print a shell completion script
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Weight store to use instead of ~/.autojump-go.txt
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Output format for --stat and --complete
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// The single operation requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'a> {
    Jump(&'a str),
    Add(&'a str),
    Stat,
    Complete(&'a str),
    Completions(Shell),
}

impl Cli {
    pub fn action(&self) -> Option<Action<'_>> {
        if let Some(dir) = self.add.as_deref() {
            return Some(Action::Add(dir));
        }
        if self.stat {
            return Some(Action::Stat);
        }
        if let Some(query) = self.complete.as_deref() {
            return Some(Action::Complete(query));
        }
        if let Some(shell) = self.completions {
            return Some(Action::Completions(shell));
        }
        self.query.as_deref().map(Action::Jump)
    }
}
