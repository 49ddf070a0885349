// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types with helpful suggestions
//!
//! Provides user-friendly error messages with actionable suggestions.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading or persisting the weight store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be created, opened or read
    #[error(
        "Cannot open weight store at '{}': {source}\n\n\
         Suggestion: check permissions on the file and its directory,\n\
         or point autojump elsewhere: autojump --data-file /path/to/store.txt",
        .path.display()
    )]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store could not be written back durably
    #[error(
        "Failed to persist weight store to '{}': {source}\n\n\
         The previous contents were left in place.",
        .path.display()
    )]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures while resolving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "$HOME is empty\n\n\
         Suggestion: export HOME, or pass the store location explicitly.\n\
         Example: autojump --data-file ~/.autojump-go.txt --add \"$PWD\""
    )]
    MissingHome,
}
