// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file support for autojump
//!
//! Loads configuration from the platform config directory
//! (`~/.config/autojump/config.toml` on Linux).

use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::errors::ConfigError;
use crate::matcher::{Matcher, DEFAULT_CANDIDATE_LIMIT};
use crate::store::DEFAULT_STORE_FILE;

/// Configuration loaded from `config.toml`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Store file to use instead of `$HOME/.autojump-go.txt`
    pub data_file: Option<PathBuf>,
    /// How many top fuzzy matches compete on weight
    pub max_candidates: Option<usize>,
    /// Match query characters case-sensitively
    pub case_sensitive: Option<bool>,
}

impl Config {
    /// Load configuration from the user config directory, or defaults
    pub fn load() -> Self {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("autojump").join("config.toml");
            if let Some(config) = Self::load_from_path(&config_path) {
                return config;
            }
        }

        Self::default()
    }

    pub fn load_from_path(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(e) => {
                tracing::warn!("Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Resolve the store location (CLI wins, then config, then `$HOME`)
    pub fn data_file(&self, cli_value: Option<&Path>) -> Result<PathBuf, ConfigError> {
        let home = std::env::var_os("HOME");
        if let Some(path) = cli_value {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.data_file {
            return Ok(expand_home(path, home));
        }
        default_data_file(home)
    }

    pub fn matcher(&self) -> Matcher {
        Matcher::new(
            self.max_candidates.unwrap_or(DEFAULT_CANDIDATE_LIMIT),
            self.case_sensitive.unwrap_or(false),
        )
    }
}

/// `$HOME/.autojump-go.txt`; an unset or empty `HOME` is an error
pub fn default_data_file(home: Option<OsString>) -> Result<PathBuf, ConfigError> {
    match home {
        Some(home) if !home.is_empty() => Ok(PathBuf::from(home).join(DEFAULT_STORE_FILE)),
        _ => Err(ConfigError::MissingHome),
    }
}

fn expand_home(path: &Path, home: Option<OsString>) -> PathBuf {
    match (path.strip_prefix("~"), home) {
        (Ok(rest), Some(home)) if !home.is_empty() => PathBuf::from(home).join(rest),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_data_file_lives_in_home() {
        let path = default_data_file(Some(OsString::from("/home/alex"))).expect("path");
        assert_eq!(path, PathBuf::from("/home/alex/.autojump-go.txt"));
    }

    #[test]
    fn missing_or_empty_home_is_an_error() {
        assert!(matches!(
            default_data_file(None),
            Err(ConfigError::MissingHome)
        ));
        assert!(matches!(
            default_data_file(Some(OsString::new())),
            Err(ConfigError::MissingHome)
        ));
    }

    #[test]
    fn cli_data_file_wins_over_config() {
        let config = Config {
            data_file: Some(PathBuf::from("/from/config.txt")),
            ..Config::default()
        };
        let path = config
            .data_file(Some(Path::new("/from/cli.txt")))
            .expect("path");
        assert_eq!(path, PathBuf::from("/from/cli.txt"));
        assert_eq!(
            config.data_file(None).expect("path"),
            PathBuf::from("/from/config.txt")
        );
    }

    #[test]
    fn tilde_expands_against_home() {
        let expanded = expand_home(
            Path::new("~/state/jumps.txt"),
            Some(OsString::from("/home/alex")),
        );
        assert_eq!(expanded, PathBuf::from("/home/alex/state/jumps.txt"));
        assert_eq!(
            expand_home(Path::new("~/x"), None),
            PathBuf::from("~/x")
        );
    }

    #[test]
    fn parses_config_file() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_file = \"/var/tmp/jumps.txt\"\nmax_candidates = 3\ncase_sensitive = true\n",
        )
        .expect("write config");

        let config = Config::load_from_path(&path).expect("config");
        assert_eq!(config.data_file, Some(PathBuf::from("/var/tmp/jumps.txt")));
        let matcher = config.matcher();
        assert_eq!(matcher.limit(), 3);
        assert!(matcher.case_sensitive());
    }

    #[test]
    fn invalid_config_falls_back_to_none() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_candidates = \"many\"\n").expect("write config");
        assert!(Config::load_from_path(&path).is_none());
    }

    #[test]
    fn default_matcher_uses_ten_candidates() {
        let matcher = Config::default().matcher();
        assert_eq!(matcher.limit(), DEFAULT_CANDIDATE_LIMIT);
        assert!(!matcher.case_sensitive());
    }
}
