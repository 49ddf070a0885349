// SPDX-License-Identifier: MIT OR Apache-2.0

//! Weight store: visited directories and their accumulated weights.
//!
//! The backing file is plain text, one `<weight>,<path>` record per line.
//! It is read once per invocation and rewritten wholesale on save.

use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use crate::errors::StoreError;

/// File name of the store under `$HOME`
pub const DEFAULT_STORE_FILE: &str = ".autojump-go.txt";

/// Energy added in quadrature on every repeated visit
const VISIT_ENERGY: f64 = 100.0;

/// Mapping from absolute path to accumulated weight.
///
/// A store created with [`WeightStore::detached`] has no backing file and
/// `save` does nothing.
#[derive(Debug, Clone, Default)]
pub struct WeightStore {
    entries: HashMap<String, f64>,
    backing: Option<PathBuf>,
}

impl WeightStore {
    /// Empty store that is never written anywhere
    pub fn detached() -> Self {
        Self::default()
    }

    /// Load the store at `path`, creating an empty file if none exists.
    ///
    /// Records with an unparsable weight are kept with weight 0.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let content = read_or_create(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut entries = HashMap::new();
        for line in content.split('\n') {
            if let Some((entry_path, weight)) = parse_line(line) {
                entries.insert(entry_path, weight);
            }
        }

        debug!(path = %path.display(), entries = entries.len(), "loaded weight store");
        Ok(Self {
            entries,
            backing: Some(path.to_path_buf()),
        })
    }

    /// Record a visit to `path` and return its new weight.
    ///
    /// An unknown path starts at 0; every later visit moves the weight to
    /// `sqrt(w^2 + 100)`. Paths containing a line break cannot be stored in
    /// the line-based file and are skipped.
    pub fn add(&mut self, path: &str) -> Option<f64> {
        if path.contains(['\n', '\r']) {
            warn!(path, "skipping path containing a line break");
            return None;
        }

        match self.entries.get_mut(path) {
            Some(weight) => {
                *weight = (*weight * *weight + VISIT_ENERGY).sqrt();
                Some(*weight)
            }
            None => {
                self.entries.insert(path.to_string(), 0.0);
                Some(0.0)
            }
        }
    }

    pub fn weight(&self, path: &str) -> Option<f64> {
        self.entries.get(path).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(path, weight)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(path, weight)| (path.as_str(), *weight))
    }

    pub fn backing_path(&self) -> Option<&Path> {
        self.backing.as_deref()
    }

    pub fn total_weight(&self) -> f64 {
        self.entries.values().sum()
    }

    /// Entries ordered by weight descending, then path
    pub fn by_weight(&self) -> Vec<(&str, f64)> {
        let mut rows: Vec<(&str, f64)> = self.iter().collect();
        rows.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        rows
    }

    /// Serialized file content, sorted by path.
    pub fn render(&self) -> String {
        let mut rows: Vec<(&str, f64)> = self.iter().collect();
        rows.sort_by(|a, b| a.0.cmp(b.0));

        let mut out = String::with_capacity(rows.iter().map(|(p, _)| p.len() + 12).sum());
        for (path, weight) in rows {
            out.push_str(&format!("{weight:.3},{path}\n"));
        }
        out
    }

    /// Rewrite the backing file with the current entries.
    pub fn save(&self) -> Result<(), StoreError> {
        let Some(path) = self.backing.as_deref() else {
            debug!("detached weight store, nothing to save");
            return Ok(());
        };

        atomic_write_bytes(path, self.render().as_bytes()).map_err(|source| {
            StoreError::Persist {
                path: path.to_path_buf(),
                source,
            }
        })?;

        debug!(path = %path.display(), entries = self.entries.len(), "saved weight store");
        Ok(())
    }
}

/// Parse one `<weight>,<path>` record.
///
/// The first comma separates the fields, so paths may contain commas.
/// Returns `None` for lines that carry no usable path.
pub fn parse_line(line: &str) -> Option<(String, f64)> {
    if line.is_empty() {
        return None;
    }

    let Some((raw_weight, path)) = line.split_once(',') else {
        warn!(line, "skipping store record without a weight separator");
        return None;
    };
    if path.is_empty() {
        warn!(line, "skipping store record with an empty path");
        return None;
    }

    let weight = match raw_weight.trim().parse::<f64>() {
        Ok(weight) if weight == 0.0 => 0.0,
        Ok(weight) if weight.is_finite() && weight > 0.0 => weight,
        Ok(weight) => {
            warn!(path, weight, "out-of-range weight, treating as 0");
            0.0
        }
        Err(err) => {
            warn!(path, raw_weight, %err, "unparsable weight, treating as 0");
            0.0
        }
    };

    Some((path.to_string(), weight))
}

fn read_or_create(path: &Path) -> io::Result<String> {
    match OpenOptions::new().read(true).write(true).open(path) {
        Ok(mut file) => {
            let mut content = String::new();
            file.read_to_string(&mut content)?;
            Ok(content)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            File::create(path)?;
            debug!(path = %path.display(), "created empty weight store");
            Ok(String::new())
        }
        Err(err) => Err(err),
    }
}

/// Write `bytes` to a sibling temp file, sync it, then rename it over `path`.
///
/// A symlinked `path` is resolved first so the link keeps pointing at the
/// rewritten target.
pub(crate) fn atomic_write_bytes(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let resolved = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let path = resolved.as_path();
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    std::fs::create_dir_all(parent)?;

    let nonce = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_nanos())
        .unwrap_or(0);
    let tmp_name = format!(
        ".{}.tmp-{}-{}",
        path.file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("autojump"),
        std::process::id(),
        nonce
    );
    let tmp_path = parent.join(tmp_name);

    let written = File::create(&tmp_path).and_then(|mut file| {
        file.write_all(bytes)?;
        file.sync_all()
    });
    if let Err(err) = written {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(err);
    }

    if let Err(err) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(err);
    }

    Ok(())
}
