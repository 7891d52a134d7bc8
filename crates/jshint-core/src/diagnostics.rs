//! Diagnostic records reported by the engine and the per-file result
//! mapping.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// One problem the engine reported for one file.
///
/// Only the position and message are interpreted here. Everything else the
/// engine attaches (`id`, `code`, `evidence`, ...) travels in `extra`
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number, reported by the engine as `character`.
    #[serde(rename = "character")]
    pub column: u32,
    /// Engine message, reported as `reason`.
    #[serde(rename = "reason")]
    pub message: String,
    /// Engine-specific fields passed through opaquely.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Mapping from resolved file path to the diagnostics reported for it.
///
/// Entries appear in the order files were processed. A clean file still
/// gets an entry; the empty sequence records that it was checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LintResult {
    files: IndexMap<PathBuf, Vec<Diagnostic>>,
}

impl LintResult {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the diagnostics reported for one file.
    pub fn record(&mut self, path: PathBuf, diagnostics: Vec<Diagnostic>) {
        self.files.insert(path, diagnostics);
    }

    /// Returns the diagnostics recorded for `path`, if that file was
    /// checked.
    #[must_use]
    pub fn diagnostics_for(&self, path: &Path) -> Option<&[Diagnostic]> {
        self.files.get(path).map(Vec::as_slice)
    }

    /// Iterates over checked files in processing order.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &[Diagnostic])> {
        self.files
            .iter()
            .map(|(path, diagnostics)| (path.as_path(), diagnostics.as_slice()))
    }

    /// Number of files checked, clean files included.
    #[must_use]
    pub fn files_checked(&self) -> usize {
        self.files.len()
    }

    /// Total number of problems across all files.
    #[must_use]
    pub fn problem_count(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    /// Returns `true` when any file produced at least one diagnostic.
    #[must_use]
    pub fn has_problems(&self) -> bool {
        self.files.values().any(|diagnostics| !diagnostics.is_empty())
    }

    /// Returns `true` when no files were checked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
