//! Host project root detection.
//!
//! The core consumes a project root and never computes one. This module
//! supplies it by walking upward from a start directory until a directory
//! carrying the conventional configuration document or a `.git` marker is
//! found.

use std::path::{Path, PathBuf};

/// Walks upward from `start` to find the host project root.
///
/// Stops at the first ancestor containing `config/jshint.yml` or `.git`;
/// falls back to `start` when neither exists.
#[must_use]
pub fn detect_root(start: &Path) -> PathBuf {
    let mut current = start;
    loop {
        if current.join(jshint_core::DEFAULT_CONFIG_PATH).exists()
            || current.join(".git").exists()
        {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return start.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(root: &Path) {
        fs::create_dir_all(root.join("config")).expect("create config dir");
        fs::write(root.join("config/jshint.yml"), "files: []\n").expect("write config");
    }

    #[test]
    fn finds_the_config_carrying_ancestor() {
        let dir = TempDir::new().expect("tempdir");
        write_config(dir.path());
        let nested = dir.path().join("app/assets/javascripts");
        fs::create_dir_all(&nested).expect("create nested dirs");

        assert_eq!(detect_root(&nested), dir.path());
    }

    #[test]
    fn nearer_config_wins_over_an_outer_git_marker() {
        let dir = TempDir::new().expect("tempdir");
        fs::create_dir_all(dir.path().join(".git")).expect("create .git");
        let inner = dir.path().join("engine");
        write_config(&inner);
        let start = inner.join("app");
        fs::create_dir_all(&start).expect("create start dir");

        assert_eq!(detect_root(&start), inner);
    }

    #[test]
    fn git_marker_counts_as_a_root() {
        let dir = TempDir::new().expect("tempdir");
        fs::create_dir_all(dir.path().join(".git")).expect("create .git");
        let nested = dir.path().join("src");
        fs::create_dir_all(&nested).expect("create nested dirs");

        assert_eq!(detect_root(&nested), dir.path());
    }

    #[test]
    fn falls_back_to_the_start_directory() {
        let dir = TempDir::new().expect("tempdir");
        assert_eq!(detect_root(dir.path()), dir.path());
    }
}
