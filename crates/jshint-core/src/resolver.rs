//! Glob expansion of configured file selectors against the conventional
//! asset roots.
//!
//! Selector lists are folded, not unioned: with selectors `["a", "b"]` the
//! resolver probes `<root>/a/b` under every root, one directory level per
//! selector. Only the single-selector form composes the way configuration
//! authors usually expect. The fold is kept for compatibility with existing
//! configurations; treat the multi-entry nesting as a suspect leftover
//! rather than a feature before relying on it.

use crate::config::FileSelectors;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Standard script-asset locations under a host project root, probed in
/// order. Fixed by the host project's layout convention, not configurable.
pub const ASSET_ROOTS: [&str; 3] = [
    "app/assets/javascripts",
    "vendor/assets/javascripts",
    "lib/assets/javascripts",
];

/// File resolution errors.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// A composed selector is not a valid glob pattern.
    #[error("invalid file selector pattern {pattern:?}: {source}")]
    Pattern {
        /// The composed pattern that failed to compile.
        pattern: String,
        /// Underlying pattern error.
        source: glob::PatternError,
    },
}

/// Expands the configured selectors under every asset root.
///
/// Matches are returned in discovery order with duplicates preserved; a
/// file reachable through more than one root appears once per root. Zero
/// matches is an ordinary empty result, not an error.
///
/// # Errors
///
/// Returns [`ResolveError::Pattern`] when a composed selector is not a
/// valid glob pattern.
pub fn resolve(
    project_root: &Path,
    selectors: &FileSelectors,
) -> Result<Vec<PathBuf>, ResolveError> {
    let mut files = Vec::new();

    for composed in search_paths(project_root, selectors) {
        let pattern = composed.to_string_lossy();
        let entries = glob::glob(&pattern).map_err(|source| ResolveError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        for entry in entries {
            match entry {
                Ok(path) => files.push(path),
                // Discovery is best-effort; a match that cannot be
                // inspected is dropped.
                Err(e) => debug!("skipping unreadable match: {e}"),
            }
        }
    }

    Ok(files)
}

/// Composes the selector(s) onto each asset root.
///
/// A selector sequence nests: every selector pushes one more path segment
/// under every root.
fn search_paths(project_root: &Path, selectors: &FileSelectors) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = ASSET_ROOTS
        .iter()
        .map(|root| project_root.join(root))
        .collect();

    match selectors {
        FileSelectors::One(pattern) => {
            for path in &mut paths {
                path.push(pattern);
            }
        }
        FileSelectors::Many(patterns) => {
            for pattern in patterns {
                for path in &mut paths {
                    path.push(pattern);
                }
            }
        }
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dirs");
        }
        fs::write(path, "// fixture\n").expect("write fixture");
    }

    // -- Composition --

    #[test]
    fn single_selector_composes_under_every_root() {
        let paths = search_paths(Path::new("/proj"), &FileSelectors::One("**/*.js".into()));
        assert_eq!(
            paths,
            [
                PathBuf::from("/proj/app/assets/javascripts/**/*.js"),
                PathBuf::from("/proj/vendor/assets/javascripts/**/*.js"),
                PathBuf::from("/proj/lib/assets/javascripts/**/*.js"),
            ]
        );
    }

    #[test]
    fn selector_sequence_nests_instead_of_unioning() {
        let selectors = FileSelectors::Many(vec!["angular".into(), "*.js".into()]);
        let paths = search_paths(Path::new("/proj"), &selectors);
        assert_eq!(
            paths[0],
            PathBuf::from("/proj/app/assets/javascripts/angular/*.js")
        );
        assert!(paths
            .iter()
            .all(|p| p.to_string_lossy().ends_with("angular/*.js")));
    }

    // -- Filesystem expansion --

    #[test]
    fn matches_a_single_file() {
        let dir = TempDir::new().expect("tempdir");
        let file = dir.path().join("app/assets/javascripts/app.js");
        touch(&file);

        let resolved =
            resolve(dir.path(), &FileSelectors::One("*.js".into())).expect("resolve should work");
        assert_eq!(resolved, [file]);
    }

    #[test]
    fn selector_sequence_probes_the_nested_path_only() {
        let dir = TempDir::new().expect("tempdir");
        let nested = dir.path().join("app/assets/javascripts/angular/controllers.js");
        touch(&nested);
        touch(&dir.path().join("app/assets/javascripts/direct.js"));

        let selectors = FileSelectors::Many(vec!["angular".into(), "*.js".into()]);
        let resolved = resolve(dir.path(), &selectors).expect("resolve should work");
        assert_eq!(resolved, [nested]);
    }

    #[test]
    fn one_pattern_can_match_through_multiple_roots() {
        let dir = TempDir::new().expect("tempdir");
        let app = dir.path().join("app/assets/javascripts/cart.js");
        let lib = dir.path().join("lib/assets/javascripts/cart.js");
        touch(&app);
        touch(&lib);

        let resolved =
            resolve(dir.path(), &FileSelectors::One("cart.js".into())).expect("resolve should work");
        assert_eq!(resolved, [app, lib]);
    }

    #[test]
    fn zero_matches_is_an_empty_result() {
        let dir = TempDir::new().expect("tempdir");
        let resolved =
            resolve(dir.path(), &FileSelectors::One("*.js".into())).expect("resolve should work");
        assert!(resolved.is_empty());
    }

    #[test]
    fn malformed_pattern_is_rejected() {
        let dir = TempDir::new().expect("tempdir");
        let err = resolve(dir.path(), &FileSelectors::One("[".into())).unwrap_err();
        assert!(matches!(err, ResolveError::Pattern { .. }));
    }
}
