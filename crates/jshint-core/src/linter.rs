//! Lint orchestration: configuration, file resolution, engine runs, and
//! the per-file result mapping.

use crate::config::{Config, ConfigError, DEFAULT_CONFIG_PATH};
use crate::diagnostics::LintResult;
use crate::engine::{EngineError, LintEngine, DEFAULT_ENGINE_PATH};
use crate::resolver::{self, ResolveError};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Errors that can abort a lint run.
///
/// Every variant is fatal. The run stops at the first error and no partial
/// result is returned.
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// File selectors could not be expanded.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The engine context could not be set up.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// A resolved file vanished or became unreadable before its content
    /// was read.
    #[error("failed to read {path}: {source}")]
    FileRead {
        /// The file that could not be read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The engine raised while checking one file.
    #[error("checking {path}: {source}")]
    Eval {
        /// The file being checked when the engine raised.
        path: PathBuf,
        /// The underlying engine error.
        source: EngineError,
    },
}

/// Builder for configuring a [`Linter`].
#[derive(Debug, Default)]
pub struct LinterBuilder {
    project_root: Option<PathBuf>,
    config_path: Option<PathBuf>,
    engine_path: Option<PathBuf>,
    engine_source: Option<String>,
}

impl LinterBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the host project root (default: current directory).
    #[must_use]
    pub fn project_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_root = Some(path.into());
        self
    }

    /// Sets the configuration document path (default:
    /// `config/jshint.yml` under the project root).
    #[must_use]
    pub fn config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Sets the engine artifact path (default:
    /// `vendor/assets/javascripts/jshint.js` under the project root).
    #[must_use]
    pub fn engine_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.engine_path = Some(path.into());
        self
    }

    /// Supplies the engine source directly, skipping the artifact read.
    ///
    /// Takes precedence over [`engine_path`](Self::engine_path).
    #[must_use]
    pub fn engine_source(mut self, source: impl Into<String>) -> Self {
        self.engine_source = Some(source.into());
        self
    }

    /// Loads the configuration, compiles the engine, and builds the
    /// linter. Both fatal setup failures surface here, before any file is
    /// touched.
    ///
    /// # Errors
    ///
    /// Returns [`LintError::Config`] when the configuration cannot be
    /// loaded and [`LintError::Engine`] when the engine context cannot be
    /// set up.
    pub fn build(self) -> Result<Linter, LintError> {
        let root = self.project_root.unwrap_or_else(|| PathBuf::from("."));
        let project_root = if root.is_absolute() {
            root
        } else if let Ok(cwd) = std::env::current_dir() {
            cwd.join(root)
        } else {
            root
        };

        let config_path = self
            .config_path
            .unwrap_or_else(|| project_root.join(DEFAULT_CONFIG_PATH));
        let config = Config::load(&config_path)?;

        let engine = match self.engine_source {
            Some(source) => LintEngine::from_source(&source)?,
            None => {
                let engine_path = self
                    .engine_path
                    .unwrap_or_else(|| project_root.join(DEFAULT_ENGINE_PATH));
                LintEngine::load(&engine_path)?
            }
        };

        Ok(Linter {
            project_root,
            config,
            engine,
        })
    }
}

/// Runs the engine over every resolved file and aggregates diagnostics.
///
/// Holds the engine context as an exclusively owned handle for its whole
/// lifetime. One instance serves one project; reusing it across runs keeps
/// the compiled engine warm, but access must stay serialized.
#[derive(Debug)]
pub struct Linter {
    project_root: PathBuf,
    config: Config,
    engine: LintEngine,
}

impl Linter {
    /// Creates a new builder for configuring a linter.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the resolved project root.
    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Lints every configured file and returns the per-file diagnostics.
    ///
    /// Files are processed serially, in resolution order, against the one
    /// shared engine context. Diagnostics keep the order the engine
    /// reported them; a clean file is recorded with an empty sequence.
    ///
    /// # Errors
    ///
    /// See [`LintError`]; the first error aborts the run.
    pub fn run(&mut self) -> Result<LintResult, LintError> {
        let mut result = LintResult::new();

        let selectors = self.config.file_selectors();
        if selectors.is_empty() {
            debug!("no file selectors configured, nothing to lint");
            return Ok(result);
        }

        let files = resolver::resolve(&self.project_root, selectors)?;
        info!(
            "linting {} file(s) under {}",
            files.len(),
            self.project_root.display()
        );

        // Serialized once; every file in the run shares the same literals.
        let options_json = Value::Object(self.config.lint_options()).to_string();
        let globals_json = Value::Object(self.config.globals()).to_string();

        for path in files {
            let content =
                std::fs::read_to_string(&path).map_err(|source| LintError::FileRead {
                    path: path.clone(),
                    source,
                })?;
            let content_json = Value::String(content).to_string();

            debug!("checking {}", path.display());
            let diagnostics = self
                .engine
                .evaluate(&content_json, &options_json, &globals_json)
                .map_err(|source| LintError::Eval {
                    path: path.clone(),
                    source,
                })?;
            result.record(path, diagnostics);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const NOOP_ENGINE: &str = "function JSHINT() { JSHINT.errors = []; return true; }";

    fn write_config(dir: &TempDir, content: &str) {
        let config_dir = dir.path().join("config");
        fs::create_dir_all(&config_dir).expect("create config dir");
        fs::write(config_dir.join("jshint.yml"), content).expect("write config");
    }

    // -- Builder --

    #[test]
    fn missing_config_fails_before_anything_runs() {
        let dir = TempDir::new().expect("tempdir");
        let err = Linter::builder()
            .project_root(dir.path())
            .engine_source(NOOP_ENGINE)
            .build()
            .unwrap_err();
        assert!(matches!(err, LintError::Config(ConfigError::NotFound { .. })));
    }

    #[test]
    fn missing_engine_artifact_fails_at_build() {
        let dir = TempDir::new().expect("tempdir");
        write_config(&dir, "files: \"*.js\"\n");
        let err = Linter::builder().project_root(dir.path()).build().unwrap_err();
        assert!(matches!(err, LintError::Engine(EngineError::Missing { .. })));
    }

    #[test]
    fn engine_artifact_is_loaded_from_the_conventional_path() {
        let dir = TempDir::new().expect("tempdir");
        write_config(&dir, "files: \"*.js\"\n");

        let vendor = dir.path().join("vendor/assets/javascripts");
        fs::create_dir_all(&vendor).expect("create vendor dirs");
        fs::write(vendor.join("jshint.js"), NOOP_ENGINE).expect("write engine");

        let app = dir.path().join("app/assets/javascripts");
        fs::create_dir_all(&app).expect("create app dirs");
        fs::write(app.join("main.js"), "var a = 1;\n").expect("write asset");

        let mut linter = Linter::builder()
            .project_root(dir.path())
            .build()
            .expect("linter should build");
        let result = linter.run().expect("run should succeed");

        // The engine artifact itself is matched through the vendor root.
        assert_eq!(result.files_checked(), 2);
        assert_eq!(
            result.diagnostics_for(&app.join("main.js")),
            Some(&[][..])
        );
    }

    #[test]
    fn explicit_config_path_wins_over_the_default() {
        let dir = TempDir::new().expect("tempdir");
        write_config(&dir, "files: \"*.js\"\n");
        let other = dir.path().join("other.yml");
        fs::write(&other, "files: []\n").expect("write other config");

        let mut linter = Linter::builder()
            .project_root(dir.path())
            .config_path(&other)
            .engine_source(NOOP_ENGINE)
            .build()
            .expect("linter should build");
        assert!(linter.config().file_selectors().is_empty());
        assert!(linter.run().expect("run should succeed").is_empty());
    }
}
