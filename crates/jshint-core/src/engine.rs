//! Bridge to the JSHint engine running inside an embedded JavaScript
//! context.
//!
//! The context is created once, seeded with a minimal `window` stub, and
//! loaded with the engine source. Every subsequent evaluation reuses the
//! same context. The engine repopulates its error list at the start of
//! each invocation; that per-call clearing is part of its public contract
//! and is relied upon here, never reimplemented.

use crate::diagnostics::Diagnostic;
use boa_engine::{Context, Source};
use std::path::{Path, PathBuf};

/// Conventional engine artifact location under the host project root.
pub const DEFAULT_ENGINE_PATH: &str = "vendor/assets/javascripts/jshint.js";

/// Engine bridge errors.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The engine artifact could not be read.
    #[error("lint engine artifact not readable: {path}: {source}")]
    Missing {
        /// Path to the artifact.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The engine source failed to load into the context.
    #[error("failed to load lint engine: {message}")]
    Compile {
        /// Error reported by the context.
        message: String,
    },

    /// An evaluation raised inside the context.
    #[error("engine evaluation raised: {message}")]
    Eval {
        /// Error reported by the context.
        message: String,
    },
}

/// An embedded JavaScript context holding one compiled copy of the engine.
///
/// The context is an exclusively owned handle. The engine overwrites its
/// result state on every call instead of returning isolated values, so a
/// shared instance must never be invoked concurrently; `evaluate` taking
/// `&mut self` makes the borrow checker enforce that.
pub struct LintEngine {
    context: Context,
}

impl std::fmt::Debug for LintEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LintEngine").finish_non_exhaustive()
    }
}

impl LintEngine {
    /// Compiles the engine source into a fresh context.
    ///
    /// The engine expects a browser-like host. It only needs the `window`
    /// name to exist, not to work, so an empty object is bound before the
    /// source is loaded.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Compile`] when the source does not evaluate.
    pub fn from_source(engine_source: &str) -> Result<Self, EngineError> {
        let mut context = Context::default();
        let bootstrap = format!("var window = {{}};\n{engine_source}");
        context
            .eval(Source::from_bytes(&bootstrap))
            .map_err(|e| EngineError::Compile {
                message: e.to_string(),
            })?;
        Ok(Self { context })
    }

    /// Reads the engine artifact from disk and compiles it.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Missing`] when the artifact cannot be read
    /// and [`EngineError::Compile`] when it does not evaluate.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let engine_source =
            std::fs::read_to_string(path).map_err(|source| EngineError::Missing {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_source(&engine_source)
    }

    /// Runs the engine once and returns the diagnostics it reported.
    ///
    /// All three arguments must already be JSON literals; they are spliced
    /// into the invocation unquoted. The returned sequence keeps the
    /// engine's own reporting order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Eval`] when the invocation raises or the
    /// reported error list cannot be decoded.
    pub fn evaluate(
        &mut self,
        content_json: &str,
        options_json: &str,
        globals_json: &str,
    ) -> Result<Vec<Diagnostic>, EngineError> {
        let program = format!(
            "JSHINT({content_json}, {options_json}, {globals_json});\nJSON.stringify(JSHINT.errors);"
        );

        let reported = self
            .context
            .eval(Source::from_bytes(&program))
            .map_err(|e| EngineError::Eval {
                message: e.to_string(),
            })?;
        let raw = reported
            .to_string(&mut self.context)
            .map_err(|e| EngineError::Eval {
                message: e.to_string(),
            })?
            .to_std_string_escaped();

        // After a fatal stop the engine appends a null sentinel to its
        // error list; those entries carry no diagnostic.
        let entries: Vec<Option<Diagnostic>> =
            serde_json::from_str(&raw).map_err(|e| EngineError::Eval {
                message: e.to_string(),
            })?;
        Ok(entries.into_iter().flatten().collect())
    }
}
