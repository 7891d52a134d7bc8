//! # jshint-core
//!
//! Runs the JSHint engine over a host project's JavaScript assets from
//! inside an embedded JavaScript context.
//!
//! The pipeline is deliberately small:
//!
//! - [`Config`] loads the project's `config/jshint.yml` and splits rule
//!   options from global-identifier allowances.
//! - [`resolver`] expands the configured glob selectors under the
//!   conventional asset roots.
//! - [`LintEngine`] owns one embedded context preloaded with the engine
//!   source and evaluates one file per call.
//! - [`Linter`] ties the three together and returns a [`LintResult`]
//!   mapping each checked file to the diagnostics the engine reported.
//!
//! ## Example
//!
//! ```no_run
//! use jshint_core::Linter;
//!
//! # fn main() -> Result<(), jshint_core::LintError> {
//! let mut linter = Linter::builder().project_root("/srv/app").build()?;
//! let result = linter.run()?;
//! for (path, diagnostics) in result.iter() {
//!     println!("{}: {} problem(s)", path.display(), diagnostics.len());
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod diagnostics;
mod engine;
mod linter;

pub mod resolver;

pub use config::{Config, ConfigError, FileSelectors, DEFAULT_CONFIG_PATH};
pub use diagnostics::{Diagnostic, LintResult};
pub use engine::{EngineError, LintEngine, DEFAULT_ENGINE_PATH};
pub use linter::{LintError, Linter, LinterBuilder};
pub use resolver::{ResolveError, ASSET_ROOTS};
