//! Lint command implementation.

use anyhow::{Context, Result};
use jshint_core::Linter;
use std::path::Path;

use crate::{project, OutputFormat};

/// Runs the lint command.
pub fn run(
    path: Option<&Path>,
    config: Option<&Path>,
    engine: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let root = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let cwd = std::env::current_dir().context("cannot determine current directory")?;
            project::detect_root(&cwd)
        }
    };

    let mut builder = Linter::builder().project_root(&root);
    if let Some(config) = config {
        builder = builder.config_path(config);
    }
    if let Some(engine) = engine {
        builder = builder.engine_path(engine);
    }

    let mut linter = builder
        .build()
        .with_context(|| format!("failed to set up linting for {}", root.display()))?;

    tracing::info!("linting project at {}", root.display());

    let result = linter.run().context("lint run failed")?;

    super::output::print(&result, format)?;

    if result.has_problems() {
        std::process::exit(1);
    }

    Ok(())
}
