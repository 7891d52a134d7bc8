//! Init command implementation.

use anyhow::{bail, Context, Result};
use jshint_core::DEFAULT_CONFIG_PATH;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# JSHint configuration
#
# files: glob pattern(s) expanded under each script-asset root
#   (app/assets/javascripts, vendor/assets/javascripts,
#   lib/assets/javascripts)
# options: rule options handed to the engine verbatim; see
#   https://jshint.com/docs/options/
# options.globals: identifiers the linted code may assume exist
#   (true = writable, false = read-only)

files: "**/*.js"

options:
  eqeqeq: true
  undef: true
  globals:
    "$": true
    jQuery: true
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("."), force)?;

    println!("Created {DEFAULT_CONFIG_PATH}");
    println!("\nNext steps:");
    println!("  1. Edit {DEFAULT_CONFIG_PATH} to configure options");
    println!("  2. Run: jshint-rs lint");

    Ok(())
}

/// Writes the starter document under `root`.
fn write_config(root: &Path, force: bool) -> Result<()> {
    let config_path = root.join(DEFAULT_CONFIG_PATH);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&config_path, DEFAULT_CONFIG)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jshint_core::Config;
    use tempfile::TempDir;

    #[test]
    fn starter_config_parses() {
        let config = Config::parse(DEFAULT_CONFIG).expect("starter config should parse");
        assert!(!config.file_selectors().is_empty());
        assert!(config.globals().contains_key("jQuery"));
        assert!(!config.lint_options().contains_key("globals"));
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = TempDir::new().expect("tempdir");
        write_config(dir.path(), false).expect("first write");
        assert!(write_config(dir.path(), false).is_err());
        write_config(dir.path(), true).expect("forced overwrite");
    }
}
