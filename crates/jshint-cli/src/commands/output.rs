//! Shared output formatting for lint results.

use anyhow::Result;
use jshint_core::LintResult;

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    for (path, diagnostics) in result.iter() {
        if diagnostics.is_empty() {
            continue;
        }
        println!("{}", path.display());
        for diagnostic in diagnostics {
            println!(
                "  {}:{}  {}",
                diagnostic.line, diagnostic.column, diagnostic.message
            );
        }
        println!();
    }

    let problems = result.problem_count();
    let summary_color = if problems > 0 { "\x1b[31m" } else { "\x1b[32m" };
    println!(
        "{}Found {} problem(s) in {} file(s)\x1b[0m",
        summary_color,
        problems,
        result.files_checked()
    );
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for (path, diagnostics) in result.iter() {
        for diagnostic in diagnostics {
            println!(
                "{}:{}:{}: {}",
                path.display(),
                diagnostic.line,
                diagnostic.column,
                diagnostic.message
            );
        }
    }
}
