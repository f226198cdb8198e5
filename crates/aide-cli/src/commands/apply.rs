//! Apply saved prompts to the project in the current directory

use std::path::Path;

use colored::Colorize;

use aide_fs::NormalizedPath;
use aide_tools::{ApplyOptions, ToolRegistry, apply, parse_categories};

use crate::error::{CliError, Result};

/// Run the apply command
pub fn run_apply(
    registry: &ToolRegistry,
    project_root: &Path,
    tool: &str,
    categories: &str,
    dry_run: bool,
) -> Result<()> {
    let categories = parse_categories(categories);
    if categories.is_empty() {
        return Err(CliError::user("No categories given"));
    }

    let root = NormalizedPath::new(project_root);
    let options = ApplyOptions::default().dry_run(dry_run);
    let report = apply(registry, tool, &categories, &root, options)?;

    if report.nothing_to_add() {
        println!(
            "{} All prompts are already applied to {}",
            "OK".green().bold(),
            report.target.as_str().cyan()
        );
        return Ok(());
    }

    if let Some(preview) = &report.preview {
        println!(
            "{} Would write {} ({} of {} prompts new):",
            "DRY RUN".yellow().bold(),
            report.target.as_str().cyan(),
            report.appended,
            report.requested
        );
        println!();
        print!("{preview}");
        return Ok(());
    }

    println!(
        "{} Applied prompts to {}",
        "OK".green().bold(),
        report.target.as_str().cyan()
    );
    println!("   Categories: {}", report.categories.join(", "));
    if report.appended < report.requested {
        println!(
            "   {} already present, skipped",
            report.requested - report.appended
        );
    }
    Ok(())
}
