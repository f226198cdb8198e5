//! Save a prompt

use colored::Colorize;

use aide_tools::ToolRegistry;

use crate::error::{CliError, Result};

/// Run the set command
pub fn run_set(registry: &ToolRegistry, tool: &str, category: &str, prompt: &str) -> Result<()> {
    registry.validate_tool(tool)?;

    if category.trim().is_empty() {
        return Err(CliError::user("Category name must not be empty"));
    }
    if prompt.trim().is_empty() {
        return Err(CliError::user("Prompt must not be empty"));
    }

    registry.store().save_prompt(tool, category, prompt)?;

    println!(
        "{} Saved prompt {}",
        "OK".green().bold(),
        format!("{tool}/{category}").cyan()
    );
    Ok(())
}
