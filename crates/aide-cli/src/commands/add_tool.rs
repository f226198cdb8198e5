//! Register a new tool

use colored::Colorize;

use aide_store::ToolDescriptor;
use aide_tools::ToolRegistry;

use crate::error::{CliError, Result};
use crate::interactive::descriptor_fields;

/// Run the add-tool command
pub fn run_add_tool(
    registry: &ToolRegistry,
    name: &str,
    file: &str,
    description: &str,
    header: Option<String>,
    separator: Option<String>,
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CliError::user("Tool name must not be empty"));
    }

    println!("{} Adding tool: {}", "=>".blue().bold(), name.cyan());
    println!("   File: {file}");
    println!("   Description: {description}");

    let fields = descriptor_fields(header, separator)?;
    let descriptor = ToolDescriptor::new(name, file, description)
        .with_header(fields.header)
        .with_separator(fields.separator);

    registry.register(&descriptor)?;

    println!("{} Tool {} added.", "OK".green().bold(), name.cyan());
    println!(
        "   Save prompts with: {}",
        format!("aide set {name} <category> <prompt>").cyan()
    );
    Ok(())
}
