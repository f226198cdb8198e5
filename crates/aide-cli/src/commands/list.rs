//! List commands for prompts and tools

use colored::Colorize;

use aide_tools::ToolRegistry;

use crate::error::Result;

/// Run the list command
///
/// With a tool, lists that tool's categories; otherwise every tool that has
/// saved prompts.
pub fn run_list(registry: &ToolRegistry, tool: Option<&str>) -> Result<()> {
    let store = registry.store();

    if let Some(tool) = tool {
        registry.validate_tool(tool)?;
        let categories = store.list_prompts(tool)?;
        if categories.is_empty() {
            println!("No prompts saved for {}.", tool.cyan());
            return Ok(());
        }

        println!("{}", format!("Prompts for {tool}").bold());
        for category in categories {
            println!("  - {category}");
        }
        return Ok(());
    }

    let all = store.list_all_prompts()?;
    if all.values().all(|c| c.is_empty()) {
        println!("No prompts saved.");
        return Ok(());
    }

    println!("{}", "Saved prompts".bold());
    for (tool, categories) in all.iter().filter(|(_, c)| !c.is_empty()) {
        println!();
        println!("{}:", tool.cyan().bold());
        for category in categories {
            println!("  - {category}");
        }
    }
    Ok(())
}

/// Run the list-tools command
pub fn run_list_tools(registry: &ToolRegistry) -> Result<()> {
    let entries = registry.list()?;
    let (builtins, registered): (Vec<_>, Vec<_>) = entries.iter().partition(|e| e.builtin);

    println!("{}", "Available Tools".bold());
    println!();

    println!("{}:", "Built-in".cyan().bold());
    for entry in &builtins {
        println!(
            "  {:<14} {} ({})",
            entry.name.green(),
            entry.description,
            entry.target_file_name.dimmed()
        );
    }

    if !registered.is_empty() {
        println!();
        println!("{}:", "Registered".cyan().bold());
        for entry in &registered {
            println!(
                "  {:<14} {} ({})",
                entry.name.green(),
                entry.description,
                entry.target_file_name.dimmed()
            );
        }
    }

    println!();
    println!("{} tools available.", entries.len());
    println!();
    println!("Usage:");
    println!("  aide set <tool> <category> <prompt>");
    println!("  aide apply <tool> <category>[,<category>...]");
    println!("  aide add-tool <name> <file> <description>");
    Ok(())
}
