//! aide CLI
//!
//! Saves prompts per tool and category under `~/.aide` and merges them into
//! the tool's file in the current directory.

mod cli;
mod commands;
mod error;
mod interactive;
mod logging;

use clap::Parser;
use colored::Colorize;

use aide_store::{PromptStore, StoreConfig};
use aide_tools::ToolRegistry;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Prompt manager for AI coding tools", "aide".green().bold());
            println!();
            println!("Run {} for available commands.", "aide --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    let config = StoreConfig::from_home()?;
    tracing::debug!(root = %config.root(), "using prompt store");
    let registry = ToolRegistry::new(PromptStore::new(config));

    match cmd {
        Commands::Set {
            tool,
            category,
            prompt,
        } => commands::run_set(&registry, &tool, &category, &prompt),
        Commands::Apply {
            tool,
            categories,
            dry_run,
        } => {
            let cwd = std::env::current_dir()?;
            commands::run_apply(&registry, &cwd, &tool, &categories, dry_run)
        }
        Commands::List { tool } => commands::run_list(&registry, tool.as_deref()),
        Commands::ListTools => commands::run_list_tools(&registry),
        Commands::AddTool {
            name,
            file,
            description,
            header,
            separator,
        } => commands::run_add_tool(&registry, &name, &file, &description, header, separator),
    }
}
