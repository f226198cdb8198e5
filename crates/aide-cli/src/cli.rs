//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// aide - Manage reusable prompts for AI coding tools
#[derive(Parser, Debug)]
#[command(name = "aide")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Save a prompt for a tool and category
    ///
    /// Examples:
    ///   aide set claude review "Check for security issues and slow queries"
    ///   aide set cursor backend "Focus on error handling"
    Set {
        /// Tool name (claude, cursor, or a tool added with add-tool)
        tool: String,

        /// Category label
        category: String,

        /// Prompt text, stored verbatim
        prompt: String,
    },

    /// Merge saved prompts into the tool's file in the current directory
    ///
    /// Examples:
    ///   aide apply claude review
    ///   aide apply cursor backend,frontend
    Apply {
        /// Tool name
        tool: String,

        /// Comma-separated categories
        categories: String,

        /// Show the resulting file instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// List saved categories for one tool or for all tools
    List {
        /// Restrict the listing to this tool
        tool: Option<String>,
    },

    /// List built-in and registered tools
    ListTools,

    /// Register a new tool
    ///
    /// Examples:
    ///   aide add-tool vscode .vscode/settings.json "VS Code settings"
    ///   aide add-tool windsurf .windsurfrules "Windsurf rules" --separator "# ==="
    AddTool {
        /// Tool name
        name: String,

        /// Target file, relative to the project root
        file: String,

        /// Short description, used in the section marker
        description: String,

        /// Header written at the top of a newly created file
        #[arg(long)]
        header: Option<String>,

        /// Line separating appended sections and prompts
        #[arg(long)]
        separator: Option<String>,
    },
}
