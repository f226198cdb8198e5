//! Claude Code rendering style.
//!
//! Manages `CLAUDE.md` at the project root with a markdown marker section.

/// Slug of the built-in Claude tool.
pub const NAME: &str = "claude";

/// Target file, relative to the project root.
pub const FILE_NAME: &str = "CLAUDE.md";

/// Inserted between consecutive prompts.
pub const PROMPT_SEPARATOR: &str = "\n---\n\n";

/// Marker announcing an appended section.
pub fn marker_section(timestamp: &str) -> String {
    format!("# aide prompts\n\nThe following prompts were added by aide on {timestamp}.\n\n")
}
