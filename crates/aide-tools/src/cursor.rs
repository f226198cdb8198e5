//! Cursor rendering style.
//!
//! Manages `.cursorrules` at the project root. The marker is two comment
//! lines with no blank line between them.

/// Slug of the built-in Cursor tool.
pub const NAME: &str = "cursor";

/// Target file, relative to the project root.
pub const FILE_NAME: &str = ".cursorrules";

/// Inserted between consecutive prompts.
pub const PROMPT_SEPARATOR: &str = "\n---\n\n";

/// Marker announcing an appended section.
pub fn marker_section(timestamp: &str) -> String {
    format!("# aide prompts\n# The following rules were added by aide on {timestamp}.\n\n")
}
