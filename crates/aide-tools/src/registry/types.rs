//! Core types for the tool registry

use crate::{claude, cursor, generic};
use aide_fs::NormalizedPath;
use aide_store::ToolDescriptor;

/// How a tool's target file is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolKind {
    /// `CLAUDE.md`, markdown marker
    Claude,
    /// `.cursorrules`, comment-line marker
    Cursor,
    /// User-registered tool driven by its descriptor
    Descriptor(ToolDescriptor),
}

impl ToolKind {
    /// The tool name this kind was resolved from.
    pub fn name(&self) -> &str {
        match self {
            Self::Claude => claude::NAME,
            Self::Cursor => cursor::NAME,
            Self::Descriptor(d) => &d.name,
        }
    }

    /// Target file relative to the project root.
    pub fn target_file_name(&self) -> &str {
        match self {
            Self::Claude => claude::FILE_NAME,
            Self::Cursor => cursor::FILE_NAME,
            Self::Descriptor(d) => &d.target_file_name,
        }
    }

    /// Absolute target path under `project_root`.
    pub fn target_path(&self, project_root: &NormalizedPath) -> NormalizedPath {
        project_root.join(self.target_file_name())
    }

    /// Header written only into a new file. Built-ins have none.
    pub fn header(&self) -> Option<&str> {
        match self {
            Self::Claude | Self::Cursor => None,
            Self::Descriptor(d) => d.header(),
        }
    }

    /// Marker section opening each appended block.
    pub fn marker_section(&self, timestamp: &str) -> String {
        match self {
            Self::Claude => claude::marker_section(timestamp),
            Self::Cursor => cursor::marker_section(timestamp),
            Self::Descriptor(d) => generic::marker_section(d, timestamp),
        }
    }

    /// Text inserted between consecutive prompts.
    pub fn prompt_separator(&self) -> String {
        match self {
            Self::Claude => claude::PROMPT_SEPARATOR.to_string(),
            Self::Cursor => cursor::PROMPT_SEPARATOR.to_string(),
            Self::Descriptor(d) => generic::prompt_separator(d),
        }
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Descriptor(_))
    }
}

/// One row of the tool listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolEntry {
    pub name: String,
    pub description: String,
    pub target_file_name: String,
    pub builtin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_target_path() {
        let kind = ToolKind::Descriptor(ToolDescriptor::new(
            "vscode",
            ".vscode/settings.json",
            "VS Code",
        ));
        let root = NormalizedPath::new("/work/app");

        assert_eq!(
            kind.target_path(&root).as_str(),
            "/work/app/.vscode/settings.json"
        );
        assert!(!kind.is_builtin());
    }

    #[test]
    fn test_builtins_have_no_header() {
        assert!(ToolKind::Claude.header().is_none());
        assert!(ToolKind::Cursor.header().is_none());
    }

    #[test]
    fn test_descriptor_header() {
        let desc = ToolDescriptor::new("w", ".windsurfrules", "Windsurf").with_header("# Rules");
        assert_eq!(ToolKind::Descriptor(desc).header(), Some("# Rules"));
    }
}
