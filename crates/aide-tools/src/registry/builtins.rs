//! Built-in tool table

use super::ToolKind;
use crate::{claude, cursor};

/// A tool aide knows without a stored descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinTool {
    /// Machine identifier (e.g., "claude")
    pub name: &'static str,
    /// Display name (e.g., "Claude Code")
    pub display_name: &'static str,
    /// Target file relative to the project root
    pub file_name: &'static str,
}

impl BuiltinTool {
    /// The rendering variant for this tool.
    pub fn kind(&self) -> ToolKind {
        match self.name {
            cursor::NAME => ToolKind::Cursor,
            _ => ToolKind::Claude,
        }
    }
}

/// All built-in tools, in presentation order.
pub const BUILTIN_TOOLS: &[BuiltinTool] = &[
    BuiltinTool {
        name: claude::NAME,
        display_name: "Claude Code",
        file_name: claude::FILE_NAME,
    },
    BuiltinTool {
        name: cursor::NAME,
        display_name: "Cursor",
        file_name: cursor::FILE_NAME,
    },
];

/// Look up a built-in tool by name.
pub fn builtin(name: &str) -> Option<&'static BuiltinTool> {
    BUILTIN_TOOLS.iter().find(|tool| tool.name == name)
}

/// Names of all built-in tools, in presentation order.
pub fn builtin_names() -> Vec<&'static str> {
    BUILTIN_TOOLS.iter().map(|tool| tool.name).collect()
}
