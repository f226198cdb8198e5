//! Tool descriptor schema - stored as `tools/<name>.json`
//!
//! A descriptor tells aide how to render a user-registered tool's target
//! file.
//!
//! # Example JSON
//!
//! ```json
//! {
//!   "name": "vscode",
//!   "fileName": ".vscode/settings.json",
//!   "description": "VS Code settings",
//!   "header": "",
//!   "separator": "# ---"
//! }
//! ```
//!
//! The schema has no version field. Empty `header` and `separator` strings
//! mean "not supplied".

use serde::{Deserialize, Serialize};

/// Separator used when a descriptor does not supply its own.
pub const DEFAULT_SEPARATOR: &str = "# ---";

/// Persisted description of a user-registered tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Unique tool name (e.g., "vscode")
    pub name: String,
    /// Target file path relative to the project root
    #[serde(rename = "fileName")]
    pub target_file_name: String,
    /// Human-readable label, shown in the marker line
    #[serde(default)]
    pub description: String,
    /// Written once, only when the target file does not exist yet
    #[serde(default)]
    pub header: String,
    /// Delimiter between the managed section and existing content, and
    /// between prompts
    #[serde(default)]
    pub separator: String,
}

impl ToolDescriptor {
    /// Create a descriptor with no header and the default separator.
    pub fn new(
        name: impl Into<String>,
        target_file_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            target_file_name: target_file_name.into(),
            description: description.into(),
            header: String::new(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Set the header (builder pattern).
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Set the separator (builder pattern). An empty string selects the default.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// The configured header, if any.
    pub fn header(&self) -> Option<&str> {
        if self.header.is_empty() {
            None
        } else {
            Some(&self.header)
        }
    }

    /// The configured separator, falling back to [`DEFAULT_SEPARATOR`].
    pub fn separator(&self) -> &str {
        if self.separator.is_empty() {
            DEFAULT_SEPARATOR
        } else {
            &self.separator
        }
    }
}
