//! Storage root configuration
//!
//! The root is resolved once at startup and passed to the store explicitly.

use crate::{Error, Result};
use aide_fs::NormalizedPath;

/// Directory name of the storage root under the home directory.
pub const STORE_DIR_NAME: &str = ".aide";

/// Subdirectory holding tool descriptors.
pub const DESCRIPTORS_DIR: &str = "tools";

/// Extension of prompt files.
pub const PROMPT_EXTENSION: &str = "txt";

/// Extension of descriptor files.
pub const DESCRIPTOR_EXTENSION: &str = "json";

/// Location of the prompt and descriptor storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    root: NormalizedPath,
}

impl StoreConfig {
    /// Use `~/.aide` as the storage root.
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or(Error::HomeDirNotFound)?;
        Ok(Self::with_root(NormalizedPath::new(home).join(STORE_DIR_NAME)))
    }

    /// Use an explicit storage root.
    pub fn with_root(root: impl Into<NormalizedPath>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Directory holding the prompts of one tool.
    pub fn tool_dir(&self, tool: &str) -> NormalizedPath {
        self.root.join(tool)
    }

    /// File holding the prompt for `(tool, category)`.
    pub fn prompt_file(&self, tool: &str, category: &str) -> NormalizedPath {
        self.tool_dir(tool)
            .join(&format!("{category}.{PROMPT_EXTENSION}"))
    }

    /// Directory holding all descriptors.
    pub fn descriptors_dir(&self) -> NormalizedPath {
        self.root.join(DESCRIPTORS_DIR)
    }

    /// File holding the descriptor named `name`.
    pub fn descriptor_file(&self, name: &str) -> NormalizedPath {
        self.descriptors_dir()
            .join(&format!("{name}.{DESCRIPTOR_EXTENSION}"))
    }
}
