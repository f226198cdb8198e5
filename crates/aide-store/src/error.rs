//! Error types for aide-store

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A filesystem failure while performing `action`
    #[error("Failed to {action}: {source}")]
    Storage {
        action: String,
        #[source]
        source: aide_fs::Error,
    },

    #[error("Prompt not found: {tool}/{category}")]
    PromptNotFound { tool: String, category: String },

    #[error("Tool descriptor not found: {name}")]
    ToolNotFound { name: String },

    #[error("Invalid {kind} name '{name}': {reason}")]
    InvalidName {
        kind: &'static str,
        name: String,
        reason: String,
    },

    #[error("Could not parse tool descriptor '{name}': {message}")]
    Parse { name: String, message: String },

    #[error("Could not determine the home directory")]
    HomeDirNotFound,
}

impl Error {
    pub(crate) fn storage(action: impl Into<String>, source: aide_fs::Error) -> Self {
        Self::Storage {
            action: action.into(),
            source,
        }
    }

    /// True for missing prompts and missing descriptors.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PromptNotFound { .. } | Self::ToolNotFound { .. })
    }
}
