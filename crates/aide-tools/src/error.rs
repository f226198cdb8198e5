//! Error types for aide-tools

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing a tool's target file failed
    #[error("Failed to {action}: {source}")]
    TargetFile {
        action: &'static str,
        #[source]
        source: aide_fs::Error,
    },

    #[error(transparent)]
    Store(#[from] aide_store::Error),

    #[error(
        "Unsupported tool: {name} (built-in tools: {builtins}, or a tool added with 'aide add-tool')"
    )]
    UnsupportedTool { name: String, builtins: String },

    #[error("'{name}' is a built-in tool and cannot be registered")]
    ReservedName { name: String },

    #[error("Invalid tool descriptor '{name}': {reason}")]
    InvalidDescriptor { name: String, reason: String },

    #[error("No prompts to apply")]
    NoPrompts,
}

impl Error {
    pub(crate) fn read_target(source: aide_fs::Error) -> Self {
        Self::TargetFile {
            action: "read target file for merge",
            source,
        }
    }

    pub(crate) fn write_target(source: aide_fs::Error) -> Self {
        Self::TargetFile {
            action: "write target file",
            source,
        }
    }
}
