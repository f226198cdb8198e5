//! Tool registry - single source of truth for tool names and targets
//!
//! Built-ins are always checked before stored descriptors.

mod builtins;
mod store;
mod types;

pub use builtins::{BUILTIN_TOOLS, BuiltinTool, builtin, builtin_names};
pub use store::ToolRegistry;
pub use types::{ToolEntry, ToolKind};
