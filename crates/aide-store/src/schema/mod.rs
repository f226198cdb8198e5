//! Persisted record schemas

mod tool;

pub use tool::{DEFAULT_SEPARATOR, ToolDescriptor};
