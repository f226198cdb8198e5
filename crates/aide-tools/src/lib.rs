//! Tool registry, dedup and file generation for aide.
//!
//! # Architecture
//!
//! Tools come in two flavours:
//!
//! 1. **Built-in tools** - `claude` (`CLAUDE.md`) and `cursor`
//!    (`.cursorrules`), with fixed file names and marker wording.
//!
//! 2. **Descriptor tools** - registered with `aide add-tool` and stored as a
//!    [`ToolDescriptor`](aide_store::ToolDescriptor); rendering follows the
//!    descriptor's header and separator.
//!
//! [`ToolRegistry`] resolves a name to a [`ToolKind`], always preferring
//! built-ins. [`render`] is a pure function of the kind, the existing file
//! content and the prompts; [`FileGenerator`] wraps it with the file read
//! and write. [`apply()`] ties everything together.

pub mod apply;
pub mod claude;
pub mod cursor;
pub mod dedup;
pub mod error;
pub mod generator;
pub mod generic;
pub mod registry;

pub use apply::{ApplyOptions, ApplyReport, apply, parse_categories};
pub use dedup::{DuplicateFilter, filter_duplicates};
pub use error::{Error, Result};
pub use generator::{FileGenerator, TIMESTAMP_FORMAT, render};
pub use registry::{BUILTIN_TOOLS, BuiltinTool, ToolEntry, ToolKind, ToolRegistry};
