//! Prompt and tool descriptor storage for aide.
//!
//! Everything lives under a single storage root (by default `~/.aide`):
//!
//! ```text
//! ~/.aide/
//!   claude/
//!     review.txt        # one prompt per (tool, category)
//!   cursor/
//!     backend.txt
//!   tools/
//!     vscode.json       # one descriptor per registered tool
//! ```
//!
//! [`PromptStore`] is the only component that touches this layout.

pub mod config;
pub mod error;
pub mod schema;
pub mod store;

pub use config::StoreConfig;
pub use error::{Error, Result};
pub use schema::{DEFAULT_SEPARATOR, ToolDescriptor};
pub use store::PromptStore;
