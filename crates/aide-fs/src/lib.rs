//! Filesystem primitives for aide
//!
//! Provides normalized path handling, absence-tolerant reads, whole-file
//! atomic writes and a small JSON record store.

pub mod error;
pub mod io;
pub mod path;
pub mod record;

pub use error::{Error, Result};
pub use io::{DirEntry, EntryKind};
pub use path::{NormalizedPath, validate_path_segment};
pub use record::RecordStore;
