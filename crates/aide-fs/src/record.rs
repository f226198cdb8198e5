//! JSON record loading and saving

use crate::{Error, NormalizedPath, Result, io};
use serde::{Serialize, de::DeserializeOwned};

/// Loads and saves single-value JSON records.
///
/// Records are pretty-printed on save and written atomically.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordStore;

impl RecordStore {
    /// Create a new RecordStore.
    pub fn new() -> Self {
        Self
    }

    /// Load a record from a file.
    ///
    /// A missing file surfaces as an [`Error::Io`] whose
    /// [`is_not_found`](Error::is_not_found) is true; malformed content as
    /// [`Error::ConfigParse`].
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let content = io::read_text(path)?;
        serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_native(),
            format: "JSON".into(),
            message: e.to_string(),
        })
    }

    /// Save a record to a file, replacing any previous content.
    pub fn save<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<()> {
        let content = serde_json::to_string_pretty(value).map_err(|e| Error::ConfigSerialize {
            path: path.to_native(),
            format: "JSON".into(),
            message: e.to_string(),
        })?;
        io::write_atomic(path, content.as_bytes())
    }
}
