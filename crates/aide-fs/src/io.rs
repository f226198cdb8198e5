//! Whole-file I/O operations

use crate::{Error, NormalizedPath, Result};
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};

/// Write content atomically to a file.
///
/// Writes to a temp file next to the target, then renames it over the
/// target, so readers see either the old or the new content. Missing parent
/// directories are created.
///
/// An existing target is overwritten in place: symlinks are followed to the
/// file they point at and that file's permissions are kept. The advisory
/// lock only covers the temp file; it does not serialize separate
/// read-modify-write cycles.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let requested = path.to_native();

    if let Some(parent) = requested.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let native_path = fs::canonicalize(&requested).unwrap_or(requested);
    let permissions = fs::metadata(&native_path).ok().map(|m| m.permissions());

    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    let written = temp_file
        .write_all(content)
        .and_then(|_| temp_file.sync_all())
        .and_then(|_| match permissions {
            Some(permissions) => temp_file.set_permissions(permissions),
            None => Ok(()),
        });
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(&temp_path, e));
    }

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    if let Err(e) = fs::rename(&temp_path, &native_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(&native_path, e));
    }

    tracing::debug!(path = %path, bytes = content.len(), "wrote file");
    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read raw file content, treating a missing file as empty.
///
/// The bytes are returned unchanged, whatever their encoding. Any other
/// failure (permissions, path is a directory) is still reported.
pub fn read_bytes_or_empty(path: &NormalizedPath) -> Result<Vec<u8>> {
    let native_path = path.to_native();
    match fs::read(&native_path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(Error::io(&native_path, e)),
    }
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Kind of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Other,
}

/// A single entry returned by [`list_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

/// List the entries of a directory, sorted by name.
///
/// A missing directory yields an empty list. Entries whose names are not
/// valid UTF-8 are skipped.
pub fn list_dir(path: &NormalizedPath) -> Result<Vec<DirEntry>> {
    let native_path = path.to_native();
    let read_dir = match fs::read_dir(&native_path) {
        Ok(rd) => rd,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(Error::io(&native_path, e)),
    };

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| Error::io(&native_path, e))?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        let file_type = entry
            .file_type()
            .map_err(|e| Error::io(entry.path(), e))?;
        let kind = if file_type.is_dir() {
            EntryKind::Dir
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };
        entries.push(DirEntry { name, kind });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Create a directory and all of its parents.
pub fn ensure_dir(path: &NormalizedPath) -> Result<()> {
    let native_path = path.to_native();
    fs::create_dir_all(&native_path).map_err(|e| Error::io(&native_path, e))
}
