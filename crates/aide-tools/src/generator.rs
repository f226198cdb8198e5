//! Target file rendering
//!
//! Every tool follows the same append shape:
//!
//! ```text
//! <existing content or header>\n\n   (only one of the two, either may be absent)
//! <marker section with timestamp>
//! <prompt 1>\n
//! <separator>
//! <prompt 2>\n
//! ```
//!
//! Existing content is never edited, only extended, and is kept byte for
//! byte whatever its encoding.

use crate::{Error, Result};
use crate::registry::ToolKind;
use aide_fs::{NormalizedPath, io};
use chrono::NaiveDateTime;

/// Format of the timestamp in marker sections.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Compose the new full content of a target file.
///
/// If `existing` is non-empty it is kept verbatim and followed by a blank
/// line. Otherwise the kind's header, if any, opens the file.
pub fn render(existing: &[u8], prompts: &[String], kind: &ToolKind, timestamp: &str) -> Vec<u8> {
    let mut section =
        String::with_capacity(prompts.iter().map(|p| p.len() + 16).sum::<usize>() + 128);

    if existing.is_empty()
        && let Some(header) = kind.header()
    {
        section.push_str(header);
        section.push_str("\n\n");
    }

    section.push_str(&kind.marker_section(timestamp));

    let separator = kind.prompt_separator();
    for (i, prompt) in prompts.iter().enumerate() {
        if i > 0 {
            section.push_str(&separator);
        }
        section.push_str(prompt);
        section.push('\n');
    }

    let mut content = Vec::with_capacity(existing.len() + 2 + section.len());
    if !existing.is_empty() {
        content.extend_from_slice(existing);
        content.extend_from_slice(b"\n\n");
    }
    content.extend_from_slice(section.as_bytes());
    content
}

/// Renders prompts into a tool's target file.
#[derive(Debug, Clone)]
pub struct FileGenerator {
    kind: ToolKind,
}

impl FileGenerator {
    pub fn new(kind: ToolKind) -> Self {
        Self { kind }
    }

    /// Read `path` (missing means empty) and compose its new content.
    pub fn compose(
        &self,
        path: &NormalizedPath,
        prompts: &[String],
        at: NaiveDateTime,
    ) -> Result<Vec<u8>> {
        let existing = io::read_bytes_or_empty(path).map_err(Error::read_target)?;
        let timestamp = at.format(TIMESTAMP_FORMAT).to_string();
        Ok(render(&existing, prompts, &self.kind, &timestamp))
    }

    /// Append `prompts` to `path`, rewriting the whole file.
    ///
    /// An empty prompt list still writes a marker section; callers filter
    /// first and skip the call when nothing is left.
    pub fn generate(&self, path: &NormalizedPath, prompts: &[String]) -> Result<()> {
        let now = chrono::Local::now().naive_local();
        let content = self.compose(path, prompts, now)?;
        io::write_atomic(path, &content).map_err(Error::write_target)?;
        tracing::debug!(tool = self.kind.name(), path = %path, prompts = prompts.len(), "generated target file");
        Ok(())
    }
}
