//! Filesystem-backed prompt and descriptor store

use crate::config::{DESCRIPTORS_DIR, DESCRIPTOR_EXTENSION, PROMPT_EXTENSION};
use crate::schema::ToolDescriptor;
use crate::{Error, Result, StoreConfig};
use aide_fs::io::{self, EntryKind};
use aide_fs::{NormalizedPath, RecordStore, validate_path_segment};
use std::collections::{BTreeMap, BTreeSet};

/// Persists prompts keyed by `(tool, category)` and user-defined tool
/// descriptors keyed by name.
///
/// The storage root is created on first use. Reads of absent prompts or
/// descriptors fail with a not-found error; listings of absent directories
/// are empty.
#[derive(Debug, Clone)]
pub struct PromptStore {
    config: StoreConfig,
    records: RecordStore,
}

impl PromptStore {
    /// Create a store rooted at the configured location.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            records: RecordStore::new(),
        }
    }

    /// Get the storage configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Save `text` verbatim as the prompt for `(tool, category)`.
    ///
    /// Overwrites any previous prompt in the same slot.
    pub fn save_prompt(&self, tool: &str, category: &str, text: &str) -> Result<()> {
        check_tool_name(tool)?;
        check_name("category", category)?;
        self.ensure_root()?;

        let path = self.config.prompt_file(tool, category);
        io::ensure_dir(&self.config.tool_dir(tool))
            .and_then(|_| io::write_text(&path, text))
            .map_err(|e| Error::storage(format!("save prompt {tool}/{category}"), e))?;

        tracing::debug!(tool, category, path = %path, "saved prompt");
        Ok(())
    }

    /// Get the prompt stored for `(tool, category)`.
    pub fn get_prompt(&self, tool: &str, category: &str) -> Result<String> {
        check_tool_name(tool)?;
        check_name("category", category)?;
        self.ensure_root()?;

        let path = self.config.prompt_file(tool, category);
        match io::read_text(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.is_not_found() => Err(Error::PromptNotFound {
                tool: tool.to_string(),
                category: category.to_string(),
            }),
            Err(e) => Err(Error::storage(format!("read prompt {tool}/{category}"), e)),
        }
    }

    /// List the categories stored for `tool`.
    ///
    /// A tool that was never used yields an empty set.
    pub fn list_prompts(&self, tool: &str) -> Result<BTreeSet<String>> {
        check_tool_name(tool)?;
        self.ensure_root()?;
        self.categories_in(&self.config.tool_dir(tool))
            .map_err(|e| Error::storage(format!("list prompts for {tool}"), e))
    }

    /// List the categories of every tool that has a prompt directory.
    pub fn list_all_prompts(&self) -> Result<BTreeMap<String, BTreeSet<String>>> {
        self.ensure_root()?;

        let list = |e| Error::storage("list prompts", e);
        let mut all = BTreeMap::new();
        for entry in io::list_dir(self.config.root()).map_err(list)? {
            if entry.kind != EntryKind::Dir || entry.name == DESCRIPTORS_DIR {
                continue;
            }
            let categories = self
                .categories_in(&self.config.tool_dir(&entry.name))
                .map_err(list)?;
            all.insert(entry.name, categories);
        }

        Ok(all)
    }

    /// Save a tool descriptor, replacing any descriptor with the same name.
    pub fn save_tool_descriptor(&self, descriptor: &ToolDescriptor) -> Result<()> {
        check_tool_name(&descriptor.name)?;
        self.ensure_root()?;

        let path = self.config.descriptor_file(&descriptor.name);
        self.records
            .save(&path, descriptor)
            .map_err(|e| Error::storage(format!("save tool descriptor {}", descriptor.name), e))?;

        tracing::debug!(name = %descriptor.name, path = %path, "saved tool descriptor");
        Ok(())
    }

    /// Load the descriptor named `name`.
    pub fn get_tool_descriptor(&self, name: &str) -> Result<ToolDescriptor> {
        check_tool_name(name)?;
        self.ensure_root()?;

        let path = self.config.descriptor_file(name);
        match self.records.load::<ToolDescriptor>(&path) {
            Ok(descriptor) => Ok(descriptor),
            Err(e) if e.is_not_found() => Err(Error::ToolNotFound {
                name: name.to_string(),
            }),
            Err(aide_fs::Error::ConfigParse { message, .. }) => Err(Error::Parse {
                name: name.to_string(),
                message,
            }),
            Err(e) => Err(Error::storage(format!("read tool descriptor {name}"), e)),
        }
    }

    /// List every stored descriptor, sorted by name.
    ///
    /// Records that cannot be read or parsed are skipped with a warning
    /// instead of failing the whole listing.
    pub fn list_tool_descriptors(&self) -> Result<Vec<ToolDescriptor>> {
        self.ensure_root()?;

        let mut descriptors = Vec::new();
        let entries = io::list_dir(&self.config.descriptors_dir())
            .map_err(|e| Error::storage("list tool descriptors", e))?;
        for entry in entries {
            if entry.kind != EntryKind::File {
                continue;
            }
            let Some(name) = stem_with_extension(&entry.name, DESCRIPTOR_EXTENSION) else {
                continue;
            };
            match self.get_tool_descriptor(&name) {
                Ok(descriptor) => descriptors.push(descriptor),
                Err(e) => tracing::warn!(file = %entry.name, error = %e, "skipping unreadable tool descriptor"),
            }
        }

        descriptors.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(descriptors)
    }

    fn categories_in(&self, dir: &NormalizedPath) -> aide_fs::Result<BTreeSet<String>> {
        let categories = io::list_dir(dir)?
            .into_iter()
            .filter(|entry| entry.kind == EntryKind::File)
            .filter_map(|entry| stem_with_extension(&entry.name, PROMPT_EXTENSION))
            .collect();
        Ok(categories)
    }

    fn ensure_root(&self) -> Result<()> {
        io::ensure_dir(self.config.root())
            .map_err(|e| Error::storage("create storage root", e))
    }
}

/// Validate a key component as a single path segment.
fn check_name(kind: &'static str, name: &str) -> Result<()> {
    validate_path_segment(name).map_err(|e| match e {
        aide_fs::Error::InvalidSegment { reason, .. } => Error::InvalidName {
            kind,
            name: name.to_string(),
            reason,
        },
        other => Error::storage(format!("validate {kind} name"), other),
    })
}

/// Validate a tool name. `tools` holds the descriptors and cannot name a tool.
fn check_tool_name(name: &str) -> Result<()> {
    check_name("tool", name)?;
    if name == DESCRIPTORS_DIR {
        return Err(Error::InvalidName {
            kind: "tool",
            name: name.to_string(),
            reason: "reserved for tool descriptors".into(),
        });
    }
    Ok(())
}

/// The stem of `file_name` if its extension is `extension`.
fn stem_with_extension(file_name: &str, extension: &str) -> Option<String> {
    let path = NormalizedPath::new(file_name);
    if path.extension() != Some(extension) {
        return None;
    }
    path.file_stem().map(str::to_string)
}
