//! Tool registry backed by the prompt store

use super::builtins::{BUILTIN_TOOLS, builtin, builtin_names};
use super::{ToolEntry, ToolKind};
use crate::{Error, Result};
use aide_fs::NormalizedPath;
use aide_store::{PromptStore, ToolDescriptor};

/// Resolves tool names to built-ins or stored descriptors.
///
/// Built-ins are checked first, so a stored descriptor can never shadow
/// `claude` or `cursor`.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    store: PromptStore,
}

impl ToolRegistry {
    /// Create a registry over the given store.
    pub fn new(store: PromptStore) -> Self {
        Self { store }
    }

    /// Get the underlying store.
    pub fn store(&self) -> &PromptStore {
        &self.store
    }

    /// Check that `name` is a built-in or has a stored descriptor.
    pub fn validate_tool(&self, name: &str) -> Result<()> {
        self.resolve(name).map(|_| ())
    }

    /// Resolve `name` to its rendering variant.
    ///
    /// A descriptor that exists but cannot be parsed is reported as such
    /// rather than as an unsupported tool.
    pub fn resolve(&self, name: &str) -> Result<ToolKind> {
        if let Some(tool) = builtin(name) {
            return Ok(tool.kind());
        }

        match self.store.get_tool_descriptor(name) {
            Ok(descriptor) => Ok(ToolKind::Descriptor(descriptor)),
            Err(
                aide_store::Error::ToolNotFound { .. } | aide_store::Error::InvalidName { .. },
            ) => Err(self.unsupported(name)),
            Err(e) => Err(e.into()),
        }
    }

    /// Absolute path of the file `name` manages under `project_root`.
    pub fn resolve_target_file(
        &self,
        name: &str,
        project_root: &NormalizedPath,
    ) -> Result<NormalizedPath> {
        Ok(self.resolve(name)?.target_path(project_root))
    }

    /// Register a user-defined tool.
    ///
    /// Built-in names are reserved. An existing descriptor with the same
    /// name is replaced.
    pub fn register(&self, descriptor: &ToolDescriptor) -> Result<()> {
        if builtin(&descriptor.name).is_some() {
            return Err(Error::ReservedName {
                name: descriptor.name.clone(),
            });
        }
        if descriptor.target_file_name.trim().is_empty() {
            return Err(Error::InvalidDescriptor {
                name: descriptor.name.clone(),
                reason: "file name must not be empty".into(),
            });
        }
        let target = NormalizedPath::new(&descriptor.target_file_name);
        if target.is_absolute() || target.as_str().split('/').any(|part| part == "..") {
            return Err(Error::InvalidDescriptor {
                name: descriptor.name.clone(),
                reason: "file name must be a relative path inside the project".into(),
            });
        }

        self.store.save_tool_descriptor(descriptor)?;
        tracing::info!(tool = %descriptor.name, file = %descriptor.target_file_name, "registered tool");
        Ok(())
    }

    /// List built-ins followed by registered tools sorted by name.
    ///
    /// Descriptors named after a built-in are omitted since they can never
    /// be resolved.
    pub fn list(&self) -> Result<Vec<ToolEntry>> {
        let mut entries: Vec<ToolEntry> = BUILTIN_TOOLS
            .iter()
            .map(|tool| ToolEntry {
                name: tool.name.to_string(),
                description: tool.display_name.to_string(),
                target_file_name: tool.file_name.to_string(),
                builtin: true,
            })
            .collect();

        for descriptor in self.store.list_tool_descriptors()? {
            if builtin(&descriptor.name).is_some() {
                tracing::debug!(tool = %descriptor.name, "descriptor shadowed by built-in");
                continue;
            }
            entries.push(ToolEntry {
                name: descriptor.name,
                description: descriptor.description,
                target_file_name: descriptor.target_file_name,
                builtin: false,
            });
        }

        Ok(entries)
    }

    fn unsupported(&self, name: &str) -> Error {
        Error::UnsupportedTool {
            name: name.to_string(),
            builtins: builtin_names().join(", "),
        }
    }
}
