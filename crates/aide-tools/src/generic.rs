//! Descriptor-driven rendering style
//!
//! Used for every tool registered with `aide add-tool`. The descriptor's
//! separator opens the marker section and sits between prompts; its
//! description names the section.

use aide_store::ToolDescriptor;

/// Marker announcing an appended section.
pub fn marker_section(descriptor: &ToolDescriptor, timestamp: &str) -> String {
    format!(
        "{}\n# {} - added by aide on {timestamp}\n\n",
        descriptor.separator(),
        descriptor.description
    )
}

/// Inserted between consecutive prompts.
pub fn prompt_separator(descriptor: &ToolDescriptor) -> String {
    format!("\n{}\n\n", descriptor.separator())
}
