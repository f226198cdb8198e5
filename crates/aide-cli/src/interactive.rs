//! Interactive prompts for CLI commands

use std::io::IsTerminal;

use aide_store::DEFAULT_SEPARATOR;
use dialoguer::Input;

use crate::error::Result;

/// Header and separator for a new tool descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorFields {
    pub header: String,
    pub separator: String,
}

/// Fill in whichever of `header` and `separator` was not given.
///
/// Asks on the terminal when stdin is one; otherwise the header stays empty
/// and the separator falls back to [`DEFAULT_SEPARATOR`].
pub fn descriptor_fields(
    header: Option<String>,
    separator: Option<String>,
) -> Result<DescriptorFields> {
    let interactive = std::io::stdin().is_terminal();

    let header = match header {
        Some(h) => h,
        None if interactive => Input::<String>::new()
            .with_prompt("File header (optional, press enter to skip)")
            .allow_empty(true)
            .interact_text()?,
        None => String::new(),
    };

    let separator = match separator {
        Some(s) => s,
        None if interactive => Input::<String>::new()
            .with_prompt("Section separator")
            .default(DEFAULT_SEPARATOR.to_string())
            .interact_text()?,
        None => String::new(),
    };

    Ok(normalize(header, separator))
}

fn normalize(header: String, separator: String) -> DescriptorFields {
    let separator = separator.trim();
    DescriptorFields {
        header: header.trim().to_string(),
        separator: if separator.is_empty() {
            DEFAULT_SEPARATOR.to_string()
        } else {
            separator.to_string()
        },
    }
}
