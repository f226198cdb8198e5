//! Apply stored prompts to a project

use crate::dedup::DuplicateFilter;
use crate::generator::FileGenerator;
use crate::registry::ToolRegistry;
use crate::{Error, Result};
use aide_fs::NormalizedPath;

/// Options for [`apply`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplyOptions {
    /// Compute the result without writing the target file.
    pub dry_run: bool,
    /// Duplicate detection policy.
    pub filter: DuplicateFilter,
}

impl ApplyOptions {
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn filter(mut self, filter: DuplicateFilter) -> Self {
        self.filter = filter;
        self
    }
}

/// Outcome of an [`apply`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    pub tool: String,
    pub target: NormalizedPath,
    pub categories: Vec<String>,
    /// Number of prompts fetched from the store.
    pub requested: usize,
    /// Number of prompts appended after dedup.
    pub appended: usize,
    /// Full content that would be written, for dry runs with something to add.
    /// Bytes that are not valid UTF-8 are shown as U+FFFD.
    pub preview: Option<String>,
}

impl ApplyReport {
    /// True when every requested prompt was already present.
    pub fn nothing_to_add(&self) -> bool {
        self.appended == 0
    }
}

/// Split a comma-separated category list, trimming items and dropping empties.
pub fn parse_categories(arg: &str) -> Vec<String> {
    arg.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

/// Merge the prompts stored under `tool` for `categories` into the tool's
/// target file under `project_root`.
///
/// Prompts already present in the file are skipped. When nothing is left the
/// file is not touched.
pub fn apply(
    registry: &ToolRegistry,
    tool: &str,
    categories: &[String],
    project_root: &NormalizedPath,
    options: ApplyOptions,
) -> Result<ApplyReport> {
    registry.validate_tool(tool)?;

    if categories.is_empty() {
        return Err(Error::NoPrompts);
    }

    let prompts = categories
        .iter()
        .map(|category| registry.store().get_prompt(tool, category))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let kind = registry.resolve(tool)?;
    let target = kind.target_path(project_root);

    let unique = options.filter.filter_file(&target, &prompts)?;

    let mut report = ApplyReport {
        tool: tool.to_string(),
        target: target.clone(),
        categories: categories.to_vec(),
        requested: prompts.len(),
        appended: unique.len(),
        preview: None,
    };

    if unique.is_empty() {
        tracing::info!(tool, target = %target, "all prompts already applied");
        return Ok(report);
    }

    let generator = FileGenerator::new(kind);
    if options.dry_run {
        let now = chrono::Local::now().naive_local();
        let content = generator.compose(&target, &unique, now)?;
        report.preview = Some(String::from_utf8_lossy(&content).into_owned());
        return Ok(report);
    }

    generator.generate(&target, &unique)?;
    tracing::info!(tool, target = %target, appended = unique.len(), "applied prompts");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("review", &["review"])]
    #[case("backend,frontend", &["backend", "frontend"])]
    #[case(" backend , frontend ", &["backend", "frontend"])]
    #[case("a,,b,", &["a", "b"])]
    #[case(" , ", &[])]
    fn test_parse_categories(#[case] input: &str, #[case] expected: &[&str]) {
        assert_eq!(parse_categories(input), expected);
    }
}
