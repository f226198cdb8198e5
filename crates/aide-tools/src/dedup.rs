//! Duplicate prompt detection
//!
//! A prompt counts as already applied when its trimmed text appears anywhere
//! in the target file. The file is compared as raw bytes, so content in any
//! encoding can be checked. Containment rather than equality tolerates whitespace
//! differences from earlier merges; the price is that a prompt wholly
//! contained in unrelated content is also treated as applied.

use crate::{Error, Result};
use aide_fs::{NormalizedPath, io};

/// Filters candidate prompts against existing content.
///
/// By default a candidate is also dropped when its trimmed text is contained
/// in a prompt kept earlier in the same batch, so two categories holding the
/// same text are applied once. [`within_batch(false)`](Self::within_batch)
/// restores file-only checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateFilter {
    within_batch: bool,
}

impl Default for DuplicateFilter {
    fn default() -> Self {
        Self { within_batch: true }
    }
}

impl DuplicateFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether candidates are also checked against each other.
    pub fn within_batch(mut self, enabled: bool) -> Self {
        self.within_batch = enabled;
        self
    }

    /// Keep the candidates not already present in `existing`, in input order.
    ///
    /// A candidate that is empty after trimming is always dropped, since the
    /// empty string is contained in everything.
    pub fn filter(&self, existing: impl AsRef<[u8]>, candidates: &[String]) -> Vec<String> {
        let existing = existing.as_ref();
        let mut kept: Vec<String> = Vec::new();

        for candidate in candidates {
            let needle = candidate.trim();
            if contains_bytes(existing, needle.as_bytes()) {
                continue;
            }
            if self.within_batch && kept.iter().any(|k| k.contains(needle)) {
                continue;
            }
            kept.push(candidate.clone());
        }

        kept
    }

    /// Like [`filter`](Self::filter), reading the existing content from
    /// `path`. A missing file counts as empty.
    pub fn filter_file(&self, path: &NormalizedPath, candidates: &[String]) -> Result<Vec<String>> {
        let existing = io::read_bytes_or_empty(path).map_err(Error::read_target)?;
        let kept = self.filter(&existing, candidates);
        tracing::debug!(
            path = %path,
            candidates = candidates.len(),
            kept = kept.len(),
            "filtered duplicate prompts"
        );
        Ok(kept)
    }
}

fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|window| window == needle)
}

/// Filter `candidates` against the content of `path` with the default policy.
pub fn filter_duplicates(path: &NormalizedPath, candidates: &[String]) -> Result<Vec<String>> {
    DuplicateFilter::new().filter_file(path, candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_existing_keeps_everything() {
        let kept = DuplicateFilter::new().filter("", &strings(&["one", "two"]));
        assert_eq!(kept, strings(&["one", "two"]));
    }

    #[test]
    fn test_present_text_is_dropped() {
        let existing = "# aide prompts\n\nCheck for SQL injection\n";
        let kept = DuplicateFilter::new().filter(
            existing,
            &strings(&["Check for SQL injection", "Prefer iterators"]),
        );
        assert_eq!(kept, strings(&["Prefer iterators"]));
    }

    #[test]
    fn test_padding_is_ignored_when_matching() {
        let kept = DuplicateFilter::new().filter("Use tabs\n", &strings(&["\n  Use tabs  \n"]));
        assert!(kept.is_empty());
    }

    #[test]
    fn test_kept_prompts_retain_untrimmed_text() {
        let kept = DuplicateFilter::new().filter("", &strings(&["  padded  "]));
        assert_eq!(kept, strings(&["  padded  "]));
    }

    #[test]
    fn test_substring_counts_as_duplicate() {
        let existing = "Always write tests for new code";
        let kept = DuplicateFilter::new().filter(existing, &strings(&["write tests"]));
        assert!(kept.is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let kept = DuplicateFilter::new().filter("b", &strings(&["c", "b", "a"]));
        assert_eq!(kept, strings(&["c", "a"]));
    }

    #[test]
    fn test_blank_candidate_dropped() {
        let kept = DuplicateFilter::new().filter("", &strings(&["   ", "real"]));
        assert_eq!(kept, strings(&["real"]));
    }

    #[test]
    fn test_within_batch_duplicates_removed_by_default() {
        let kept = DuplicateFilter::new().filter("", &strings(&["A unique text", "A unique text"]));
        assert_eq!(kept, strings(&["A unique text"]));
    }

    #[test]
    fn test_within_batch_disabled_keeps_both() {
        let kept = DuplicateFilter::new()
            .within_batch(false)
            .filter("", &strings(&["A unique text", "A unique text"]));
        assert_eq!(kept, strings(&["A unique text", "A unique text"]));
    }

    #[test]
    fn test_non_utf8_existing_content() {
        let existing = b"caf\xe9 rules\nPrefer Result\n";
        let kept = DuplicateFilter::new().filter(existing, &strings(&["Prefer Result", "caf"]));
        assert!(kept.is_empty());

        let kept = DuplicateFilter::new().filter(existing, &strings(&["caf\u{e9}"]));
        assert_eq!(kept, strings(&["caf\u{e9}"]));
    }

    #[test]
    fn test_within_batch_containment() {
        let kept = DuplicateFilter::new().filter("", &strings(&["Run cargo fmt before commit", "cargo fmt"]));
        assert_eq!(kept, strings(&["Run cargo fmt before commit"]));
    }
}
