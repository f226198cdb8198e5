//! Normalized path handling for cross-platform compatibility

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// All joins and comparisons happen on the normalized form; conversion to a
/// platform-native `PathBuf` happens only at I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: path_str.replace('\\', "/"),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a relative segment (which may itself contain `/`).
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        let segment = segment.trim_start_matches("./");
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment)
        } else {
            format!("{}/{}", self.inner, segment)
        };
        Self { inner: joined }
    }

    /// True for rooted paths (`/x`, or `\\x` before normalization) and
    /// Windows drive paths (`C:/x`, `C:x`).
    pub fn is_absolute(&self) -> bool {
        let bytes = self.inner.as_bytes();
        self.inner.starts_with('/')
            || (bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':')
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Get the file name without its final extension.
    pub fn file_stem(&self) -> Option<&str> {
        let name = self.file_name()?;
        match name.rfind('.') {
            Some(0) | None => Some(name),
            Some(idx) => Some(&name[..idx]),
        }
    }

    /// Get the extension if present. Dotfiles like `.cursorrules` have none.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 { None } else { Some(&name[idx + 1..]) }
        })
    }

    /// Check if this path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

/// Check that `segment` names exactly one entry inside a directory.
///
/// Rejects empty names, `.`/`..`, separators and NUL bytes so a key can never
/// address a location outside the directory it is joined to.
pub fn validate_path_segment(segment: &str) -> Result<()> {
    let reason = if segment.is_empty() {
        Some("must not be empty")
    } else if segment == "." || segment == ".." {
        Some("must not be a relative directory reference")
    } else if segment.contains('/') || segment.contains('\\') {
        Some("must not contain path separators")
    } else if segment.contains('\0') {
        Some("must not contain NUL bytes")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Error::InvalidSegment {
            segment: segment.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_backslashes_are_normalized() {
        let path = NormalizedPath::new("C:\\project\\CLAUDE.md");
        assert_eq!(path.as_str(), "C:/project/CLAUDE.md");
    }

    #[test]
    fn test_join_nested_relative_path() {
        let root = NormalizedPath::new("/home/user/project");
        let joined = root.join(".vscode/settings.json");
        assert_eq!(joined.as_str(), "/home/user/project/.vscode/settings.json");
    }

    #[test]
    fn test_join_strips_leading_dot_slash() {
        let root = NormalizedPath::new("/project/");
        assert_eq!(root.join("./rules.md").as_str(), "/project/rules.md");
    }

    #[rstest]
    #[case("/etc/passwd", true)]
    #[case("\\server\\share", true)]
    #[case("C:\\rules.md", true)]
    #[case("c:rules.md", true)]
    #[case(".vscode/settings.json", false)]
    #[case("CLAUDE.md", false)]
    #[case("docs/c:notes.md", false)]
    fn test_is_absolute(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(NormalizedPath::new(input).is_absolute(), expected);
    }

    #[rstest]
    #[case("/a/review.txt", Some("review"), Some("txt"))]
    #[case("/a/.cursorrules", Some(".cursorrules"), None)]
    #[case("/a/tool.v2.json", Some("tool.v2"), Some("json"))]
    #[case("/a/README", Some("README"), None)]
    fn test_stem_and_extension(
        #[case] input: &str,
        #[case] stem: Option<&str>,
        #[case] ext: Option<&str>,
    ) {
        let path = NormalizedPath::new(input);
        assert_eq!(path.file_stem(), stem);
        assert_eq!(path.extension(), ext);
    }

    #[rstest]
    #[case("review")]
    #[case("backend-api")]
    #[case("my tool")]
    #[case(".hidden")]
    fn test_valid_segments(#[case] segment: &str) {
        assert!(validate_path_segment(segment).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case(".")]
    #[case("..")]
    #[case("a/b")]
    #[case("a\\b")]
    #[case("nul\0byte")]
    fn test_invalid_segments(#[case] segment: &str) {
        let err = validate_path_segment(segment).unwrap_err();
        assert!(matches!(err, Error::InvalidSegment { .. }));
    }
}
