use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// A primary file and the secondary file sharing its base name.
/// Immutable once matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub primary: PathBuf,
    pub secondary: PathBuf,
}

impl Pair {
    pub fn new(primary: PathBuf, secondary: PathBuf) -> Self {
        Self { primary, secondary }
    }

    /// Shared base name of both files
    pub fn base_name(&self) -> OsString {
        base_name(&self.primary)
    }
}

/// File name with its final extension stripped.
/// Pure function; comparison on the result is exact and case-sensitive.
pub fn base_name(path: &Path) -> OsString {
    path.file_stem()
        .or_else(|| path.file_name())
        .unwrap_or_else(|| OsStr::new(""))
        .to_os_string()
}
