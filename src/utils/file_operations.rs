use crate::error::{PickerError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Source of directory listings for the matcher.
/// Production code reads the filesystem; tests substitute a fixed order.
pub trait DirectoryScanner {
    fn scan(&self, directory: &Path) -> Result<Vec<PathBuf>>;
}

/// Lists regular files directly inside a directory
#[derive(Debug, Clone, Copy, Default)]
pub struct FsScanner {
    pub sorted: bool,
}

impl FsScanner {
    pub fn new(sorted: bool) -> Self {
        Self { sorted }
    }
}

impl DirectoryScanner for FsScanner {
    fn scan(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        let mut files = list_wildcard_files(directory)?;
        if self.sorted {
            files.sort();
        }
        Ok(files)
    }
}

/// List regular files in a directory whose names match `*.*`.
/// Non-recursive; order is whatever `read_dir` yields.
pub fn list_wildcard_files<P: AsRef<Path>>(directory: P) -> Result<Vec<PathBuf>> {
    let dir_path = directory.as_ref();

    let files: Vec<PathBuf> = read_entry_paths(dir_path)?
        .into_iter()
        .filter(|path| path.is_file())
        .filter(|path| matches_wildcard_name(path))
        .collect();

    debug!("Scanned {} matching files in {}", files.len(), dir_path.display());
    Ok(files)
}

/// True if the directory holds any entry, file or not, whose name matches `*.*`
pub fn has_wildcard_entries<P: AsRef<Path>>(directory: P) -> Result<bool> {
    let dir_path = directory.as_ref();

    Ok(read_entry_paths(dir_path)?
        .iter()
        .any(|path| matches_wildcard_name(path)))
}

/// Paths of all direct children; an unreadable entry fails the whole listing
fn read_entry_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir_path).map_err(|source| PickerError::scan_failed(dir_path, source))?;
    collect_entry_paths(dir_path, entries.map(|entry| entry.map(|entry| entry.path())))
}

fn collect_entry_paths<I>(dir_path: &Path, entries: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = io::Result<PathBuf>>,
{
    entries
        .into_iter()
        .map(|entry| entry.map_err(|source| PickerError::scan_failed(dir_path, source)))
        .collect()
}

/// Shell-style `*.*`: the name is not hidden and contains a dot
pub fn matches_wildcard_name(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .map(|name| !name.starts_with('.') && name.contains('.'))
        .unwrap_or(false)
}

/// Copy a file into a directory, keeping its file name.
/// An existing file with the same name is overwritten.
pub fn copy_file_into<P: AsRef<Path>, Q: AsRef<Path>>(source: P, dest_dir: Q) -> io::Result<PathBuf> {
    let src_path = source.as_ref();

    let file_name = src_path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("no file name in {}", src_path.display()),
        )
    })?;

    let dest_path = dest_dir.as_ref().join(file_name);
    fs::copy(src_path, &dest_path)?;

    Ok(dest_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        File::create(&path).unwrap();
        path
    }

    #[test]
    fn test_matches_wildcard_name() {
        assert!(matches_wildcard_name(Path::new("IMG_0001.JPG")));
        assert!(matches_wildcard_name(Path::new("dir/a.tar.gz")));
        assert!(matches_wildcard_name(Path::new("trailing.")));
        assert!(!matches_wildcard_name(Path::new("README")));
        assert!(!matches_wildcard_name(Path::new(".hidden.jpg")));
    }

    #[test]
    fn test_list_wildcard_files_skips_dirs_and_plain_names() {
        let tmp = TempDir::new().unwrap();
        let jpg = touch(tmp.path(), "a.jpg");
        touch(tmp.path(), "Makefile");
        touch(tmp.path(), ".DS_Store");
        fs::create_dir(tmp.path().join("nested.d")).unwrap();
        touch(&tmp.path().join("nested.d"), "b.jpg");

        let files = list_wildcard_files(tmp.path()).unwrap();
        assert_eq!(files, vec![jpg]);
    }

    #[test]
    fn test_list_wildcard_files_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let err = list_wildcard_files(tmp.path().join("gone")).unwrap_err();
        assert!(matches!(err, PickerError::ScanFailed { .. }));
    }

    #[test]
    fn test_unreadable_entry_fails_listing() {
        let entries = vec![
            Ok(PathBuf::from("dest/a.jpg")),
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
        ];

        let err = collect_entry_paths(Path::new("dest"), entries).unwrap_err();
        match err {
            PickerError::ScanFailed { path, .. } => assert_eq!(path, PathBuf::from("dest")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_fs_scanner_sorted() {
        let tmp = TempDir::new().unwrap();
        for name in ["c.jpg", "a.jpg", "b.jpg"] {
            touch(tmp.path(), name);
        }

        let files = FsScanner::new(true).scan(tmp.path()).unwrap();
        let names: Vec<_> = files.iter().map(|p| p.file_name().unwrap().to_owned()).collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn test_has_wildcard_entries() {
        let tmp = TempDir::new().unwrap();
        assert!(!has_wildcard_entries(tmp.path()).unwrap());

        touch(tmp.path(), "notes");
        assert!(!has_wildcard_entries(tmp.path()).unwrap());

        fs::create_dir(tmp.path().join("old.backup")).unwrap();
        assert!(has_wildcard_entries(tmp.path()).unwrap());
    }

    #[test]
    fn test_copy_file_into_overwrites() {
        let src = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        let source = src.path().join("x.jpg");
        fs::write(&source, b"new").unwrap();
        fs::write(dest.path().join("x.jpg"), b"old").unwrap();

        let copied = copy_file_into(&source, dest.path()).unwrap();
        assert_eq!(copied, dest.path().join("x.jpg"));
        assert_eq!(fs::read(copied).unwrap(), b"new");
    }
}
