pub mod file_operations;

pub use file_operations::{
    copy_file_into, has_wildcard_entries, list_wildcard_files, matches_wildcard_name,
    DirectoryScanner, FsScanner,
};
