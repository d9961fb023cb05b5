pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::PickerError;
pub use models::{base_name, DestinationPolicy, Pair, PickerConfig};
pub use services::{
    copy_pairs, match_pairs, pick_matching_pairs, resolve_destination, validate_arguments,
    CopiedFile, PickReport, ResolvedDestination, ValidatedArgs, DEFAULT_DEST_FOLDER,
};
pub use utils::{DirectoryScanner, FsScanner};
