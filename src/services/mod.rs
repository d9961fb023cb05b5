pub mod arguments;
pub mod destination;
pub mod file_copy;
pub mod pair_matcher;
pub mod pair_picker;

pub use arguments::{validate_arguments, ValidatedArgs, DEFAULT_DEST_FOLDER};
pub use destination::{backup_path, resolve_destination, ResolvedDestination};
pub use file_copy::{copy_pairs, CopiedFile};
pub use pair_matcher::{match_pairs, unmatched_primaries};
pub use pair_picker::{pick_matching_pairs, PickReport};
