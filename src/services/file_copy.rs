use crate::error::{PickerError, Result};
use crate::models::Pair;
use crate::utils::copy_file_into;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A file placed in the destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Copy both files of every pair into `dest_dir`, primary first.
/// Stops at the first failure; files copied before it stay in place.
pub fn copy_pairs(pairs: &[Pair], dest_dir: &Path) -> Result<Vec<CopiedFile>> {
    let mut copied_files = Vec::with_capacity(pairs.len() * 2);

    for pair in pairs {
        for source in [&pair.primary, &pair.secondary] {
            copied_files.push(copy_one(source, dest_dir)?);
        }
    }

    Ok(copied_files)
}

fn copy_one(source: &Path, dest_dir: &Path) -> Result<CopiedFile> {
    let destination = copy_file_into(source, dest_dir)
        .map_err(|e| PickerError::copy_failed(source, dest_dir, e))?;

    debug!("Copied {} -> {}", source.display(), destination.display());

    Ok(CopiedFile {
        source: source.to_path_buf(),
        destination,
    })
}
