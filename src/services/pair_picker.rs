use crate::error::Result;
use crate::models::{Pair, PickerConfig};
use crate::services::arguments::ValidatedArgs;
use crate::services::destination::{resolve_destination, ResolvedDestination};
use crate::services::file_copy::{copy_pairs, CopiedFile};
use crate::services::pair_matcher::{match_pairs, unmatched_primaries};
use crate::utils::DirectoryScanner;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::path::PathBuf;
use tracing::{debug, info};

/// Summary of one pairing run
#[derive(Debug, Clone)]
pub struct PickReport {
    pub destination: ResolvedDestination,
    pub primary_count: usize,
    pub secondary_count: usize,
    pub pairs: Vec<Pair>,
    pub unmatched: Vec<PathBuf>,
    pub copied_files: Vec<CopiedFile>,
}

impl PickReport {
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }
}

/// Resolve the destination, scan both folders, match and copy
pub fn pick_matching_pairs<S, Tz>(
    args: &ValidatedArgs,
    config: &PickerConfig,
    scanner: &S,
    now: &DateTime<Tz>,
) -> Result<PickReport>
where
    S: DirectoryScanner + ?Sized,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let destination = resolve_destination(config.policy, &args.dest_dir, now)?;

    info!("Primary folder: {}", args.primary_dir.display());
    info!("Secondary folder: {}", args.secondary_dir.display());
    info!("Destination folder: {}", destination.path().display());

    let primary = scanner.scan(&args.primary_dir)?;
    info!("Primary files: {}", primary.len());
    let secondary = scanner.scan(&args.secondary_dir)?;
    info!("Secondary files: {}", secondary.len());

    let pairs = match_pairs(&primary, &secondary);
    info!("Files with matching names: {}", pairs.len());
    for pair in &pairs {
        debug!(
            "Matched {}: {} + {}",
            pair.base_name().to_string_lossy(),
            pair.primary.display(),
            pair.secondary.display()
        );
    }

    let unmatched = unmatched_primaries(&primary, &pairs);
    if !unmatched.is_empty() {
        info!("{} files had no match", unmatched.len());
    }

    let copied_files = copy_pairs(&pairs, destination.path())?;

    Ok(PickReport {
        destination,
        primary_count: primary.len(),
        secondary_count: secondary.len(),
        pairs,
        unmatched,
        copied_files,
    })
}
