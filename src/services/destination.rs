use crate::error::{PickerError, Result};
use crate::models::DestinationPolicy;
use crate::services::arguments::ensure_directory;
use crate::utils::has_wildcard_entries;
use chrono::{DateTime, TimeZone};
use std::ffi::OsString;
use std::fmt::Display;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Suffix format for backed-up destination folders
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Outcome of preparing the destination directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedDestination {
    Created(PathBuf),
    Reused(PathBuf),
    Rotated { path: PathBuf, backup: PathBuf },
}

impl ResolvedDestination {
    pub fn path(&self) -> &Path {
        match self {
            ResolvedDestination::Created(path)
            | ResolvedDestination::Reused(path)
            | ResolvedDestination::Rotated { path, .. } => path,
        }
    }

    pub fn backup(&self) -> Option<&Path> {
        match self {
            ResolvedDestination::Rotated { backup, .. } => Some(backup),
            _ => None,
        }
    }
}

/// Prepare the destination according to the policy.
/// `now` stamps the backup name when the rotate policy renames a folder.
pub fn resolve_destination<Tz>(
    policy: DestinationPolicy,
    dest: &Path,
    now: &DateTime<Tz>,
) -> Result<ResolvedDestination>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match policy {
        DestinationPolicy::Rotate => create_or_rotate(dest, now),
        DestinationPolicy::Strict => require_empty(dest),
    }
}

fn create_or_rotate<Tz>(dest: &Path, now: &DateTime<Tz>) -> Result<ResolvedDestination>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if !dest.exists() {
        create_dir(dest)?;
        return Ok(ResolvedDestination::Created(dest.to_path_buf()));
    }
    ensure_directory(dest)?;

    if !has_wildcard_entries(dest)? {
        return Ok(ResolvedDestination::Reused(dest.to_path_buf()));
    }

    let backup = backup_path(dest, now);
    rename_dir(dest, &backup)?;
    info!(
        "Destination already contains files, renamed {} -> {}",
        dest.display(),
        backup.display()
    );
    create_dir(dest)?;

    Ok(ResolvedDestination::Rotated {
        path: dest.to_path_buf(),
        backup,
    })
}

fn require_empty(dest: &Path) -> Result<ResolvedDestination> {
    ensure_directory(dest)?;

    if has_wildcard_entries(dest)? {
        return Err(PickerError::DestinationNotEmpty(dest.to_path_buf()));
    }

    Ok(ResolvedDestination::Reused(dest.to_path_buf()))
}

/// `<dest>_<YYYYMMDDHHMMSS>` next to the destination
pub fn backup_path<Tz>(dest: &Path, now: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    // components() drops a trailing separator
    let mut name = OsString::from(dest.components().as_path().as_os_str());
    name.push("_");
    name.push(now.format(BACKUP_TIMESTAMP_FORMAT).to_string());
    PathBuf::from(name)
}

fn rename_dir(from: &Path, to: &Path) -> Result<()> {
    // fs::rename silently replaces an empty directory on unix
    let outcome = if to.exists() {
        Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", to.display()),
        ))
    } else {
        fs::rename(from, to)
    };

    outcome.map_err(|source| PickerError::rename_failed(from, to, source))
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| PickerError::create_dir_failed(path, source))
}
