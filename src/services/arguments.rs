use crate::error::{PickerError, Result};
use crate::models::DestinationPolicy;
use std::path::{Path, PathBuf};

/// Destination used by the rotate policy when none is given
pub const DEFAULT_DEST_FOLDER: &str = "dest";

/// Positional arguments after validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedArgs {
    pub primary_dir: PathBuf,
    pub secondary_dir: PathBuf,
    pub dest_dir: PathBuf,
}

/// Check argument count and that both source folders exist.
/// The destination is left to the resolver, since its rules depend on the policy.
pub fn validate_arguments<S: AsRef<str>>(args: &[S], policy: DestinationPolicy) -> Result<ValidatedArgs> {
    if args.is_empty() {
        return Err(PickerError::UsageRequested);
    }

    let (min, max) = policy.argument_range();
    if args.len() < min || args.len() > max {
        return Err(PickerError::InvalidArgumentCount {
            given: args.len(),
            min,
            max,
        });
    }

    let primary_dir = PathBuf::from(args[0].as_ref());
    ensure_directory(&primary_dir)?;
    let secondary_dir = PathBuf::from(args[1].as_ref());
    ensure_directory(&secondary_dir)?;

    let dest_dir = args
        .get(2)
        .map(|dest| PathBuf::from(dest.as_ref()))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DEST_FOLDER));

    Ok(ValidatedArgs {
        primary_dir,
        secondary_dir,
        dest_dir,
    })
}

pub fn ensure_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(PickerError::NotADirectory(path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn path_str(path: &Path) -> String {
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_zero_arguments_requests_usage() {
        let args: [&str; 0] = [];
        let err = validate_arguments(&args, DestinationPolicy::Rotate).unwrap_err();
        assert!(matches!(err, PickerError::UsageRequested));
    }

    #[test]
    fn test_rotate_argument_count_bounds() {
        let err = validate_arguments(&["a"], DestinationPolicy::Rotate).unwrap_err();
        assert!(matches!(err, PickerError::InvalidArgumentCount { given: 1, .. }));

        let err = validate_arguments(&["a", "b", "c", "d"], DestinationPolicy::Rotate).unwrap_err();
        assert!(matches!(err, PickerError::InvalidArgumentCount { given: 4, .. }));
    }

    #[test]
    fn test_strict_requires_three_arguments() {
        let tmp = TempDir::new().unwrap();
        let dir = path_str(tmp.path());
        let err = validate_arguments(&[dir.clone(), dir], DestinationPolicy::Strict).unwrap_err();
        assert!(matches!(err, PickerError::InvalidArgumentCount { given: 2, min: 3, max: 3 }));
    }

    #[test]
    fn test_missing_primary_reported_first() {
        let tmp = TempDir::new().unwrap();
        let missing = path_str(&tmp.path().join("jpg"));
        let also_missing = path_str(&tmp.path().join("raw"));

        let err = validate_arguments(&[missing.clone(), also_missing], DestinationPolicy::Rotate).unwrap_err();
        match err {
            PickerError::NotADirectory(path) => assert_eq!(path, PathBuf::from(missing)),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("a.jpg");
        std::fs::write(&file, b"").unwrap();

        let err = validate_arguments(&[path_str(tmp.path()), path_str(&file)], DestinationPolicy::Rotate)
            .unwrap_err();
        assert!(matches!(err, PickerError::NotADirectory(_)));
    }

    #[test]
    fn test_rotate_defaults_destination() {
        let tmp = TempDir::new().unwrap();
        let dir = path_str(tmp.path());

        let args = validate_arguments(&[dir.clone(), dir], DestinationPolicy::Rotate).unwrap();
        assert_eq!(args.primary_dir, tmp.path());
        assert_eq!(args.dest_dir, PathBuf::from(DEFAULT_DEST_FOLDER));
    }
}
