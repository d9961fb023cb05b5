use std::backtrace::Backtrace;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Every way a pairing run can stop early
#[derive(Error, Debug)]
pub enum PickerError {
    /// Not a failure: no arguments were given, so usage should be shown.
    #[error("usage requested")]
    UsageRequested,

    #[error("{}", describe_argument_count(.given, .min, .max))]
    InvalidArgumentCount { given: usize, min: usize, max: usize },

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("destination {} already contains files", .0.display())]
    DestinationNotEmpty(PathBuf),

    #[error("failed to rename {} to {}", from.display(), to.display())]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
        backtrace: Box<Backtrace>,
    },

    #[error("failed to copy {} into {}", path.display(), destination.display())]
    CopyFailed {
        path: PathBuf,
        destination: PathBuf,
        #[source]
        source: io::Error,
        backtrace: Box<Backtrace>,
    },

    #[error("failed to create directory {}", path.display())]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
        backtrace: Box<Backtrace>,
    },

    #[error("failed to read directory {}", path.display())]
    ScanFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
        backtrace: Box<Backtrace>,
    },
}

// Filesystem failures always carry the trace of where they were raised,
// independent of RUST_BACKTRACE.
impl PickerError {
    pub fn rename_failed(from: &Path, to: &Path, source: io::Error) -> Self {
        PickerError::RenameFailed {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
            backtrace: Box::new(Backtrace::force_capture()),
        }
    }

    pub fn copy_failed(path: &Path, destination: &Path, source: io::Error) -> Self {
        PickerError::CopyFailed {
            path: path.to_path_buf(),
            destination: destination.to_path_buf(),
            source,
            backtrace: Box::new(Backtrace::force_capture()),
        }
    }

    pub fn create_dir_failed(path: &Path, source: io::Error) -> Self {
        PickerError::CreateDirFailed {
            path: path.to_path_buf(),
            source,
            backtrace: Box::new(Backtrace::force_capture()),
        }
    }

    pub fn scan_failed(path: &Path, source: io::Error) -> Self {
        PickerError::ScanFailed {
            path: path.to_path_buf(),
            source,
            backtrace: Box::new(Backtrace::force_capture()),
        }
    }

    /// Errors caused by bad input, reported as a single line
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PickerError::UsageRequested
                | PickerError::InvalidArgumentCount { .. }
                | PickerError::NotADirectory(_)
                | PickerError::DestinationNotEmpty(_)
        )
    }

    /// Trace captured where a filesystem failure was raised
    pub fn trace(&self) -> Option<&Backtrace> {
        match self {
            PickerError::RenameFailed { backtrace, .. }
            | PickerError::CopyFailed { backtrace, .. }
            | PickerError::CreateDirFailed { backtrace, .. }
            | PickerError::ScanFailed { backtrace, .. } => Some(backtrace),
            _ => None,
        }
    }
}

fn describe_argument_count(given: &usize, min: &usize, max: &usize) -> String {
    let (given, min, max) = (*given, *min, *max);
    let expected = if min == max {
        format!("exactly {}", min)
    } else {
        format!("{} to {}", min, max)
    };

    if given < min {
        format!("too few arguments: got {}, expected {}", given, expected)
    } else {
        format!("too many arguments: got {}, expected {}", given, expected)
    }
}

pub type Result<T> = std::result::Result<T, PickerError>;
