use std::fmt;
use std::str::FromStr;

/// How an existing destination directory is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DestinationPolicy {
    /// Create a missing destination, back up a non-empty one by renaming it.
    #[default]
    Rotate,
    /// Destination must already exist and be empty.
    Strict,
}

impl DestinationPolicy {
    pub const NAMES: [&'static str; 2] = ["rotate", "strict"];

    /// Accepted positional argument counts, excluding the usage case
    pub fn argument_range(self) -> (usize, usize) {
        match self {
            DestinationPolicy::Rotate => (2, 3),
            DestinationPolicy::Strict => (3, 3),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DestinationPolicy::Rotate => "rotate",
            DestinationPolicy::Strict => "strict",
        }
    }
}

impl fmt::Display for DestinationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DestinationPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "rotate" => Ok(DestinationPolicy::Rotate),
            "strict" => Ok(DestinationPolicy::Strict),
            other => Err(format!("unknown destination policy: {}", other)),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct PickerConfig {
    pub policy: DestinationPolicy,
    /// Sort scanned entries by path so matching does not depend on listing order
    pub sort_entries: bool,
    pub log_level: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            policy: DestinationPolicy::Rotate,
            sort_entries: false,
            log_level: "info".to_string(),
        }
    }
}
