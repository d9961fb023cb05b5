pub mod config;
pub mod pair;

pub use config::{DestinationPolicy, PickerConfig};
pub use pair::{base_name, Pair};
