mod error;
mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_FILE, load_config, load_file, parse_config, validate};
pub use types::{AnalysisConfig, LogConfig, NetmonConfig, OutputConfig, OutputFormat};
