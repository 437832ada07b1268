pub mod config;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::{ConfigError, MirrorConfig};
pub use models::{Destination, DestinationRole, PathMapping, SyncMode};
pub use services::{sync_mappings, CopiedDir, SyncReport};

use std::path::PathBuf;

// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Asset variant to sync; prompts interactively when absent.
    pub mode: Option<SyncMode>,
    /// Base directory the mapping paths resolve against.
    pub root: PathBuf,
    /// Optional TOML file replacing the built-in mapping table.
    pub config_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: None,
            root: PathBuf::from("."),
            config_file: None,
            log_level: "info".to_string(),
        }
    }
}
