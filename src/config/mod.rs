use std::path::PathBuf;

use crate::types::AccessKeys;

pub mod args;

#[derive(Debug, Clone)]
pub struct Config {
    pub source: RemoteConfig,
    pub dest: RemoteConfig,
    pub dest_prefix: String,
    pub dry_run: bool,
    pub max_delete: i64,
    pub retries: i64,
    pub bandwidth_limit: Option<String>,
    pub tracing_config: TracingConfig,
    pub rclone_config: RcloneConfig,
}

impl Config {
    /// A non-positive ceiling means deletions are unlimited.
    pub fn max_delete_ceiling(&self) -> Option<i64> {
        max_delete_ceiling(self.max_delete)
    }
}

fn max_delete_ceiling(max_delete: i64) -> Option<i64> {
    if max_delete > 0 {
        Some(max_delete)
    } else {
        None
    }
}

/// One side of the mirror, rendered as an rclone remote.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub endpoint: String,
    pub access_keys: AccessKeys,
    pub bucket: String,
}

#[derive(Debug, Clone, Copy)]
pub struct TracingConfig {
    pub tracing_level: log::Level,
    pub json_tracing: bool,
    pub disable_color_tracing: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            tracing_level: log::Level::Info,
            json_tracing: true,
            disable_color_tracing: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RcloneConfig {
    pub rclone_path: String,
    pub config_dir: PathBuf,
}

impl RcloneConfig {
    pub fn config_file_path(&self) -> PathBuf {
        self.config_dir.join(crate::rclone::CONFIG_FILE_NAME)
    }
}
