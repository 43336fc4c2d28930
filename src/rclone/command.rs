use std::path::Path;

use crate::config::Config;
use crate::types::{DEST_REMOTE_NAME, SOURCE_REMOTE_NAME};

const SYNC_SUBCOMMAND: &str = "sync";
const STATS_INTERVAL: &str = "1m";
const STATS_LOG_LEVEL: &str = "INFO";

pub fn source_remote(config: &Config) -> String {
    format!("{SOURCE_REMOTE_NAME}:{}", config.source.bucket)
}

pub fn dest_remote(config: &Config) -> String {
    format!(
        "{DEST_REMOTE_NAME}:{}/{}",
        config.dest.bucket, config.dest_prefix
    )
}

/// Builds `rclone sync` arguments for a one-way mirror.
///
/// Objects are compared by checksum and destination-only objects are deleted
/// during the transfer. Credentials stay in the config file, so the returned
/// list is safe to log.
pub fn build_sync_args(config: &Config, config_file_path: &Path) -> Vec<String> {
    let mut args = vec![
        SYNC_SUBCOMMAND.to_string(),
        source_remote(config),
        dest_remote(config),
        "--config".to_string(),
        config_file_path.to_string_lossy().to_string(),
        "--delete-during".to_string(),
        "--checksum".to_string(),
        "--retries".to_string(),
        config.retries.to_string(),
        "--stats".to_string(),
        STATS_INTERVAL.to_string(),
        "--stats-log-level".to_string(),
        STATS_LOG_LEVEL.to_string(),
        "--progress".to_string(),
    ];

    if config.dry_run {
        args.push("--dry-run".to_string());
    }

    if let Some(max_delete) = config.max_delete_ceiling() {
        args.push("--max-delete".to_string());
        args.push(max_delete.to_string());
    }

    if let Some(bandwidth_limit) = &config.bandwidth_limit {
        args.push("--bwlimit".to_string());
        args.push(bandwidth_limit.clone());
    }

    args
}
