use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum S3mirrorError {
    #[error("configuration validation failed: required environment variable(s) not set: {}", .0.join(", "))]
    Configuration(Vec<&'static str>),
    #[error("failed to create rclone config directory {}: {source}", .path.display())]
    CredentialDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write rclone config {}: {source}", .path.display())]
    CredentialFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to start {program}: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("rclone sync failed: {0}")]
    SyncFailed(String),
    #[error("cancelled")]
    Cancelled,
}

impl S3mirrorError {
    pub fn missing_variables(&self) -> Option<&[&'static str]> {
        match self {
            Self::Configuration(missing) => Some(missing),
            _ => None,
        }
    }
}
