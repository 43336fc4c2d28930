#![allow(dead_code)]

use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub const SOURCE_BUCKET: &str = "e2e-source-bucket";
pub const DEST_BUCKET: &str = "e2e-dest-bucket";
pub const SOURCE_ACCESS_KEY: &str = "E2ESOURCEACCESSKEY";
pub const SOURCE_SECRET_KEY: &str = "e2e/source/secret+key";
pub const DEST_ACCESS_KEY: &str = "E2EDESTACCESSKEY";
pub const DEST_SECRET_KEY: &str = "e2e/dest/secret+key";

pub const REQUIRED_VARIABLES: [(&str, &str); 8] = [
    ("SOURCE_S3_ENDPOINT", "http://127.0.0.1:9000"),
    ("SOURCE_ACCESS_KEY", SOURCE_ACCESS_KEY),
    ("SOURCE_SECRET_KEY", SOURCE_SECRET_KEY),
    ("SOURCE_BUCKET", SOURCE_BUCKET),
    ("DEST_S3_ENDPOINT", "http://127.0.0.1:9001"),
    ("DEST_ACCESS_KEY", DEST_ACCESS_KEY),
    ("DEST_SECRET_KEY", DEST_SECRET_KEY),
    ("DEST_BUCKET", DEST_BUCKET),
];

pub struct TestHelper {
    pub temp_dir: tempfile::TempDir,
}

impl TestHelper {
    pub fn new() -> Self {
        Self {
            temp_dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn config_dir(&self) -> PathBuf {
        self.temp_dir.path().join("rclone-config")
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir().join("rclone.conf")
    }

    /// A command with a clean environment apart from PATH and the scratch directory.
    pub fn command(&self, rclone_path: &str) -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_s3mirror"));
        command
            .env_clear()
            .env("PATH", env::var("PATH").unwrap_or_default())
            .env("RCLONE_PATH", rclone_path)
            .env("RCLONE_CONFIG_DIR", self.config_dir());
        command
    }

    pub fn command_with_required_variables(&self, rclone_path: &str) -> Command {
        let mut command = self.command(rclone_path);
        command.envs(REQUIRED_VARIABLES);
        command
    }

    pub fn run(command: &mut Command) -> Output {
        command.output().unwrap()
    }

    pub fn stdout(output: &Output) -> String {
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn stderr(output: &Output) -> String {
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn assert_no_secret(text: &str) {
        for secret in [
            SOURCE_ACCESS_KEY,
            SOURCE_SECRET_KEY,
            DEST_ACCESS_KEY,
            DEST_SECRET_KEY,
        ] {
            assert!(!text.contains(secret), "secret leaked: {text}");
        }
    }

    pub fn expected_args(config_file: &Path, extra: &str) -> String {
        format!(
            "sync source:{SOURCE_BUCKET} dest:{DEST_BUCKET}/{SOURCE_BUCKET} --config {} --delete-during --checksum --retries 3 --stats 1m --stats-log-level INFO --progress{extra}",
            config_file.display()
        )
    }
}
