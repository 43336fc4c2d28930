use crate::config::args::value_parser::integer::parse_int_or_default;
use crate::config::args::value_parser::log_level::parse_log_level_or_default;
use crate::config::{RcloneConfig, RemoteConfig, TracingConfig};
use crate::types::AccessKeys;
use crate::types::error::S3mirrorError;
use crate::Config;
use clap::Parser;
#[cfg(feature = "version")]
use shadow_rs::shadow;
use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;

pub mod value_parser;

pub const SOURCE_S3_ENDPOINT: &str = "SOURCE_S3_ENDPOINT";
pub const SOURCE_ACCESS_KEY: &str = "SOURCE_ACCESS_KEY";
pub const SOURCE_SECRET_KEY: &str = "SOURCE_SECRET_KEY";
pub const SOURCE_BUCKET: &str = "SOURCE_BUCKET";
pub const DEST_S3_ENDPOINT: &str = "DEST_S3_ENDPOINT";
pub const DEST_ACCESS_KEY: &str = "DEST_ACCESS_KEY";
pub const DEST_SECRET_KEY: &str = "DEST_SECRET_KEY";
pub const DEST_BUCKET: &str = "DEST_BUCKET";

pub const DEFAULT_MAX_DELETE: i64 = 1000;
pub const DEFAULT_RETRIES: i64 = 3;
pub const DEFAULT_RCLONE_PATH: &str = "rclone";
pub const DEFAULT_RCLONE_CONFIG_DIR: &str = "/tmp/rclone-config";

const DRY_RUN_ENABLED_VALUE: &str = "true";
const DEFAULT_TEXT_TRACING: bool = false;
const DEFAULT_DISABLE_COLOR_TRACING: bool = false;

#[cfg(feature = "version")]
shadow!(build);

/// Every option can be given as a long flag or as the environment variable of the same name.
#[derive(Parser, Clone, Debug)]
#[command(
    about = "Mirror one S3-compatible bucket into another with rclone sync, then exit."
)]
#[cfg_attr(feature = "version", command(version=format!("{} ({} {}), {}", build::PKG_VERSION, build::SHORT_COMMIT, build::BUILD_TARGET, build::RUST_VERSION)))]
pub struct CLIArgs {
    /// source S3-compatible endpoint URL
    #[arg(long, env, value_name = "URL", help_heading = "Source")]
    source_s3_endpoint: Option<String>,

    /// source access key
    #[arg(long, env, hide_env_values = true, help_heading = "Source")]
    source_access_key: Option<String>,

    /// source secret key
    #[arg(long, env, hide_env_values = true, help_heading = "Source")]
    source_secret_key: Option<String>,

    /// source bucket name
    #[arg(long, env, value_name = "BUCKET", help_heading = "Source")]
    source_bucket: Option<String>,

    /// destination S3-compatible endpoint URL
    #[arg(long, env, value_name = "URL", help_heading = "Destination")]
    dest_s3_endpoint: Option<String>,

    /// destination access key
    #[arg(long, env, hide_env_values = true, help_heading = "Destination")]
    dest_access_key: Option<String>,

    /// destination secret key
    #[arg(long, env, hide_env_values = true, help_heading = "Destination")]
    dest_secret_key: Option<String>,

    /// destination bucket name
    #[arg(long, env, value_name = "BUCKET", help_heading = "Destination")]
    dest_bucket: Option<String>,

    /// prefix under the destination bucket. The default is the source bucket name
    #[arg(long, env, value_name = "PREFIX", help_heading = "Destination")]
    dest_prefix: Option<String>,

    /// A simulation mode. no changes will be made.
    /// Only the exact value "true" enables it.
    #[arg(long, env, num_args = 0..=1, default_missing_value = DRY_RUN_ENABLED_VALUE, value_name = "true|false", help_heading = "General")]
    dry_run: Option<String>,

    /// maximum number of deletions per run. zero or a negative value removes the ceiling.
    /// [default: 1000]
    #[arg(long, env, allow_hyphen_values = true, value_name = "COUNT", help_heading = "General")]
    max_delete: Option<String>,

    /// retry count passed to rclone. [default: 3]
    #[arg(long, env, allow_hyphen_values = true, value_name = "COUNT", help_heading = "General")]
    retries: Option<String>,

    /// bandwidth limit in rclone syntax, e.g. "50M". The default is unlimited
    #[arg(long, env, value_name = "RATE", help_heading = "General")]
    bandwidth_limit: Option<String>,

    /// trace level: trace | debug | info | warn | error. [default: info]
    #[arg(long, env, value_name = "LEVEL", help_heading = "Tracing/Logging")]
    log_level: Option<String>,

    /// show trace as human-readable text instead of json
    #[arg(long, env, default_value_t = DEFAULT_TEXT_TRACING, help_heading = "Tracing/Logging")]
    text_tracing: bool,

    /// disable ANSI terminal colors
    #[arg(long, env, default_value_t = DEFAULT_DISABLE_COLOR_TRACING, help_heading = "Tracing/Logging")]
    disable_color_tracing: bool,

    /// rclone executable. [default: rclone]
    #[arg(long, env, value_name = "PATH", help_heading = "rclone")]
    rclone_path: Option<String>,

    /// directory for the transient rclone config file. [default: /tmp/rclone-config]
    #[arg(long, env, value_name = "DIRECTORY", help_heading = "rclone")]
    rclone_config_dir: Option<String>,

    /// generate a auto completions script. Valid values: bash, fish, zsh, powershell, elvish.
    #[arg(long, env, value_name = "SHELL", value_parser = clap_complete::shells::Shell::from_str, help_heading = "Advanced")]
    auto_complete_shell: Option<clap_complete::shells::Shell>,
}

impl CLIArgs {
    pub fn auto_complete_shell(&self) -> Option<clap_complete::shells::Shell> {
        self.auto_complete_shell
    }
}

pub fn parse_from_args<I, T>(args: I) -> Result<CLIArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    CLIArgs::try_parse_from(args)
}

pub fn build_config_from_args<I, T>(args: I) -> Result<Config, String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let config_args = CLIArgs::try_parse_from(args).map_err(|e| e.to_string())?;
    crate::Config::try_from(config_args).map_err(|e| e.to_string())
}

// Empty values count as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

/// Collects required values in declaration order, remembering every missing one.
#[derive(Default)]
struct RequiredValues {
    missing: Vec<&'static str>,
}

impl RequiredValues {
    fn take(&mut self, name: &'static str, value: Option<String>) -> String {
        non_empty(value).unwrap_or_else(|| {
            self.missing.push(name);
            String::new()
        })
    }

    fn finish(self) -> Result<(), S3mirrorError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(S3mirrorError::Configuration(self.missing))
        }
    }
}

impl TryFrom<CLIArgs> for Config {
    type Error = S3mirrorError;

    fn try_from(value: CLIArgs) -> Result<Self, Self::Error> {
        let mut required = RequiredValues::default();

        let source_endpoint = required.take(SOURCE_S3_ENDPOINT, value.source_s3_endpoint);
        let source_access_key = required.take(SOURCE_ACCESS_KEY, value.source_access_key);
        let source_secret_key = required.take(SOURCE_SECRET_KEY, value.source_secret_key);
        let source_bucket = required.take(SOURCE_BUCKET, value.source_bucket);
        let dest_endpoint = required.take(DEST_S3_ENDPOINT, value.dest_s3_endpoint);
        let dest_access_key = required.take(DEST_ACCESS_KEY, value.dest_access_key);
        let dest_secret_key = required.take(DEST_SECRET_KEY, value.dest_secret_key);
        let dest_bucket = required.take(DEST_BUCKET, value.dest_bucket);

        required.finish()?;

        let dest_prefix = non_empty(value.dest_prefix).unwrap_or_else(|| source_bucket.clone());
        let dry_run = value.dry_run.as_deref() == Some(DRY_RUN_ENABLED_VALUE);

        let tracing_level = parse_log_level_or_default(value.log_level.as_deref());

        Ok(Config {
            source: RemoteConfig {
                endpoint: source_endpoint,
                access_keys: AccessKeys {
                    access_key: source_access_key,
                    secret_access_key: source_secret_key,
                },
                bucket: source_bucket,
            },
            dest: RemoteConfig {
                endpoint: dest_endpoint,
                access_keys: AccessKeys {
                    access_key: dest_access_key,
                    secret_access_key: dest_secret_key,
                },
                bucket: dest_bucket,
            },
            dest_prefix,
            dry_run,
            max_delete: parse_int_or_default(value.max_delete.as_deref(), DEFAULT_MAX_DELETE),
            retries: parse_int_or_default(value.retries.as_deref(), DEFAULT_RETRIES),
            bandwidth_limit: non_empty(value.bandwidth_limit),
            tracing_config: TracingConfig {
                tracing_level,
                json_tracing: !value.text_tracing,
                disable_color_tracing: value.disable_color_tracing,
            },
            rclone_config: RcloneConfig {
                rclone_path: non_empty(value.rclone_path)
                    .unwrap_or_else(|| DEFAULT_RCLONE_PATH.to_string()),
                config_dir: PathBuf::from(
                    non_empty(value.rclone_config_dir)
                        .unwrap_or_else(|| DEFAULT_RCLONE_CONFIG_DIR.to_string()),
                ),
            },
        })
    }
}
