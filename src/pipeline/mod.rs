use std::path::Path;
use std::process::Stdio;

use tokio::process::{Child, Command};
use tokio::select;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::Config;
use crate::rclone::command::{build_sync_args, dest_remote, source_remote};
use crate::rclone::config_file::RcloneConfigFile;
use crate::types::SyncOutcome;
use crate::types::error::S3mirrorError;
use crate::types::token::PipelineCancellationToken;

/// One mirror run: write the rclone config file, run `rclone sync`, remove the file.
pub struct Pipeline {
    config: Config,
    cancellation_token: PipelineCancellationToken,
}

impl Pipeline {
    pub fn new(config: Config, cancellation_token: PipelineCancellationToken) -> Self {
        Self {
            config,
            cancellation_token,
        }
    }

    pub async fn run(&self) -> Result<SyncOutcome, S3mirrorError> {
        if self.cancellation_token.is_cancelled() {
            return Err(S3mirrorError::Cancelled);
        }

        let config_file = RcloneConfigFile::create(&self.config)?;
        let result = self.sync(config_file.path()).await;
        drop(config_file);

        result
    }

    async fn sync(&self, config_file_path: &Path) -> Result<SyncOutcome, S3mirrorError> {
        let args = build_sync_args(&self.config, config_file_path);

        if self.config.dry_run {
            info!("running in dry-run mode. no changes will be made.");
        }

        info!(
            source = source_remote(&self.config),
            dest = dest_remote(&self.config),
            args = ?args,
            "rclone sync started."
        );

        let start_time = Instant::now();
        let result = self.spawn_and_wait(&args).await;
        let outcome = SyncOutcome {
            duration: start_time.elapsed(),
        };

        info!(
            duration_sec = outcome.duration_sec(),
            success = result.is_ok(),
            "rclone sync finished."
        );

        result.map(|()| outcome)
    }

    async fn spawn_and_wait(&self, args: &[String]) -> Result<(), S3mirrorError> {
        let rclone_path = &self.config.rclone_config.rclone_path;

        // stdout/stderr are inherited so rclone's progress is visible as it happens.
        // The child stays in our process group.
        let mut child = Command::new(rclone_path)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| S3mirrorError::SpawnFailed {
                program: rclone_path.clone(),
                source,
            })?;

        debug!(pid = ?child.id(), "rclone process spawned.");

        let status = select! {
            status = child.wait() => status,
            _ = self.cancellation_token.cancelled() => {
                warn!("cancellation requested, stopping rclone.");

                terminate(&mut child);
                if let Err(e) = child.wait().await {
                    warn!(error = e.to_string(), "failed to wait for rclone to exit.");
                }

                return Err(S3mirrorError::Cancelled);
            }
        };

        let status = status
            .map_err(|e| S3mirrorError::SyncFailed(format!("failed to wait for rclone: {e}")))?;

        if status.success() {
            Ok(())
        } else {
            Err(S3mirrorError::SyncFailed(status.to_string()))
        }
    }
}

// SIGTERM lets rclone finish its in-flight bookkeeping before exiting.
#[cfg(unix)]
fn terminate(child: &mut Child) {
    use nix::sys::signal::{Signal, kill};
    use nix::unistd::Pid;

    let Some(pid) = child.id() else {
        return;
    };

    if let Err(e) = kill(Pid::from_raw(pid as i32), Signal::SIGTERM) {
        warn!(error = e.to_string(), "failed to send SIGTERM to rclone.");
        if let Err(e) = child.start_kill() {
            warn!(error = e.to_string(), "failed to kill rclone.");
        }
    }
}

#[cfg(not(unix))]
fn terminate(child: &mut Child) {
    if let Err(e) = child.start_kill() {
        warn!(error = e.to_string(), "failed to kill rclone.");
    }
}
