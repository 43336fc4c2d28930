use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::config::{Config, RemoteConfig};
use crate::types::error::S3mirrorError;
use crate::types::{DEST_REMOTE_NAME, SOURCE_REMOTE_NAME};

#[cfg(unix)]
const CONFIG_DIR_MODE: u32 = 0o700;
#[cfg(unix)]
const CONFIG_FILE_MODE: u32 = 0o600;

/// The rclone config file holding both remotes' credentials.
///
/// The file is removed when this guard is dropped, whichever way the run ends.
#[derive(Debug)]
pub struct RcloneConfigFile {
    path: PathBuf,
}

impl RcloneConfigFile {
    pub fn create(config: &Config) -> Result<Self, S3mirrorError> {
        let config_dir = &config.rclone_config.config_dir;
        create_config_dir(config_dir).map_err(|source| S3mirrorError::CredentialDirectory {
            path: config_dir.clone(),
            source,
        })?;

        let path = config.rclone_config.config_file_path();
        let content = render(config);
        write_config_file(&path, content.as_bytes()).map_err(|source| {
            S3mirrorError::CredentialFile {
                path: path.clone(),
                source,
            }
        })?;

        debug!(path = %path.display(), "rclone config file has been written.");

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for RcloneConfigFile {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "rclone config file has been removed."),
            Err(e) => warn!(
                path = %self.path.display(),
                error = e.to_string(),
                "failed to remove rclone config file."
            ),
        }
    }
}

/// Renders the `[source]` and `[dest]` sections in rclone's INI syntax.
pub fn render(config: &Config) -> Zeroizing<String> {
    let mut content = Zeroizing::new(String::new());
    render_remote(&mut content, SOURCE_REMOTE_NAME, &config.source);
    content.push('\n');
    render_remote(&mut content, DEST_REMOTE_NAME, &config.dest);
    content
}

fn render_remote(content: &mut String, name: &str, remote: &RemoteConfig) {
    // Writing into a String cannot fail.
    let _ = write!(
        content,
        "[{name}]\n\
         type = s3\n\
         provider = Other\n\
         access_key_id = {}\n\
         secret_access_key = {}\n\
         endpoint = {}\n\
         acl = private\n",
        remote.access_keys.access_key, remote.access_keys.secret_access_key, remote.endpoint
    );
}

fn create_config_dir(config_dir: &Path) -> std::io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(CONFIG_DIR_MODE);
    }
    builder.create(config_dir)
}

fn write_config_file(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use nix::fcntl::OFlag;
        use std::os::unix::fs::OpenOptionsExt;
        // The directory may be world-writable; never write secrets through a planted symlink.
        options
            .mode(CONFIG_FILE_MODE)
            .custom_flags(OFlag::O_NOFOLLOW.bits());
    }

    let mut file = options.open(path)?;

    // A file left over by a killed run keeps its old mode; tighten it before writing secrets.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(CONFIG_FILE_MODE))?;
    }

    file.write_all(content)?;
    file.sync_all()
}
