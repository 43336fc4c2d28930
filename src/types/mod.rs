use std::fmt;
use std::fmt::{Debug, Formatter};
use std::time::Duration;

use zeroize_derive::{Zeroize, ZeroizeOnDrop};

pub mod error;
pub mod token;

pub const SOURCE_REMOTE_NAME: &str = "source";
pub const DEST_REMOTE_NAME: &str = "dest";

const REDACTED: &str = "** redacted **";

/// Credentials for one S3-compatible endpoint.
/// Both keys are written only to the rclone config file, never to logs.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct AccessKeys {
    pub access_key: String,
    pub secret_access_key: String,
}

impl Debug for AccessKeys {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut keys = f.debug_struct("AccessKeys");
        keys.field("access_key", &REDACTED)
            .field("secret_access_key", &REDACTED);
        keys.finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyncOutcome {
    pub duration: Duration,
}

impl SyncOutcome {
    pub fn duration_sec(&self) -> String {
        format!("{:.3}", self.duration.as_secs_f64())
    }
}
