/*!
# Overview
s3mirror is a one-shot batch job that mirrors one S3-compatible bucket into another.
It is meant to be triggered by a scheduler (e.g. a Kubernetes CronJob with `concurrencyPolicy: Forbid`),
run once, and exit with a status code the scheduler can act on.

s3mirror does not transfer any data itself. [rclone](https://rclone.org) does all of that.
s3mirror only

- reads both endpoints' credentials from the environment (or command-line flags),
- writes a transient rclone config file readable only by the current user,
- runs `rclone sync` with checksum comparison and delete-during-transfer semantics,
- removes the config file again, whichever way the run ends,
- and logs the outcome as JSON records.

## Configuration
| variable | required | default |
|---|---|---|
| `SOURCE_S3_ENDPOINT`, `SOURCE_ACCESS_KEY`, `SOURCE_SECRET_KEY`, `SOURCE_BUCKET` | yes | |
| `DEST_S3_ENDPOINT`, `DEST_ACCESS_KEY`, `DEST_SECRET_KEY`, `DEST_BUCKET` | yes | |
| `DEST_PREFIX` | no | `SOURCE_BUCKET` |
| `DRY_RUN` | no | `false` (only the exact value `true` enables it) |
| `MAX_DELETE` | no | `1000` (zero or negative: unlimited) |
| `RETRIES` | no | `3` |
| `BANDWIDTH_LIMIT` | no | unlimited |
| `LOG_LEVEL` | no | `info` |

Malformed integers fall back to their defaults and unknown log levels fall back to `info`.
All missing required variables are reported together.

## As a library

```no_run
use s3mirror::config::args::parse_from_args;
use s3mirror::pipeline::Pipeline;
use s3mirror::types::token::create_pipeline_cancellation_token;
use s3mirror::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = vec![
        "s3mirror",
        "--source-s3-endpoint",
        "https://s3.source.example.com",
        "--source-access-key",
        "SOURCE_ACCESS_KEY",
        "--source-secret-key",
        "SOURCE_SECRET_KEY",
        "--source-bucket",
        "source-bucket",
        "--dest-s3-endpoint",
        "https://s3.dest.example.com",
        "--dest-access-key",
        "DEST_ACCESS_KEY",
        "--dest-secret-key",
        "DEST_SECRET_KEY",
        "--dest-bucket",
        "dest-bucket",
        "--dry-run",
    ];

    let config = Config::try_from(parse_from_args(args).unwrap()).unwrap();

    let pipeline = Pipeline::new(config, create_pipeline_cancellation_token());
    match pipeline.run().await {
        Ok(outcome) => println!("mirrored in {} sec", outcome.duration_sec()),
        Err(e) => println!("mirror failed: {e}"),
    }
}
```
*/

pub use config::Config;
pub use config::args::CLIArgs;

pub mod config;
pub mod pipeline;
pub mod rclone;
pub mod types;
