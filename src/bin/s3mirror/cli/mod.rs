use anyhow::Result;
use tracing::info;

use s3mirror::Config;
use s3mirror::pipeline::Pipeline;
use s3mirror::types::token::create_pipeline_cancellation_token;

mod ctrl_c_handler;

#[allow(dead_code)]
pub const EXIT_CODE_SUCCESS: i32 = 0;
pub const EXIT_CODE_ERROR: i32 = 1;

pub async fn run(config: Config) -> Result<()> {
    let cancellation_token = create_pipeline_cancellation_token();

    let ctrl_c_handler = ctrl_c_handler::spawn_ctrl_c_handler(cancellation_token.clone());

    info!(
        source_bucket = config.source.bucket,
        dest_bucket = config.dest.bucket,
        dest_prefix = config.dest_prefix,
        dry_run = config.dry_run,
        "s3mirror job started."
    );

    let pipeline = Pipeline::new(config, cancellation_token);
    let result = pipeline.run().await;

    ctrl_c_handler.abort();

    let outcome = result?;

    info!(
        duration_sec = outcome.duration_sec(),
        "s3mirror job completed."
    );

    Ok(())
}
