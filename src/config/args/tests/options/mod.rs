mod dry_run;
mod rclone;
mod retries;
