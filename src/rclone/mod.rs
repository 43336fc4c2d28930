//! The boundary to the rclone executable.
//!
//! rclone does all of the listing, checksum comparison, transfer, deletion and
//! retrying. This crate only renders its config file and its argument list.

pub mod command;
pub mod config_file;

pub const CONFIG_FILE_NAME: &str = "rclone.conf";
