#[cfg(test)]
mod tests {
    use crate::config::args::tests::required_args_with;
    use crate::config::args::*;

    #[test]
    fn with_custom_value() {
        init_dummy_tracing_subscriber();

        let config = build_config_from_args(required_args_with(&[
            "--rclone-path",
            "/usr/local/bin/rclone",
            "--rclone-config-dir",
            "/run/s3mirror",
        ]))
        .unwrap();

        assert_eq!(config.rclone_config.rclone_path, "/usr/local/bin/rclone");
        assert_eq!(
            config.rclone_config.config_file_path(),
            PathBuf::from("/run/s3mirror/rclone.conf")
        );
    }

    #[test]
    fn empty_value_uses_default() {
        init_dummy_tracing_subscriber();

        let config = build_config_from_args(required_args_with(&[
            "--rclone-path",
            "",
            "--rclone-config-dir",
            "",
        ]))
        .unwrap();

        assert_eq!(config.rclone_config.rclone_path, DEFAULT_RCLONE_PATH);
        assert_eq!(
            config.rclone_config.config_dir,
            PathBuf::from(DEFAULT_RCLONE_CONFIG_DIR)
        );
    }

    fn init_dummy_tracing_subscriber() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("dummy=trace")
            .try_init();
    }
}
