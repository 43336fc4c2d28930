#[cfg(test)]
mod tests {
    use crate::config::args::tests::{required_args, required_args_with};
    use crate::config::args::*;

    #[test]
    fn with_default_value() {
        init_dummy_tracing_subscriber();

        let config = build_config_from_args(required_args()).unwrap();

        assert!(!config.dry_run);
    }

    #[test]
    fn with_flag_only() {
        init_dummy_tracing_subscriber();

        let config = build_config_from_args(required_args_with(&["--dry-run"])).unwrap();

        assert!(config.dry_run);
        assert_eq!(config.tracing_config.tracing_level, log::Level::Info);
    }

    #[test]
    fn with_exact_true() {
        init_dummy_tracing_subscriber();

        let config = build_config_from_args(required_args_with(&["--dry-run", "true"])).unwrap();

        assert!(config.dry_run);
    }

    #[test]
    fn only_exact_true_enables() {
        init_dummy_tracing_subscriber();

        for value in ["false", "True", "TRUE", "1", "yes", "", " true"] {
            let config = build_config_from_args(required_args_with(&["--dry-run", value])).unwrap();

            assert!(!config.dry_run, "{value:?} must not enable dry-run");
        }
    }

    #[test]
    fn keeps_configured_error_level() {
        init_dummy_tracing_subscriber();

        let config = build_config_from_args(required_args_with(&[
            "--dry-run",
            "--log-level",
            "error",
        ]))
        .unwrap();

        assert!(config.dry_run);
        assert_eq!(config.tracing_config.tracing_level, log::Level::Error);
    }

    #[test]
    fn keeps_debug_level() {
        init_dummy_tracing_subscriber();

        let config = build_config_from_args(required_args_with(&[
            "--dry-run",
            "--log-level",
            "debug",
        ]))
        .unwrap();

        assert_eq!(config.tracing_config.tracing_level, log::Level::Debug);
    }

    fn init_dummy_tracing_subscriber() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("dummy=trace")
            .try_init();
    }
}
