#[cfg(test)]
mod tests {
    use crate::config::args::tests::{required_args, required_args_with};
    use crate::config::args::*;

    #[test]
    fn with_default_value() {
        init_dummy_tracing_subscriber();

        let config = build_config_from_args(required_args()).unwrap();

        assert_eq!(config.retries, DEFAULT_RETRIES);
    }

    #[test]
    fn with_custom_value() {
        init_dummy_tracing_subscriber();

        let config = build_config_from_args(required_args_with(&["--retries", "10"])).unwrap();

        assert_eq!(config.retries, 10);
    }

    #[test]
    fn invalid_value_falls_back_to_default() {
        init_dummy_tracing_subscriber();

        let config = build_config_from_args(required_args_with(&["--retries", "three"])).unwrap();

        assert_eq!(config.retries, 3);
    }

    fn init_dummy_tracing_subscriber() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("dummy=trace")
            .try_init();
    }
}
