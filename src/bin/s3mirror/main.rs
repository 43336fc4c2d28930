use ::tracing::{error, trace};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use rusty_fork::rusty_fork_test;

use s3mirror::CLIArgs;
use s3mirror::Config;
use s3mirror::config::TracingConfig;
use s3mirror::types::error::S3mirrorError;

mod cli;
mod tracing;

#[cfg(not(tarpaulin_include))]
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli_args = CLIArgs::parse();

    if let Some(shell) = cli_args.auto_complete_shell() {
        generate(
            shell,
            &mut CLIArgs::command(),
            "s3mirror",
            &mut std::io::stdout(),
        );

        return;
    }

    let config = load_config_exit_if_err(cli_args);

    tracing::init_tracing(&config.tracing_config);

    trace!("config = {:?}", config);

    if let Err(e) = cli::run(config).await {
        error!(error = e.to_string(), "s3mirror job failed.");
        std::process::exit(cli::EXIT_CODE_ERROR);
    }
}

#[cfg(not(tarpaulin_include))]
fn load_config_exit_if_err(cli_args: CLIArgs) -> Config {
    match build_config(cli_args) {
        Ok(config) => config,
        Err(e) => {
            // The configured level is unknown here; report with the defaults.
            tracing::init_tracing(&TracingConfig::default());
            error!(error = e.to_string(), "configuration error.");
            std::process::exit(cli::EXIT_CODE_ERROR);
        }
    }
}

fn build_config(cli_args: CLIArgs) -> Result<Config, S3mirrorError> {
    Config::try_from(cli_args)
}

rusty_fork_test! {
    #[test]
    fn with_tracing() {
        let args = vec![
            "unittest",
            "--source-s3-endpoint",
            "https://source.s3.example.com",
            "--source-access-key",
            "source_access_key",
            "--source-secret-key",
            "source_secret_key",
            "--source-bucket",
            "source-bucket",
            "--dest-s3-endpoint",
            "https://dest.s3.example.com",
            "--dest-access-key",
            "dest_access_key",
            "--dest-secret-key",
            "dest_secret_key",
            "--dest-bucket",
            "dest-bucket",
        ];

        let config = build_config(CLIArgs::try_parse_from(args).unwrap()).unwrap();
        tracing::init_tracing(&config.tracing_config);
    }

    #[test]
    fn without_required_values() {
        let args = vec!["unittest", "--source-bucket", "source-bucket"];

        let error = build_config(CLIArgs::try_parse_from(args).unwrap()).unwrap_err();
        assert_eq!(error.missing_variables().unwrap().len(), 7);

        tracing::init_tracing(&TracingConfig::default());
    }
}
