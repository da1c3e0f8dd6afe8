//! Vaultsync - keep a secret store and a pipeline workspace in sync.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vaultsync::cli::output;
use vaultsync::cli::{execute, Cli};
use vaultsync::core::constants;
use vaultsync::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // stdout carries the JSON response, so logs go to stderr
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("vaultsync=debug")
        } else {
            EnvFilter::new("vaultsync=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingField { field }) => {
                Some(format!("set '{}' in the resource configuration", field))
            }
            Error::Config(ConfigError::InvalidValue { field: "url", .. }) => {
                Some("use a file:// store url".to_string())
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
