//! gsm-env - Load Secret Manager secrets into the environment.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gsm_env::cli::output;
use gsm_env::cli::{execute, Cli, LogFormat};

fn init_tracing(verbose: bool, format: LogFormat) {
    let filter = EnvFilter::try_from_env("GSM_ENV_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("gsm_env=debug")
        } else {
            EnvFilter::new("gsm_env=warn")
        }
    });

    // Logs go to stderr so `run` leaves the child's stdout alone
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .without_time(),
            )
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_format);

    match execute(cli.source, cli.command).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            output::error(&e.to_string());
            if let Some(hint) = e.hint() {
                output::hint(hint);
            }
            std::process::exit(1);
        }
    }
}
