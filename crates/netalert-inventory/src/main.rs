//! `netalert-inventory` binary.
//!
//! Prints an Ansible dynamic inventory on stdout, or a single `error:` line on
//! stderr and a non-zero exit status.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use netalert_api::DevicesClient;
use netalert_core::config::debug_enabled;
use netalert_core::{ApiConfig, Error, ErrorCategory};
use netalert_inventory::cli::{run, Cli};
use netalert_inventory::Result;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEBUG_DIRECTIVES: &str = "netalert_inventory=debug,netalert_api=debug,netalert_core=debug";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(debug_enabled(|key| std::env::var(key).ok()));

    match execute(&cli).await {
        Ok(document) => {
            println!("{document}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", diagnostic(&err));
            ExitCode::from(err.exit_code())
        }
    }
}

async fn execute(cli: &Cli) -> Result<String> {
    let config = ApiConfig::from_env()?;
    let url = config.devices_url()?;
    debug!(url = %url, "API URL");

    let client = DevicesClient::from_config(&config)?;
    run(cli, &client).await
}

/// Stderr subscriber; `NETALERTX_DEBUG=1` enables debug for this workspace's
/// crates only, otherwise `RUST_LOG` applies with a `warn` fallback.
fn init_tracing(debug: bool) {
    tracing_subscriber::registry()
        .with(log_filter(debug))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();
}

fn log_filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new(DEBUG_DIRECTIVES)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

/// One-line diagnostic written to stderr before exiting.
fn diagnostic(err: &Error) -> String {
    let line = match err.category() {
        ErrorCategory::Transport => format!("error: API request failed: {err}"),
        ErrorCategory::Configuration | ErrorCategory::Decode | ErrorCategory::Output => {
            format!("error: {err}")
        }
    };
    line.replace(['\r', '\n'], " ")
}
