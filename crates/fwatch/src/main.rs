//! fwatch CLI - file-activity ledger
//!
//! Binary name: `fwatch`

use std::process;

use anyhow::Result;
use fwatch_core::{config::load_config, Coordinator, TerminationSignals};
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli::build_cli().get_matches();

    let mut signals = match TerminationSignals::install() {
        Ok(signals) => signals,
        Err(e) => {
            #[allow(clippy::print_stderr)]
            {
                eprintln!("Error: Failed to setup signal handlers: {e}");
            }
            #[allow(clippy::exit)]
            process::exit(e.exit_code());
        }
    };

    // A signal abandons queued and in-flight work and still counts as success.
    let result = tokio::select! {
        result = run(&matches) => result,
        signal = signals.recv() => {
            tracing::info!(%signal, "shutting down");
            Ok(())
        }
    };

    if let Err(err) = result {
        #[allow(clippy::print_stderr)]
        {
            eprintln!("Error: {err:#}");
        }

        let code = err
            .downcast_ref::<fwatch_core::Error>()
            .map(fwatch_core::Error::exit_code)
            .unwrap_or(1);

        #[allow(clippy::exit)]
        process::exit(code);
    }
}

async fn run(matches: &clap::ArgMatches) -> Result<()> {
    let (explicit, flags) = cli::overrides(matches)?;
    let config = load_config(explicit.as_deref(), flags)?;

    tracing::info!(
        directory = %config.directory.display(),
        database = %config.database,
        concurrency = config.concurrency,
        recursive = config.recursive,
        size_mode = %config.size_mode,
        "starting fwatch"
    );

    let report = Coordinator::new(config).run().await?;
    tracing::info!(?report, "change source closed, exiting");
    Ok(())
}
