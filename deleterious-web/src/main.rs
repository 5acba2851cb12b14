//! Deleterious web server entry point
//!
//! Usage: `deleterious-web [CONFIG]`. Without an argument the configuration is
//! read from `DELETERIOUS_CONFIG`, then `config.toml`.

use std::path::PathBuf;
use std::process::ExitCode;

use deleterious_web::{config::Config, logger, server};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::load(std::env::args_os().nth(1).map(PathBuf::from))?;
    let _guard = logger::init(&config.logging)?;

    tracing::info!(
        "Starting Deleterious web v{} ({} resource(s))",
        env!("CARGO_PKG_VERSION"),
        config.resources.len()
    );
    server::run(config).await
}
