//! Roastery storefront CLI binary.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use roastery_app::{cli::Cli, config::AppConfig, context::AppContext};

#[tokio::main]
async fn main() {
    let _env = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    let ctx = match AppContext::from_config(&config) {
        Ok(ctx) => ctx,
        Err(error) => {
            eprintln!("{error}");
            process::exit(1);
        }
    };

    if let Err(error) = cli.run(&ctx).await {
        eprintln!("{error}");
        process::exit(1);
    }
}
