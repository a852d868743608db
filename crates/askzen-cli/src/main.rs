use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use askzen::{AskZenBuilder, StorageConfig};

mod cli;
mod commands;
mod config;

use crate::cli::{Cli, Commands};
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    init_logging(&config);

    let storage = match cli.data_dir {
        Some(dir) => StorageConfig::Directory(dir),
        None => config.storage_config(),
    };
    let engine_config = config
        .engine_config()
        .map_err(|e| anyhow::anyhow!("Invalid engine configuration: {}", e))?;

    let mut builder = AskZenBuilder::new().storage(storage).engine_config(engine_config);
    if let Some(key) = cli.api_key.or(config.api_key) {
        builder = builder.api_key(key);
    }
    let mut app = builder.build()?;

    tracing::debug!("Running command");

    match cli.command {
        Commands::Ask { subject, query, remote } => {
            commands::ask(&mut app, &subject, &query, remote).await?
        }
        Commands::History { action } => commands::history(&mut app, action)?,
        Commands::Notes { action } => commands::notes(&mut app, action)?,
        Commands::Define { term } => commands::define(&app, &term),
    }

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let registry = tracing_subscriber::registry().with(env_filter);

    // stdout carries answers, so logs go to stderr
    match config.logging.format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }
}
