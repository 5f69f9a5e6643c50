use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use super::context::CliContext;
use super::dispatch::dispatch;
use super::env::CliArgs;
use super::runtime::init_logging;
use semloc_cli::config::{load_config, LoadedConfig};

pub async fn run() -> Result<()> {
    let cli = CliArgs::parse();

    let LoadedConfig { config, path } = load_config(cli.config.as_deref()).await?;
    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    init_logging(level, cli.debug)?;

    info!("Starting semloc v{}", env!("CARGO_PKG_VERSION"));
    let cli_context = CliContext::new(config, path, cli.output);

    match dispatch(&cli, &cli_context).await {
        Ok(()) => {
            info!("Command completed successfully");
            Ok(())
        }
        Err(err) => {
            error!("Command failed: {}", err);
            Err(err)
        }
    }
}
