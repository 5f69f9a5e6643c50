use super::env::CliArgs;
use super::find::{cmd_find, cmd_first};
use super::info::cmd_info;
use super::parse::cmd_parse;
use crate::cli::commands::Commands;
use crate::cli::context::CliContext;
use anyhow::Result;

pub async fn dispatch(cli: &CliArgs, ctx: &CliContext) -> Result<()> {
    match cli.command.clone() {
        Commands::Find(args) => cmd_find(args, ctx).await,
        Commands::First(args) => cmd_first(args, ctx).await,
        Commands::Parse(args) => cmd_parse(args, ctx),
        Commands::Info => cmd_info(ctx),
    }
}
