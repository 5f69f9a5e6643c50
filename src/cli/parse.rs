use anyhow::Result;
use clap::Args;
use locator_engine::parse;
use semloc_cli::output::render_locator;

use crate::cli::context::CliContext;

#[derive(Args, Clone, Debug)]
pub struct ParseArgs {
    /// Semantic locator text
    pub locator: String,
}

pub fn cmd_parse(args: ParseArgs, ctx: &CliContext) -> Result<()> {
    let locator = parse(&args.locator)?;
    println!("{}", render_locator(&locator, ctx.output())?);
    Ok(())
}
