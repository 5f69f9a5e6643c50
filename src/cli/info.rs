use anyhow::Result;
use locator_engine::supported_attributes;

use crate::cli::context::CliContext;

pub fn cmd_info(ctx: &CliContext) -> Result<()> {
    let config = ctx.config();

    println!("semloc Information");
    println!("==================");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!("Build Date: {}", env!("SEMLOC_BUILD_DATE"));
    println!("Git Commit: {}", env!("SEMLOC_GIT_HASH"));
    println!();

    println!("Configuration:");
    match ctx.config_path() {
        Some(path) => println!("- Config File: {}", path.display()),
        None => println!("- Config File: (defaults)"),
    }
    println!("- Log Level: {}", config.log_level);
    println!("- Include Hidden: {}", config.resolve.include_hidden);
    println!(
        "- Max Listed Candidates: {}",
        config.resolve.max_listed_candidates
    );
    println!();

    let attributes: Vec<&str> = supported_attributes().collect();
    println!("Supported Attributes: {}", attributes.join(", "));
    Ok(())
}
