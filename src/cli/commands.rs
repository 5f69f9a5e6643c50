use clap::Subcommand;

use super::find::{FindArgs, TargetArgs};
use super::parse::ParseArgs;

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Find all elements matching a semantic locator
    Find(FindArgs),

    /// Find the first matching element, failing with a diagnostic if none
    First(TargetArgs),

    /// Validate a semantic locator and show its structure
    Parse(ParseArgs),

    /// Show version and effective configuration
    Info,
}
