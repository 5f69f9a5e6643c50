use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use locator_engine::{failure_message, parse, LocatorError, Resolution, Resolver};
use semloc_cli::output::{render_report, FindReport};
use semloc_cli::snapshot::{load_snapshot, search_root};
use tracing::{debug, info};

use crate::cli::context::CliContext;

/// Snapshot, locator and search scope shared by `find` and `first`
#[derive(Args, Clone, Debug)]
pub struct TargetArgs {
    /// Accessibility snapshot (JSON, or YAML by .yaml/.yml extension)
    #[arg(short, long, value_name = "FILE")]
    pub snapshot: PathBuf,

    /// Semantic locator, e.g. "{list} outer {listitem 'Paris'}"
    #[arg(short = 'L', long)]
    pub locator: String,

    /// Also match elements hidden from assistive technology
    #[arg(long)]
    pub include_hidden: bool,

    /// Search below the element with this id instead of the snapshot root
    #[arg(long, value_name = "ID")]
    pub root: Option<String>,
}

impl TargetArgs {
    fn include_hidden(&self, ctx: &CliContext) -> bool {
        self.include_hidden || ctx.resolve_options().include_hidden
    }
}

#[derive(Args, Clone, Debug)]
pub struct FindArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Explain an empty result
    #[arg(long)]
    pub explain: bool,
}

pub async fn cmd_find(args: FindArgs, ctx: &CliContext) -> Result<()> {
    let target = &args.target;
    let snapshot = load_snapshot(&target.snapshot).await?;
    let root = search_root(&snapshot, target.root.as_deref())?;
    let include_hidden = target.include_hidden(ctx);
    let locator = parse(&target.locator)?;

    let resolver = Resolver::with_options(&snapshot, ctx.resolve_options().clone());
    let resolution = resolver.resolve(&locator, &root, include_hidden)?;
    debug!(found = resolution.elements().len(), "find complete");

    let diagnostic = match resolution.failure() {
        Some(failure) if args.explain => Some(failure_message(
            &snapshot,
            &locator,
            failure,
            None,
            resolver.options(),
        )),
        _ => None,
    };
    let report = FindReport::new(&snapshot, &locator, include_hidden, resolution.elements())
        .with_diagnostic(diagnostic);
    println!("{}", render_report(&report, ctx.output())?);
    Ok(())
}

/// Like `find`, limited to the first match; an empty result is an error
/// whose message explains the failure
pub async fn cmd_first(args: TargetArgs, ctx: &CliContext) -> Result<()> {
    let snapshot = load_snapshot(&args.snapshot).await?;
    let root = search_root(&snapshot, args.root.as_deref())?;
    let include_hidden = args.include_hidden(ctx);
    let locator = parse(&args.locator)?;

    let resolver = Resolver::with_options(&snapshot, ctx.resolve_options().clone());
    let failure = match resolver.resolve(&locator, &root, include_hidden)? {
        Resolution::Found { elements } => {
            let first = elements
                .first()
                .copied()
                .ok_or_else(|| LocatorError::internal("found an empty element list"))?;
            let report = FindReport::new(&snapshot, &locator, include_hidden, &[first]);
            println!("{}", render_report(&report, ctx.output())?);
            return Ok(());
        }
        Resolution::NotFound(failure) => failure,
    };

    let hidden = if include_hidden {
        None
    } else {
        Some(resolver.resolve(&locator, &root, true)?)
    };
    let message = failure_message(
        &snapshot,
        &locator,
        &failure,
        hidden.as_ref(),
        resolver.options(),
    );
    info!(locator = %locator, "no element found");
    Err(LocatorError::NoSuchElement(message).into())
}
