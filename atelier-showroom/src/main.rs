//! Atelier Showroom
//!
//! Picks a furniture family, builds a matching chair, sofa and coffee table
//! from its factory, and prints what each piece has to say.
//!
//! Usage:
//!   atelier-showroom --style victorian
//!   atelier-showroom --all --format json

use anyhow::{Context, Result};
use atelier_showroom::{render, resolve_styles, OutputFormat, Tour};
use clap::Parser;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "atelier-showroom")]
#[command(about = "Walk through a matching set of furniture from one style family")]
struct Args {
    /// Style family to show (art-deco, modern, victorian)
    #[arg(short, long, env = "ATELIER_STYLE", default_value = "modern")]
    style: String,

    /// Show every style family, ignoring --style
    #[arg(short, long)]
    all: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let styles = resolve_styles(args.all, &args.style)
        .with_context(|| format!("invalid --style {:?}", args.style))?;
    debug!(?styles, format = ?args.format, "Showroom configured");

    let tours: Vec<Tour> = styles.into_iter().map(Tour::for_style).collect();
    info!(sets = tours.len(), "Showroom ready");

    let output = render(&tours, args.format).context("failed to render tours")?;
    print!("{output}");
    Ok(())
}
