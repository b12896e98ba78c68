//! devlogo - red-tinted "dev" logo generator
//!
//! Rotates the cyan/blue hues of a PNG logo toward red while keeping
//! whites, dark details and transparency intact.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "devlogo")]
#[command(author, version, about = "Generate a red-tinted dev variant of a PNG logo")]
#[command(long_about = "
Generate a red-tinted \"dev\" variant of a PNG logo.

Cyan and blue hues (120-260 degrees) are rotated into a red band wrapping
through 0 degrees and slightly saturated. Whites, near-black details and
transparent pixels are left alone. The result is always written as RGBA.

Examples:
  devlogo                               # logo.png -> logo-dev.png
  devlogo icon.png icon-dev.png         # Explicit paths
  devlogo -vv icon.png out.png          # Debug logging
  RUST_LOG=devlogo_ops=trace devlogo    # Fine-grained log filter
")]
struct Cli {
    /// Source PNG
    #[arg(default_value = "logo.png")]
    source: PathBuf,

    /// Destination PNG
    #[arg(default_value = "logo-dev.png")]
    dest: PathBuf,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, default_value = "0")]
    threads: usize,
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    commands::generate::run(&cli.source, &cli.dest)
}
