//! seglog Index Inspector
//!
//! Command-line tool for reading closed index files.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use seglog::{IndexView, Result, LAST_ENTRY};
use tracing_subscriber::{fmt, EnvFilter};

/// seglog index inspector
#[derive(Parser, Debug)]
#[command(name = "seglog-inspect")]
#[command(about = "Inspect seglog offset index files")]
#[command(version)]
struct Args {
    /// Index file to inspect
    #[arg(short, long)]
    index: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every entry
    Dump,

    /// Print a single entry
    Get {
        /// Entry number (-1 for the last entry)
        #[arg(allow_negative_numbers = true, default_value_t = LAST_ENTRY)]
        entry: i64,
    },

    /// Print entry count and bounds
    Stats,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,seglog=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("seglog-inspect v{}", seglog::VERSION);

    if let Err(e) = run(&args) {
        tracing::error!("{}: {}", args.index.display(), e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let view = IndexView::open(&args.index)?;

    match &args.command {
        Commands::Dump => {
            for (n, entry) in view.entries().enumerate() {
                println!("{}\t{}\t{}", n, entry.offset, entry.position);
            }
        }
        Commands::Get { entry } => {
            let found = view.read(*entry)?;
            println!("{}\t{}", found.offset, found.position);
        }
        Commands::Stats => {
            println!("path:    {}", view.name().display());
            println!("entries: {}", view.len());
            println!("bytes:   {}", view.size());
            if let (Some(first), Some(last)) = (view.entries().next(), view.entries().next_back()) {
                println!("first:   offset={} position={}", first.offset, first.position);
                println!("last:    offset={} position={}", last.offset, last.position);
            }
        }
    }

    Ok(())
}
