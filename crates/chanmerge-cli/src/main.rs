mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chanmerge", about = "Multi-channel microscopy image merge tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match per-channel TIFF files by stage position and merge them
    Merge(commands::merge::MergeArgs),
    /// List the supported channels and their selection codes
    Channels(commands::channels::ChannelsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Merge(args) => commands::merge::run(args),
        Commands::Channels(args) => commands::channels::run(args),
    }
}
