use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chanmerge_core::channel::ChannelSelection;
use chanmerge_core::io::tiff::TiffCompositor;
use chanmerge_core::merge::config::MergeConfig;
use chanmerge_core::merge::run_merge;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::summary::print_merge_summary;

#[derive(Args)]
pub struct MergeArgs {
    /// Input directory of per-channel .tif files
    #[arg(required_unless_present = "config")]
    pub dir: Option<PathBuf>,

    /// Channel selection code (characters from "bcgyrw")
    #[arg(short, long)]
    pub channels: Option<String>,

    /// Merge config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Filename fragment delimiter
    #[arg(long, default_value = "_")]
    pub delimiter: char,

    /// Output subdirectory created under the input directory
    #[arg(long, default_value = "merges")]
    pub output_subdir: String,

    /// Process positions one at a time instead of on the thread pool
    #[arg(long)]
    pub sequential: bool,
}

pub fn run(args: &MergeArgs) -> Result<()> {
    let config = resolve_config(args)?;
    debug!(?config, "Resolved merge config");

    print_merge_summary(&config);

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:10} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Merging");

    let report = run_merge(&config, &TiffCompositor, |done, total| {
        pb.set_length(total as u64);
        pb.set_position(done as u64);
    })?;

    pb.finish_and_clear();

    println!(
        "Merged {} of {} position(s) into {}",
        report.merged.len(),
        report.total_positions(),
        config.output_dir().display()
    );
    for miss in &report.unmatched {
        println!("  skipped {miss}");
    }
    for failure in &report.failures {
        println!("  failed {}: {}", failure.key, failure.error);
    }

    Ok(())
}

fn resolve_config(args: &MergeArgs) -> Result<MergeConfig> {
    if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        return toml::from_str(&contents).context("Invalid merge config");
    }

    let Some(ref dir) = args.dir else {
        bail!("an input directory is required unless --config is given");
    };
    let Some(ref code) = args.channels else {
        bail!("either --channels or --config is required");
    };

    Ok(MergeConfig {
        input_dir: dir.clone(),
        channels: ChannelSelection::parse(code)?,
        delimiter: args.delimiter,
        output_subdir: args.output_subdir.clone(),
        parallel: !args.sequential,
    })
}
