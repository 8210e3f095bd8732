use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::{info, warn};

use crate::channel::Channel;
use crate::compose::{Compositor, SlotAssignment};
use crate::error::Result;
use crate::index::build_index;
use crate::io::discover::{ensure_output_dir, list_tif_files};
use crate::matcher::{match_positions, PositionGroup};

use super::config::MergeConfig;
use super::types::{MergeReport, PositionFailure};

/// Run a full merge over `config.input_dir`.
///
/// Configuration problems (invalid selection, no files for the reference
/// channel) abort before any position is processed. Failures confined to
/// one position are logged, recorded in the report and do not stop the run.
///
/// `on_progress` is called with `(positions_done, positions_total)` after
/// each position group finishes.
pub fn run_merge<C, F>(config: &MergeConfig, compositor: &C, on_progress: F) -> Result<MergeReport>
where
    C: Compositor,
    F: Fn(usize, usize) + Sync,
{
    let filenames = list_tif_files(&config.input_dir)?;
    info!(
        files = filenames.len(),
        dir = %config.input_dir.display(),
        "Scanned input directory"
    );

    let mut indices = BTreeMap::new();
    for channel in config.channels.iter() {
        let index = build_index(&filenames, channel.token(), config.delimiter);
        info!(channel = %channel, positions = index.len(), "Indexed channel files");
        indices.insert(channel, index);
    }

    let outcome = match_positions(&indices, &config.channels)?;
    for miss in &outcome.unmatched {
        warn!(
            key = %miss.key,
            channel = %miss.channel,
            "Position has no file for channel, skipping"
        );
    }

    // Created before any group runs so concurrent groups never race on it.
    let output_dir = ensure_output_dir(&config.input_dir, &config.output_subdir)?;

    let total = outcome.groups.len();
    let done = AtomicUsize::new(0);
    let process = |group: &PositionGroup| {
        let result = merge_group(compositor, group, &config.input_dir, &output_dir);
        if let Err(ref err) = result {
            warn!(key = %group.key, error = %err, "Failed to merge position");
        }
        on_progress(done.fetch_add(1, Ordering::Relaxed) + 1, total);
        (group.key.clone(), result)
    };

    // Groups are sorted by key and collect preserves that order, so reports
    // come out identical between the parallel and sequential paths.
    let results: Vec<(String, Result<()>)> = if config.parallel {
        outcome.groups.par_iter().map(process).collect()
    } else {
        outcome.groups.iter().map(process).collect()
    };

    let mut report = MergeReport {
        unmatched: outcome.unmatched,
        ..Default::default()
    };
    for (key, result) in results {
        match result {
            Ok(()) => report.merged.push(key),
            Err(err) => report.failures.push(PositionFailure {
                key,
                error: err.to_string(),
            }),
        }
    }

    info!(
        merged = report.merged.len(),
        failed = report.failures.len(),
        skipped = report.unmatched.len(),
        "Merge run complete"
    );
    Ok(report)
}

/// Merge one position group: open every channel image, compose, save as
/// `<key>.tif`. All handles opened here are dropped on return, on success
/// and on failure alike.
fn merge_group<C: Compositor>(
    compositor: &C,
    group: &PositionGroup,
    input_dir: &Path,
    output_dir: &Path,
) -> Result<()> {
    let mut images: BTreeMap<Channel, C::Channel> = BTreeMap::new();
    for (&channel, filename) in &group.files {
        images.insert(channel, compositor.open(&input_dir.join(filename))?);
    }

    let slot = |candidates: &[Channel]| candidates.iter().find_map(|c| images.get(c));
    let slots = SlotAssignment {
        green_or_yellow: slot(&[Channel::Green, Channel::Yellow]),
        brightfield: slot(&[Channel::Brightfield]),
        blue_or_cyan: slot(&[Channel::Blue, Channel::Cyan]),
        red: slot(&[Channel::Red]),
    };

    let composed = compositor.composite(&slots)?;
    compositor.save(&composed, &output_dir.join(format!("{}.tif", group.key)))
}
