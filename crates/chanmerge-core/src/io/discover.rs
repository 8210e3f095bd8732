use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// List the `.tif` filenames (case-insensitive extension) directly inside
/// `dir`, sorted lexicographically. Subdirectories are not descended into,
/// so a previous run's output subdirectory is never picked up as input.
pub fn list_tif_files(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        let is_tif = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("tif"));
        if !is_tif {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            names.push(name.to_string());
        }
    }

    names.sort();
    Ok(names)
}

/// Create the output subdirectory under `input_dir` if absent and return
/// its path. Called once per run, before any position group is processed.
pub fn ensure_output_dir(input_dir: &Path, subdir: &str) -> Result<PathBuf> {
    let output_dir = input_dir.join(subdir);
    fs::create_dir_all(&output_dir)?;
    Ok(output_dir)
}
