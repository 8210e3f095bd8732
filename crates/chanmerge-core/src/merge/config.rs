use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::channel::ChannelSelection;
use crate::index::DEFAULT_DELIMITER;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Directory holding the per-channel `.tif` acquisitions.
    pub input_dir: PathBuf,
    /// Enabled channels.
    pub channels: ChannelSelection,
    /// Fragment delimiter in acquisition filenames.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Output subdirectory created under `input_dir`.
    #[serde(default = "default_output_subdir")]
    pub output_subdir: String,
    /// Process position groups on the rayon pool.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_delimiter() -> char {
    DEFAULT_DELIMITER
}

fn default_output_subdir() -> String {
    "merges".to_string()
}

fn default_parallel() -> bool {
    true
}

impl MergeConfig {
    pub fn new(input_dir: PathBuf, channels: ChannelSelection) -> Self {
        Self {
            input_dir,
            channels,
            delimiter: default_delimiter(),
            output_subdir: default_output_subdir(),
            parallel: default_parallel(),
        }
    }

    /// Full path of the output subdirectory.
    pub fn output_dir(&self) -> PathBuf {
        self.input_dir.join(&self.output_subdir)
    }
}
