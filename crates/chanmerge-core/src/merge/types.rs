use crate::matcher::UnmatchedPosition;

/// One position whose open/composite/save step failed.
#[derive(Clone, Debug)]
pub struct PositionFailure {
    pub key: String,
    pub error: String,
}

/// Outcome of one merge run.
#[derive(Clone, Debug, Default)]
pub struct MergeReport {
    /// Position keys merged and written, in key order.
    pub merged: Vec<String>,
    /// Positions skipped because a channel file was missing.
    pub unmatched: Vec<UnmatchedPosition>,
    /// Positions that failed during open, composite or save.
    pub failures: Vec<PositionFailure>,
}

impl MergeReport {
    /// Total positions the reference channel contributed.
    pub fn total_positions(&self) -> usize {
        self.merged.len() + self.unmatched.len() + self.failures.len()
    }
}
