use std::collections::BTreeMap;
use std::fmt;

use crate::channel::{Channel, ChannelSelection};
use crate::error::{ChanmergeError, Result};

/// Per-channel filenames sharing one position key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionGroup {
    pub key: String,
    pub files: BTreeMap<Channel, String>,
}

/// A position key present for the reference channel with no counterpart
/// file in some other enabled channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnmatchedPosition {
    pub key: String,
    pub channel: Channel,
}

impl fmt::Display for UnmatchedPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position {}: no matching file for channel {}",
            self.key, self.channel
        )
    }
}

impl From<UnmatchedPosition> for ChanmergeError {
    fn from(miss: UnmatchedPosition) -> Self {
        Self::UnmatchedPosition {
            key: miss.key,
            channel: miss.channel,
        }
    }
}

/// Result of joining the per-channel indices.
#[derive(Clone, Debug, Default)]
pub struct MatchOutcome {
    /// Fully matched groups, in lexicographic key order.
    pub groups: Vec<PositionGroup>,
    /// Positions skipped because a channel file was missing.
    pub unmatched: Vec<UnmatchedPosition>,
}

/// Join per-channel indices on their position keys.
///
/// The first enabled channel in [`Channel::PRIORITY`] order is the
/// reference: its keys are the authoritative position set, visited in
/// lexicographic order. A key missing from another enabled channel's index
/// is recorded in `unmatched` (first missing channel) and yields no group.
///
/// An empty or absent reference index is a configuration error: the run
/// aborts before any position is processed.
pub fn match_positions(
    indices: &BTreeMap<Channel, BTreeMap<String, String>>,
    selection: &ChannelSelection,
) -> Result<MatchOutcome> {
    let reference = selection.reference_channel();
    let reference_index = indices
        .get(&reference)
        .filter(|index| !index.is_empty())
        .ok_or_else(|| {
            ChanmergeError::Config(format!(
                "no input files found for reference channel {reference} (token \"{}\")",
                reference.token()
            ))
        })?;

    let mut outcome = MatchOutcome::default();

    'keys: for (key, filename) in reference_index {
        let mut files = BTreeMap::new();
        files.insert(reference, filename.clone());

        for channel in selection.iter().filter(|&c| c != reference) {
            match indices.get(&channel).and_then(|index| index.get(key)) {
                Some(other) => {
                    files.insert(channel, other.clone());
                }
                None => {
                    outcome.unmatched.push(UnmatchedPosition {
                        key: key.clone(),
                        channel,
                    });
                    continue 'keys;
                }
            }
        }

        outcome.groups.push(PositionGroup {
            key: key.clone(),
            files,
        });
    }

    Ok(outcome)
}
