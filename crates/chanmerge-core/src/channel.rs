use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ChanmergeError, Result};

/// One acquisition channel of the microscope.
///
/// Declaration order is the reference-channel priority order, so the
/// derived `Ord` keeps channel sets sorted by priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Channel {
    Blue,
    Cyan,
    Green,
    Yellow,
    Red,
    Brightfield,
}

impl Channel {
    /// All channels, in reference-channel priority order.
    pub const PRIORITY: [Channel; 6] = [
        Channel::Blue,
        Channel::Cyan,
        Channel::Green,
        Channel::Yellow,
        Channel::Red,
        Channel::Brightfield,
    ];

    /// Substring identifying this channel's files: the excitation wavelength
    /// for fluorescence channels, a marker word for brightfield.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Blue => "405",
            Self::Cyan => "445",
            Self::Green => "488",
            Self::Yellow => "515",
            Self::Red => "594",
            Self::Brightfield => "bright",
        }
    }

    /// Short tag used in diagnostics.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Blue => "bfp",
            Self::Cyan => "cfp",
            Self::Green => "gfp",
            Self::Yellow => "yfp",
            Self::Red => "rfp",
            Self::Brightfield => "bf",
        }
    }

    /// Character enabling this channel in a selection code string.
    pub fn code(&self) -> char {
        match self {
            Self::Blue => 'b',
            Self::Cyan => 'c',
            Self::Green => 'g',
            Self::Yellow => 'y',
            Self::Red => 'r',
            Self::Brightfield => 'w',
        }
    }

    fn from_code(c: char) -> Option<Channel> {
        match c {
            'b' => Some(Self::Blue),
            'c' => Some(Self::Cyan),
            'g' => Some(Self::Green),
            'y' => Some(Self::Yellow),
            'r' => Some(Self::Red),
            'w' => Some(Self::Brightfield),
            _ => None,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Validated set of enabled channels for one run.
///
/// Parsed once from the run's selection code and immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelSelection {
    enabled: BTreeSet<Channel>,
}

impl ChannelSelection {
    /// Parse a selection code string (characters from `bcgyrw`, anything
    /// else ignored).
    ///
    /// Fails when no recognized character is present, or when two channels
    /// sharing a composite slot are both enabled (`g`/`y`, `b`/`c`).
    pub fn parse(code: &str) -> Result<Self> {
        let enabled: BTreeSet<Channel> = code.chars().filter_map(Channel::from_code).collect();

        if enabled.is_empty() {
            return Err(ChanmergeError::Config(format!(
                "no recognized channel in selection {code:?} (expected characters from \"bcgyrw\")"
            )));
        }
        if enabled.contains(&Channel::Green) && enabled.contains(&Channel::Yellow) {
            return Err(ChanmergeError::Config(
                "channels g and y share the green slot and cannot both be selected".to_string(),
            ));
        }
        if enabled.contains(&Channel::Blue) && enabled.contains(&Channel::Cyan) {
            return Err(ChanmergeError::Config(
                "channels b and c share the blue slot and cannot both be selected".to_string(),
            ));
        }

        Ok(Self { enabled })
    }

    pub fn contains(&self, channel: Channel) -> bool {
        self.enabled.contains(&channel)
    }

    /// Enabled channels, in priority order.
    pub fn iter(&self) -> impl Iterator<Item = Channel> + '_ {
        self.enabled.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.enabled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }

    /// First enabled channel in priority order; its index supplies the
    /// authoritative position keys.
    pub fn reference_channel(&self) -> Channel {
        self.enabled
            .iter()
            .next()
            .copied()
            .expect("selection is never empty")
    }

    /// Canonical code string (enabled codes in priority order).
    pub fn code_string(&self) -> String {
        self.iter().map(|c| c.code()).collect()
    }
}

impl Serialize for ChannelSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code_string())
    }
}

impl<'de> Deserialize<'de> for ChannelSelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        ChannelSelection::parse(&code).map_err(serde::de::Error::custom)
    }
}
