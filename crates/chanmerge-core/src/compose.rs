use std::path::Path;

use crate::error::Result;

/// Channel-to-slot assignment for one composite call.
///
/// The composite operation has a fixed slot layout. `Green` and `Yellow`
/// share a slot, as do `Blue` and `Cyan` (the selection rules guarantee at
/// most one of each pair is enabled). `None` marks an unused slot.
#[derive(Debug)]
pub struct SlotAssignment<'a, I> {
    pub green_or_yellow: Option<&'a I>,
    pub brightfield: Option<&'a I>,
    pub blue_or_cyan: Option<&'a I>,
    pub red: Option<&'a I>,
}

impl<I> Default for SlotAssignment<'_, I> {
    fn default() -> Self {
        Self {
            green_or_yellow: None,
            brightfield: None,
            blue_or_cyan: None,
            red: None,
        }
    }
}

/// Boundary to the external composite operation.
///
/// Implementations decide how images are opened, mixed and written; the
/// orchestrator only passes opaque handles around. Every handle is owned by
/// the processing of a single position group and dropped before the next
/// group starts, so memory stays bounded across large batches.
pub trait Compositor: Send + Sync {
    /// Opened per-channel image handle.
    type Channel: Send;
    /// Composed multi-channel image handle.
    type Output: Send;

    /// Open one channel image.
    fn open(&self, path: &Path) -> Result<Self::Channel>;

    /// Compose the assigned slots into one multi-channel image.
    fn composite(&self, slots: &SlotAssignment<'_, Self::Channel>) -> Result<Self::Output>;

    /// Persist a composed image.
    fn save(&self, image: &Self::Output, path: &Path) -> Result<()>;
}
