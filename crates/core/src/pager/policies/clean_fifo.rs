//! Clean-preferring FIFO Replacement Policy.
//!
//! A FIFO variant that avoids write-backs. Among clean frames it evicts the
//! one loaded longest ago (smallest sequence, lowest index on ties). When
//! every frame is dirty it asks the pager to write all of them back in one
//! batch, which leaves every frame clean and read-only, and then falls back
//! to plain FIFO.
//!
//! Under write-heavy locality this trades one bulk flush for the repeated
//! individual write-backs FIFO would perform.

use super::{EvictionPolicy, Victim};
use crate::pager::frames::FrameDirectory;

/// Clean-preferring FIFO policy; stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanFifoPolicy;

impl EvictionPolicy for CleanFifoPolicy {
    fn get_victim(&mut self, frames: &FrameDirectory) -> Victim {
        frames
            .oldest_clean()
            .map_or(Victim::FlushAllThenOldest, Victim::Frame)
    }
}
