//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! Evicts the frame loaded longest ago, regardless of how recently it was
//! accessed or whether it is dirty. Load order is read off the frame
//! directory's sequence numbers, so no queue is kept.
//!
//! # Performance
//!
//! - **Time Complexity:** `get_victim()` is O(F) where F is the number of frames
//! - **Space Complexity:** O(1)
//! - **Worst Case:** Loops slightly larger than physical memory (every access faults)

use super::{EvictionPolicy, Victim};
use crate::pager::frames::FrameDirectory;

/// FIFO policy; stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct FifoPolicy;

impl EvictionPolicy for FifoPolicy {
    /// Returns the frame with the smallest sequence, lowest index on ties.
    fn get_victim(&mut self, frames: &FrameDirectory) -> Victim {
        Victim::Frame(frames.oldest())
    }
}
