//! Page Replacement Policies.
//!
//! Implements the algorithms for selecting the victim frame when a page must
//! be loaded and no frame is free.
//!
//! # Policies
//!
//! - `Random`: Uniformly random frame.
//! - `Fifo`: First-In, First-Out by load time.
//! - `CleanFifo`: Oldest clean frame first; batch flush when none is clean.
//!
//! Policies only choose. Writing back the victim, loading the new page and
//! updating the page table is the pager's shared eviction sequence.

/// Clean-preferring FIFO replacement policy.
pub mod clean_fifo;

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Random replacement policy.
pub mod random;

pub use clean_fifo::CleanFifoPolicy;
pub use fifo::FifoPolicy;
pub use random::RandomPolicy;

use std::fmt;

use super::frames::FrameDirectory;
use crate::common::FrameIndex;
use crate::config::ReplacementPolicy;

/// Outcome of victim selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Victim {
    /// Evict this frame.
    Frame(FrameIndex),
    /// Write every resident frame back first, then evict the oldest frame.
    FlushAllThenOldest,
}

/// Trait for page replacement policies.
///
/// Called only when every frame is occupied.
pub trait EvictionPolicy: fmt::Debug {
    /// Selects the frame to evict.
    ///
    /// # Arguments
    ///
    /// * `frames` - The frame directory at the time of the fault.
    fn get_victim(&mut self, frames: &FrameDirectory) -> Victim;
}

/// Builds the policy selected by `kind`.
///
/// # Arguments
///
/// * `kind` - Configured policy.
/// * `seed` - Generator seed; only the random policy uses it.
pub fn build(kind: ReplacementPolicy, seed: u64) -> Box<dyn EvictionPolicy> {
    match kind {
        ReplacementPolicy::Random => Box::new(RandomPolicy::new(seed)),
        ReplacementPolicy::Fifo => Box::new(FifoPolicy),
        ReplacementPolicy::Custom => Box::new(CleanFifoPolicy),
    }
}
