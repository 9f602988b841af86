//! Random Replacement Policy.
//!
//! Evicts a uniformly random frame. The generator is seeded once when the
//! policy is built and never reseeded, so a given seed always yields the same
//! sequence of victims.

use super::{EvictionPolicy, Victim};
use crate::common::Xorshift64;
use crate::pager::frames::FrameDirectory;

/// Random Policy state.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: Xorshift64,
}

impl RandomPolicy {
    /// Creates a policy drawing from a generator seeded with `seed`.
    pub const fn new(seed: u64) -> Self {
        Self {
            rng: Xorshift64::new(seed),
        }
    }
}

impl EvictionPolicy for RandomPolicy {
    /// Picks an index in `[0, nframes)`; dirtiness is ignored.
    fn get_victim(&mut self, frames: &FrameDirectory) -> Victim {
        Victim::Frame(self.rng.below(frames.len()))
    }
}
