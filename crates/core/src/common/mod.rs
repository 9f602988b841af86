//! Common types shared by every part of the simulator.
//!
//! This module provides:
//! 1. **Constants:** Page and block geometry.
//! 2. **Identifiers:** `PageId` and `FrameIndex` aliases.
//! 3. **Error Handling:** Configuration and run-time error enums.
//! 4. **Randomness:** The seedable generator used by policies and workloads.

/// Page and block geometry constants.
pub mod constants;

/// Error types for configuration and simulation.
pub mod error;

/// Seedable pseudo-random number generator.
pub mod rng;

pub use constants::{BLOCK_SIZE, PAGE_SHIFT, PAGE_SIZE};
pub use error::{ConfigError, Result, SimError};
pub use rng::Xorshift64;

/// Index of a virtual page, in `[0, npages)`.
pub type PageId = usize;

/// Index of a physical frame, in `[0, nframes)`.
pub type FrameIndex = usize;
