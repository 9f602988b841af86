//! Demand-paging simulator library.
//!
//! This crate simulates a paged virtual address space served by a small pool of
//! physical frames, and compares page-replacement policies on it:
//! 1. **MMU:** Page table with permission bits and faulting byte/word accessors.
//! 2. **Pager:** Fault handler, frame directory, counted backing store, and the
//!    random, FIFO and clean-preferring FIFO replacement policies.
//! 3. **Disk:** File-backed and in-memory block devices.
//! 4. **Workloads:** Scan, sort and focus programs plus trace replay.
//! 5. **Simulation:** Configuration, run controller, counters and reporting.

/// Common types and constants (geometry, identifiers, errors, RNG).
pub mod common;
/// Run configuration (policy, program, disk, seed) and validation.
pub mod config;
/// Backing-store block devices.
pub mod disk;
/// Page table and virtual memory accessors.
pub mod mmu;
/// Fault handling, frame directory and replacement policies.
pub mod pager;
/// Run controller.
pub mod sim;
/// Paging counters and run reports.
pub mod stats;
/// Synthetic workloads.
pub mod workload;

/// Crate-wide error type.
pub use crate::common::{ConfigError, SimError};
/// Root configuration type; build with `Config::from_args` or `Config::new`.
pub use crate::config::Config;
/// Paging context implementing the fault handler.
pub use crate::pager::Pager;
/// Single-run driver.
pub use crate::sim::Simulator;
/// Final counters and summary line.
pub use crate::stats::{PagerStats, RunReport};
