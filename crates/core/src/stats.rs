//! Simulation statistics and reporting.
//!
//! This module tracks the paging counters of a run. It provides:
//! 1. **Counters:** Page faults, disk reads and disk writes.
//! 2. **Report:** The run's configuration, counters and workload checksum.
//! 3. **Output:** The one-line CSV summary and a JSON rendering.

use std::fmt;

use serde::Serialize;

use crate::config::{Config, Program, ReplacementPolicy};

/// Paging counters of one run.
///
/// All three are monotonically non-decreasing and start at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PagerStats {
    /// Faults raised by the page table, including permission upgrades.
    pub page_faults: u64,
    /// Blocks loaded from the backing store.
    pub disk_reads: u64,
    /// Blocks written back to the backing store.
    pub disk_writes: u64,
}

/// Outcome of a complete simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Number of virtual pages.
    pub npages: usize,
    /// Number of physical frames.
    pub nframes: usize,
    /// Replacement policy used.
    pub policy: ReplacementPolicy,
    /// Workload run.
    pub program: Program,
    /// Final counters.
    pub stats: PagerStats,
    /// Checksum computed by the workload.
    pub result: i64,
}

impl RunReport {
    /// Assembles a report from the run's configuration and outcome.
    pub const fn new(config: &Config, stats: PagerStats, result: i64) -> Self {
        Self {
            npages: config.npages,
            nframes: config.nframes,
            policy: config.policy,
            program: config.program,
            stats,
            result,
        }
    }

    /// Renders the report as a JSON object.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for RunReport {
    /// Formats the summary line: `nframes,page_faults,disk_reads,disk_writes`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.nframes, self.stats.page_faults, self.stats.disk_reads, self.stats.disk_writes
        )
    }
}
