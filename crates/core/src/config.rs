//! Configuration system for the paging simulator.
//!
//! This module defines the run parameters and the closed sets of choices they draw from. It provides:
//! 1. **Defaults:** Seed and backing-store location used when the caller gives none.
//! 2. **Enums:** Replacement policy, workload program, and backing-store kind.
//! 3. **Validation:** `Config::from_args` turns raw command-line values into a checked `Config`.
//!
//! A `Config` is immutable once built; the policy in particular is fixed for the lifetime of a run.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::ConfigError;
use crate::common::constants::{DEFAULT_DISK_PATH, DEFAULT_SEED};

/// Page-replacement policy algorithms.
///
/// Specifies the algorithm used to pick a victim frame when a page must be
/// loaded and every frame is occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplacementPolicy {
    /// Uniformly random frame, seeded once per run.
    #[serde(rename = "rand")]
    Random,
    /// Frame loaded longest ago, irrespective of dirtiness.
    Fifo,
    /// Oldest clean frame; when every frame is dirty, flush all and fall back to FIFO.
    Custom,
}

impl ReplacementPolicy {
    /// All policies, in command-line order.
    pub const ALL: [Self; 3] = [Self::Random, Self::Fifo, Self::Custom];

    /// Command-line name of the policy.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Random => "rand",
            Self::Fifo => "fifo",
            Self::Custom => "custom",
        }
    }
}

impl FromStr for ReplacementPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownPolicy(s.to_string()))
    }
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Synthetic workload run against the virtual region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Program {
    /// Fill with random integers, then sort them in place.
    Sort,
    /// Sequential fill followed by ten sequential read passes.
    Scan,
    /// Bursts of writes clustered in small random windows.
    Focus,
}

impl Program {
    /// All programs, in command-line order.
    pub const ALL: [Self; 3] = [Self::Sort, Self::Scan, Self::Focus];

    /// Command-line name of the program.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sort => "sort",
            Self::Scan => "scan",
            Self::Focus => "focus",
        }
    }
}

impl FromStr for Program {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownProgram(s.to_string()))
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where page contents live while they are not resident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiskConfig {
    /// A file on the host, created (or truncated) at startup.
    File(PathBuf),
    /// A zeroed in-memory block array.
    Memory,
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_DISK_PATH))
    }
}

/// Parameters of one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Number of virtual pages.
    pub npages: usize,
    /// Number of physical frames.
    pub nframes: usize,
    /// Victim selection algorithm.
    pub policy: ReplacementPolicy,
    /// Workload to run.
    pub program: Program,
    /// Seed for the random replacement policy.
    pub seed: u64,
    /// Backing store location.
    pub disk: DiskConfig,
}

impl Config {
    /// Creates a configuration with the default seed and backing store.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPageCount` or `InvalidFrameCount` when a count is zero.
    pub fn new(
        npages: usize,
        nframes: usize,
        policy: ReplacementPolicy,
        program: Program,
    ) -> Result<Self, ConfigError> {
        if npages == 0 {
            return Err(ConfigError::InvalidPageCount(0));
        }
        if nframes == 0 {
            return Err(ConfigError::InvalidFrameCount(0));
        }
        Ok(Self {
            npages,
            nframes,
            policy,
            program,
            seed: DEFAULT_SEED,
            disk: DiskConfig::default(),
        })
    }

    /// Validates raw command-line values.
    ///
    /// Checks run in the order the values appear on the command line: page
    /// count, frame count, policy name, program name. The first failure wins.
    ///
    /// # Arguments
    ///
    /// * `npages` - Requested page count; must be positive.
    /// * `nframes` - Requested frame count; must be positive.
    /// * `policy` - One of `rand`, `fifo`, `custom`.
    /// * `program` - One of `sort`, `scan`, `focus`.
    ///
    /// # Errors
    ///
    /// Returns the `ConfigError` describing the first invalid value.
    pub fn from_args(
        npages: i64,
        nframes: i64,
        policy: &str,
        program: &str,
    ) -> Result<Self, ConfigError> {
        let npages = usize::try_from(npages)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(ConfigError::InvalidPageCount(npages))?;
        let nframes = usize::try_from(nframes)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(ConfigError::InvalidFrameCount(nframes))?;
        let policy = policy.parse()?;
        let program = program.parse()?;
        Self::new(npages, nframes, policy, program)
    }

    /// Replaces the random-policy seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replaces the backing store.
    #[must_use]
    pub fn with_disk(mut self, disk: DiskConfig) -> Self {
        self.disk = disk;
        self
    }
}
