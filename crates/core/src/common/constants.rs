//! Global geometry constants.
//!
//! A page, a physical frame and a backing-store block all have the same size,
//! so a page number doubles as its block number on disk.

/// Page size in bytes (4KB).
pub const PAGE_SIZE: usize = 4096;

/// Number of bits to shift to convert between bytes and pages.
pub const PAGE_SHIFT: u32 = 12;

/// Mask for extracting the page offset from an address.
pub const PAGE_OFFSET_MASK: u64 = PAGE_SIZE as u64 - 1;

/// Backing-store block size in bytes; one block holds exactly one page.
pub const BLOCK_SIZE: usize = PAGE_SIZE;

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 0x2545_F491_4F6C_DD1D;

/// File name of the backing store when none is given.
pub const DEFAULT_DISK_PATH: &str = "myvirtualdisk";

/// Upper bound on faults raised by a single access before it is declared unresolvable.
///
/// A write to a non-resident page needs two: one to load, one to upgrade.
pub const MAX_FAULTS_PER_ACCESS: usize = 3;
