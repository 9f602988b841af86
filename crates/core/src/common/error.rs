//! Error definitions.
//!
//! This module defines the two error families of the simulator:
//! 1. **Configuration Errors:** Rejected startup parameters, reported once before any state exists.
//! 2. **Simulation Errors:** Resource-initialization and backing-store I/O failures, plus
//!    accesses the page table cannot service. All of them abort the run; there is no retry.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::{FrameIndex, PageId};

/// Convenience alias used across the crate.
pub type Result<T, E = SimError> = std::result::Result<T, E>;

/// Invalid startup configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The page count was zero or negative.
    #[error("must have at least 1 page (got {0})")]
    InvalidPageCount(i64),

    /// The frame count was zero or negative.
    #[error("must have at least 1 frame (got {0})")]
    InvalidFrameCount(i64),

    /// The replacement policy name is not one of `rand`, `fifo`, `custom`.
    #[error("unknown replacement strategy: {0}")]
    UnknownPolicy(String),

    /// The workload name is not one of `sort`, `scan`, `focus`.
    #[error("unknown program: {0}")]
    UnknownProgram(String),
}

/// Fatal error raised while setting up or running a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// Startup configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The backing store could not be created.
    #[error("couldn't create virtual disk {}: {source}", path.display())]
    DiskOpen {
        /// Path of the backing file.
        path: PathBuf,
        /// Underlying system error.
        #[source]
        source: io::Error,
    },

    /// A block read or write against the backing store failed.
    #[error("disk {op} of block {page} failed: {source}")]
    DiskIo {
        /// `"read"` or `"write"`.
        op: &'static str,
        /// Block (page) number.
        page: PageId,
        /// Underlying system error.
        #[source]
        source: io::Error,
    },

    /// A virtual address beyond the end of the simulated region.
    #[error("address {addr:#x} outside virtual region of {len} bytes")]
    AddressOutOfRange {
        /// Faulting address.
        addr: u64,
        /// Size of the virtual region in bytes.
        len: u64,
    },

    /// A page number beyond the page table.
    #[error("page {page} outside page table of {npages} pages")]
    PageOutOfRange {
        /// Offending page.
        page: PageId,
        /// Number of pages in the table.
        npages: usize,
    },

    /// A frame index beyond physical memory.
    #[error("frame {frame} outside physical memory of {nframes} frames")]
    FrameOutOfRange {
        /// Offending frame.
        frame: FrameIndex,
        /// Number of frames.
        nframes: usize,
    },

    /// The fault handler returned without granting the permission the access needs.
    #[error("page fault on page {page} was not resolved by the handler")]
    UnresolvedFault {
        /// Page that kept faulting.
        page: PageId,
    },
}

impl SimError {
    /// Wraps an I/O error raised while reading `page` from the backing store.
    pub fn read(page: PageId, source: io::Error) -> Self {
        Self::DiskIo {
            op: "read",
            page,
            source,
        }
    }

    /// Wraps an I/O error raised while writing `page` to the backing store.
    pub fn write(page: PageId, source: io::Error) -> Self {
        Self::DiskIo {
            op: "write",
            page,
            source,
        }
    }
}
