//! Block-addressable backing stores.
//!
//! This module provides the swap device the pager pages against. It provides:
//! 1. **Interface:** The `BlockDevice` trait, fixed-size block read/write keyed by page number.
//! 2. **File Disk:** A host file sized to `nblocks * BLOCK_SIZE` bytes.
//! 3. **Memory Disk:** A zeroed in-memory block array for tests and disk-less runs.

/// Host-file backing store.
pub mod file;

/// In-memory backing store.
pub mod mem;

pub use file::FileDisk;
pub use mem::MemDisk;

use std::fmt;
use std::io;

use crate::common::constants::BLOCK_SIZE;

/// A device storing `nblocks` blocks of [`BLOCK_SIZE`] bytes.
///
/// Block `n` holds the contents of virtual page `n` while it is not resident.
pub trait BlockDevice: fmt::Debug {
    /// Number of blocks on the device.
    fn nblocks(&self) -> usize;

    /// Reads block `block` into `buf`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an out-of-range block or a buffer that is
    /// not exactly one block long, or any error reported by the medium.
    fn read_block(&mut self, block: usize, buf: &mut [u8]) -> io::Result<()>;

    /// Writes `buf` to block `block`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`BlockDevice::read_block`].
    fn write_block(&mut self, block: usize, buf: &[u8]) -> io::Result<()>;
}

impl<D: BlockDevice + ?Sized> BlockDevice for Box<D> {
    fn nblocks(&self) -> usize {
        (**self).nblocks()
    }

    fn read_block(&mut self, block: usize, buf: &mut [u8]) -> io::Result<()> {
        (**self).read_block(block, buf)
    }

    fn write_block(&mut self, block: usize, buf: &[u8]) -> io::Result<()> {
        (**self).write_block(block, buf)
    }
}

/// Validates a block request against the device geometry.
pub(crate) fn check_request(block: usize, len: usize, nblocks: usize) -> io::Result<()> {
    if block >= nblocks {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("block {block} out of range (device has {nblocks} blocks)"),
        ));
    }
    if len != BLOCK_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("buffer of {len} bytes, expected {BLOCK_SIZE}"),
        ));
    }
    Ok(())
}
