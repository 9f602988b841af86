//! Backing store adapter.
//!
//! Wraps a [`BlockDevice`] and counts every block transferred. I/O errors are
//! tagged with the page involved and returned as fatal [`SimError`]s.

use crate::common::{PageId, Result, SimError};
use crate::disk::BlockDevice;

/// A block device plus read/write counters.
#[derive(Debug)]
pub struct BackingStore<D> {
    device: D,
    reads: u64,
    writes: u64,
}

impl<D: BlockDevice> BackingStore<D> {
    /// Wraps `device` with zeroed counters.
    pub const fn new(device: D) -> Self {
        Self {
            device,
            reads: 0,
            writes: 0,
        }
    }

    /// Loads the block of `page` into `frame_buf` and counts one read.
    ///
    /// # Errors
    ///
    /// Returns `SimError::DiskIo` if the device fails.
    pub fn read(&mut self, page: PageId, frame_buf: &mut [u8]) -> Result<()> {
        self.device
            .read_block(page, frame_buf)
            .map_err(|e| SimError::read(page, e))?;
        self.reads += 1;
        Ok(())
    }

    /// Stores `frame_buf` as the block of `page` and counts one write.
    ///
    /// # Errors
    ///
    /// Returns `SimError::DiskIo` if the device fails.
    pub fn write(&mut self, page: PageId, frame_buf: &[u8]) -> Result<()> {
        self.device
            .write_block(page, frame_buf)
            .map_err(|e| SimError::write(page, e))?;
        self.writes += 1;
        Ok(())
    }

    /// Blocks read so far.
    pub const fn reads(&self) -> u64 {
        self.reads
    }

    /// Blocks written so far.
    pub const fn writes(&self) -> u64 {
        self.writes
    }

    /// Borrows the wrapped device.
    pub const fn device(&self) -> &D {
        &self.device
    }

    /// Unwraps the device.
    pub fn into_device(self) -> D {
        self.device
    }
}
