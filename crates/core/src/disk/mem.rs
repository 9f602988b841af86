//! In-memory backing store.

use std::io;

use super::{BlockDevice, check_request};
use crate::common::constants::BLOCK_SIZE;

/// A backing store held entirely in host memory, initially zeroed.
#[derive(Debug, Clone)]
pub struct MemDisk {
    data: Vec<u8>,
    nblocks: usize,
}

impl MemDisk {
    /// Creates a zeroed disk of `nblocks` blocks.
    pub fn new(nblocks: usize) -> Self {
        Self {
            data: vec![0; nblocks * BLOCK_SIZE],
            nblocks,
        }
    }

    /// Raw contents of one block, for inspection.
    ///
    /// # Panics
    ///
    /// Panics if `block` is out of range.
    pub fn block(&self, block: usize) -> &[u8] {
        let base = block * BLOCK_SIZE;
        &self.data[base..base + BLOCK_SIZE]
    }
}

impl BlockDevice for MemDisk {
    fn nblocks(&self) -> usize {
        self.nblocks
    }

    fn read_block(&mut self, block: usize, buf: &mut [u8]) -> io::Result<()> {
        check_request(block, buf.len(), self.nblocks)?;
        buf.copy_from_slice(self.block(block));
        Ok(())
    }

    fn write_block(&mut self, block: usize, buf: &[u8]) -> io::Result<()> {
        check_request(block, buf.len(), self.nblocks)?;
        let base = block * BLOCK_SIZE;
        self.data[base..base + BLOCK_SIZE].copy_from_slice(buf);
        Ok(())
    }
}
