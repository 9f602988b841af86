//! Virtual address space accessors.
//!
//! `VirtualMemory` plays the role of the hardware: every access is checked
//! against the page table, and an access lacking permission traps into the
//! fault handler before being retried. Loads need [`Protection::READ`],
//! stores need [`Protection::WRITE`]. A store to a page that is not resident
//! therefore traps twice: once to bring the page in read-only, once to
//! upgrade it to writable.

use crate::common::constants::{MAX_FAULTS_PER_ACCESS, PAGE_OFFSET_MASK, PAGE_SHIFT, PAGE_SIZE};
use crate::common::{PageId, Result, SimError};

use super::{FaultHandler, PageTable, Protection};

/// A paged virtual address space backed by a page table and a fault handler.
#[derive(Debug)]
pub struct VirtualMemory<H> {
    page_table: PageTable,
    handler: H,
}

impl<H: FaultHandler> VirtualMemory<H> {
    /// Creates an address space of `npages` pages over `nframes` frames.
    pub fn new(npages: usize, nframes: usize, handler: H) -> Self {
        Self {
            page_table: PageTable::new(npages, nframes),
            handler,
        }
    }

    /// Size of the virtual region in bytes.
    pub fn len(&self) -> u64 {
        (self.page_table.npages() * PAGE_SIZE) as u64
    }

    /// Returns true if the region has no pages.
    pub fn is_empty(&self) -> bool {
        self.page_table.npages() == 0
    }

    /// Loads one byte.
    ///
    /// # Errors
    ///
    /// Fails on an out-of-range address or if fault handling fails.
    pub fn read_u8(&mut self, addr: u64) -> Result<u8> {
        let paddr = self.translate(addr, Protection::READ)?;
        Ok(self.page_table.physmem()[paddr])
    }

    /// Stores one byte.
    ///
    /// # Errors
    ///
    /// Fails on an out-of-range address or if fault handling fails.
    pub fn write_u8(&mut self, addr: u64, val: u8) -> Result<()> {
        let paddr = self.translate(addr, Protection::WRITE)?;
        self.page_table.physmem_mut()[paddr] = val;
        Ok(())
    }

    /// Loads a little-endian 32-bit word.
    ///
    /// Aligned words never straddle a page; unaligned ones are assembled byte
    /// by byte and may fault on both pages.
    ///
    /// # Errors
    ///
    /// Fails on an out-of-range address or if fault handling fails.
    pub fn read_u32(&mut self, addr: u64) -> Result<u32> {
        if addr % 4 == 0 {
            let paddr = self.translate(addr, Protection::READ)?;
            let mut bytes = [0u8; 4];
            bytes.copy_from_slice(&self.page_table.physmem()[paddr..paddr + 4]);
            return Ok(u32::from_le_bytes(bytes));
        }
        let mut bytes = [0u8; 4];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = self.read_u8(addr + i as u64)?;
        }
        Ok(u32::from_le_bytes(bytes))
    }

    /// Stores a little-endian 32-bit word.
    ///
    /// # Errors
    ///
    /// Fails on an out-of-range address or if fault handling fails.
    pub fn write_u32(&mut self, addr: u64, val: u32) -> Result<()> {
        let bytes = val.to_le_bytes();
        if addr % 4 == 0 {
            let paddr = self.translate(addr, Protection::WRITE)?;
            self.page_table.physmem_mut()[paddr..paddr + 4].copy_from_slice(&bytes);
            return Ok(());
        }
        for (i, b) in bytes.into_iter().enumerate() {
            self.write_u8(addr + i as u64, b)?;
        }
        Ok(())
    }

    /// Borrows the page table.
    pub const fn page_table(&self) -> &PageTable {
        &self.page_table
    }

    /// Borrows the fault handler.
    pub const fn handler(&self) -> &H {
        &self.handler
    }

    /// Consumes the address space, returning the page table and handler.
    pub fn into_parts(self) -> (PageTable, H) {
        (self.page_table, self.handler)
    }

    /// Resolves `addr` to a physical offset, faulting until `need` is granted.
    fn translate(&mut self, addr: u64, need: Protection) -> Result<usize> {
        let len = self.len();
        if addr >= len {
            return Err(SimError::AddressOutOfRange { addr, len });
        }
        let page = (addr >> PAGE_SHIFT) as PageId;
        let offset = (addr & PAGE_OFFSET_MASK) as usize;

        for _ in 0..MAX_FAULTS_PER_ACCESS {
            let (frame, prot) = self.page_table.entry(page)?;
            if prot.contains(need) {
                return Ok(frame * PAGE_SIZE + offset);
            }
            self.handler.handle_fault(&mut self.page_table, page)?;
        }

        let (frame, prot) = self.page_table.entry(page)?;
        if prot.contains(need) {
            Ok(frame * PAGE_SIZE + offset)
        } else {
            Err(SimError::UnresolvedFault { page })
        }
    }
}
