//! Memory Management Unit.
//!
//! This module implements the simulated address space that the pager serves. It provides:
//! 1. **Page Table:** Per-page frame mapping with a read/write/execute permission mask.
//! 2. **Physical Memory:** A contiguous arena of `nframes * PAGE_SIZE` bytes.
//! 3. **Virtual Memory:** Byte and word accessors that raise a page fault whenever the
//!    mapped permission is insufficient, and retry once the handler returns.

/// Page table entries, permission bits and the physical arena.
pub mod page_table;

/// Faulting accessors over the virtual address space.
pub mod vm;

pub use page_table::{PageTable, Protection};
pub use vm::VirtualMemory;

use crate::common::{PageId, Result};

/// Receiver of page faults raised by [`VirtualMemory`].
///
/// The handler is invoked synchronously with the faulting page and must update
/// the page table before returning; the access is retried afterwards.
pub trait FaultHandler {
    /// Resolves a fault on `page`.
    ///
    /// # Errors
    ///
    /// Any error is fatal to the access that raised the fault.
    fn handle_fault(&mut self, page_table: &mut PageTable, page: PageId) -> Result<()>;
}

impl<F> FaultHandler for F
where
    F: FnMut(&mut PageTable, PageId) -> Result<()>,
{
    fn handle_fault(&mut self, page_table: &mut PageTable, page: PageId) -> Result<()> {
        self(page_table, page)
    }
}
