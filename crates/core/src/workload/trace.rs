//! Access trace replay.

use crate::common::Result;
use crate::common::constants::PAGE_SIZE;
use crate::common::PageId;
use crate::mmu::{FaultHandler, VirtualMemory};

/// One memory access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Load the byte at the address.
    Read(u64),
    /// Store the byte at the address.
    Write(u64, u8),
}

impl Access {
    /// Load of the first byte of `page`.
    pub const fn read_page(page: PageId) -> Self {
        Self::Read((page * PAGE_SIZE) as u64)
    }

    /// Store of `val` to the first byte of `page`.
    pub const fn write_page(page: PageId, val: u8) -> Self {
        Self::Write((page * PAGE_SIZE) as u64, val)
    }
}

/// Replays `trace` in order and returns the sum of the bytes loaded.
///
/// # Errors
///
/// Propagates fault-handling failures; accesses after the failing one are not performed.
pub fn replay<H: FaultHandler>(vm: &mut VirtualMemory<H>, trace: &[Access]) -> Result<i64> {
    let mut total: i64 = 0;
    for access in trace {
        match *access {
            Access::Read(addr) => total += i64::from(vm.read_u8(addr)?),
            Access::Write(addr, val) => vm.write_u8(addr, val)?,
        }
    }
    Ok(total)
}
