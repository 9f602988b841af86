//! Sequential scan: write every byte once, then read the region ten times.

use crate::common::Result;
use crate::mmu::{FaultHandler, VirtualMemory};

/// Number of read passes after the fill.
const PASSES: usize = 10;

/// Runs the scan and returns the sum of all bytes read.
///
/// # Errors
///
/// Propagates fault-handling failures.
pub fn run<H: FaultHandler>(vm: &mut VirtualMemory<H>) -> Result<i64> {
    let len = vm.len();
    for addr in 0..len {
        vm.write_u8(addr, (addr % 256) as u8)?;
    }

    let mut total: i64 = 0;
    for _ in 0..PASSES {
        for addr in 0..len {
            total += i64::from(vm.read_u8(addr)?);
        }
    }
    Ok(total)
}
