//! Locality-focused writes.
//!
//! After zeroing the region, performs 100 bursts; each burst picks a random
//! start and writes 100 random bytes inside the 25-byte window following it.
//! Only a handful of pages are hot at any time, and almost all are dirty.

use crate::common::{Result, Xorshift64};
use crate::mmu::{FaultHandler, VirtualMemory};

const SEED: u64 = 38290;
const BURSTS: usize = 100;
const WRITES_PER_BURST: usize = 100;
const WINDOW: usize = 25;

/// Runs the focus workload and returns the sum of the final region contents.
///
/// # Errors
///
/// Propagates fault-handling failures.
pub fn run<H: FaultHandler>(vm: &mut VirtualMemory<H>) -> Result<i64> {
    let len = vm.len();
    let mut rng = Xorshift64::new(SEED);

    for addr in 0..len {
        vm.write_u8(addr, 0)?;
    }

    for _ in 0..BURSTS {
        let start = rng.below(len as usize) as u64;
        for _ in 0..WRITES_PER_BURST {
            let addr = (start + rng.below(WINDOW) as u64) % len;
            vm.write_u8(addr, rng.next_u32() as u8)?;
        }
    }

    let mut total: i64 = 0;
    for addr in 0..len {
        total += i64::from(vm.read_u8(addr)?);
    }
    Ok(total)
}
