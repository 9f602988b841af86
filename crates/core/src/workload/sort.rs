//! In-place integer sort.
//!
//! Treats the region as an array of little-endian `i32`, fills it from a
//! fixed-seed generator and sorts it with an iterative quicksort. Every
//! comparison and swap goes through the faulting accessors, so the access
//! pattern is that of a real sort running on paged memory.

use crate::common::{Result, Xorshift64};
use crate::mmu::{FaultHandler, VirtualMemory};

const SEED: u64 = 4856;

/// Runs the sort and returns the wrapping sum of the sorted elements.
///
/// # Errors
///
/// Propagates fault-handling failures.
pub fn run<H: FaultHandler>(vm: &mut VirtualMemory<H>) -> Result<i64> {
    let n = vm.len() / 4;
    let mut rng = Xorshift64::new(SEED);

    for i in 0..n {
        // Non-negative 31-bit values.
        set(vm, i, (rng.next_u32() >> 1) as i32)?;
    }

    quicksort(vm, n)?;

    let mut total: i64 = 0;
    for i in 0..n {
        total = total.wrapping_add(i64::from(get(vm, i)?));
    }
    Ok(total)
}

/// Sorts elements `[0, n)` ascending.
///
/// Pushes the larger half first so the smaller half is processed next,
/// bounding the stack at O(log n) ranges.
fn quicksort<H: FaultHandler>(vm: &mut VirtualMemory<H>, n: u64) -> Result<()> {
    let mut stack = vec![(0u64, n)];
    while let Some((lo, hi)) = stack.pop() {
        if hi - lo < 2 {
            continue;
        }
        let p = partition(vm, lo, hi)?;
        let left = (lo, p);
        let right = (p + 1, hi);
        if p - lo > hi - (p + 1) {
            stack.push(left);
            stack.push(right);
        } else {
            stack.push(right);
            stack.push(left);
        }
    }
    Ok(())
}

/// Lomuto partition of `[lo, hi)` around the middle element.
fn partition<H: FaultHandler>(vm: &mut VirtualMemory<H>, lo: u64, hi: u64) -> Result<u64> {
    let last = hi - 1;
    swap(vm, lo + (hi - lo) / 2, last)?;
    let pivot = get(vm, last)?;
    let mut store = lo;
    for i in lo..last {
        if get(vm, i)? < pivot {
            swap(vm, i, store)?;
            store += 1;
        }
    }
    swap(vm, store, last)?;
    Ok(store)
}

fn get<H: FaultHandler>(vm: &mut VirtualMemory<H>, i: u64) -> Result<i32> {
    Ok(vm.read_u32(i * 4)? as i32)
}

fn set<H: FaultHandler>(vm: &mut VirtualMemory<H>, i: u64, val: i32) -> Result<()> {
    vm.write_u32(i * 4, val as u32)
}

fn swap<H: FaultHandler>(vm: &mut VirtualMemory<H>, i: u64, j: u64) -> Result<()> {
    if i == j {
        return Ok(());
    }
    let a = get(vm, i)?;
    let b = get(vm, j)?;
    set(vm, i, b)?;
    set(vm, j, a)
}
