//! Synthetic workloads.
//!
//! Programs that exercise the virtual region through [`VirtualMemory`]
//! loads and stores. They know nothing about frames or policies; their only
//! effect on the pager is the faults their access pattern raises. Each returns
//! a checksum of the region so runs can be compared for correctness.
//!
//! # Programs
//!
//! - `scan`: sequential fill, then ten sequential read passes.
//! - `sort`: random integers sorted in place (quicksort).
//! - `focus`: short bursts of writes confined to small random windows.
//! - `trace`: replay of an explicit access list.

/// Locality-focused random writes.
pub mod focus;

/// Sequential scan.
pub mod scan;

/// In-place integer sort.
pub mod sort;

/// Explicit access trace replay.
pub mod trace;

pub use trace::Access;

use tracing::info;

use crate::common::Result;
use crate::config::Program;
use crate::mmu::{FaultHandler, VirtualMemory};

/// Runs `program` over the whole of `vm` and returns its checksum.
///
/// # Errors
///
/// Propagates any fatal error raised while servicing a fault.
pub fn run<H: FaultHandler>(program: Program, vm: &mut VirtualMemory<H>) -> Result<i64> {
    let result = match program {
        Program::Sort => sort::run(vm)?,
        Program::Scan => scan::run(vm)?,
        Program::Focus => focus::run(vm)?,
    };
    info!("{program} result is {result}");
    Ok(result)
}
