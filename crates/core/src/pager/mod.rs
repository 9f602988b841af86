//! Demand pager.
//!
//! This module resolves page faults against a fixed pool of physical frames. It provides:
//! 1. **Frame Directory:** Residency, dirty bit and load order of each frame.
//! 2. **Backing Store Adapter:** Counted block transfers to and from the swap device.
//! 3. **Policies:** Random, FIFO and clean-preferring FIFO victim selection.
//! 4. **Fault Handler:** The per-fault state machine, implemented as [`FaultHandler`](crate::mmu::FaultHandler).
//!
//! All mutable paging state lives in one [`Pager`]. The page table is passed
//! in by the faulting access, and the pager keeps it and the frame directory in
//! lock-step: a frame is occupied exactly when its page has a nonzero mapping
//! to it.

/// Shared eviction sequence and batch flush.
mod evict;

/// Page fault classification and dispatch.
pub mod fault;

/// Per-frame metadata table.
pub mod frames;

/// Victim selection algorithms.
pub mod policies;

/// Counting wrapper around the block device.
pub mod store;

pub use fault::PageState;
pub use frames::{Frame, FrameDirectory};
pub use policies::{EvictionPolicy, Victim};
pub use store::BackingStore;

use crate::config::ReplacementPolicy;
use crate::disk::BlockDevice;
use crate::mmu::PageTable;
use crate::stats::PagerStats;

/// Paging context for one simulation: frames, backing store, policy, counters.
#[derive(Debug)]
pub struct Pager<D> {
    frames: FrameDirectory,
    store: BackingStore<D>,
    policy: Box<dyn EvictionPolicy>,
    kind: ReplacementPolicy,
    page_faults: u64,
}

impl<D: BlockDevice> Pager<D> {
    /// Creates a pager over `nframes` free frames.
    ///
    /// # Arguments
    ///
    /// * `nframes` - Number of physical frames; must match the page table.
    /// * `device` - Backing store holding every page's block.
    /// * `kind` - Replacement policy, fixed for the pager's lifetime.
    /// * `seed` - Seed for the random policy.
    pub fn new(nframes: usize, device: D, kind: ReplacementPolicy, seed: u64) -> Self {
        Self {
            frames: FrameDirectory::new(nframes),
            store: BackingStore::new(device),
            policy: policies::build(kind, seed),
            kind,
            page_faults: 0,
        }
    }

    /// Configured replacement policy.
    pub const fn policy(&self) -> ReplacementPolicy {
        self.kind
    }

    /// Counters accumulated so far.
    pub const fn stats(&self) -> PagerStats {
        PagerStats {
            page_faults: self.page_faults,
            disk_reads: self.store.reads(),
            disk_writes: self.store.writes(),
        }
    }

    /// Borrows the frame directory.
    pub const fn frames(&self) -> &FrameDirectory {
        &self.frames
    }

    /// Borrows the backing store.
    pub const fn store(&self) -> &BackingStore<D> {
        &self.store
    }

    /// Unwraps the block device.
    pub fn into_device(self) -> D {
        self.store.into_device()
    }

    /// Checks that the frame directory and `page_table` agree.
    ///
    /// Every occupied frame must be the target of a nonzero mapping for its
    /// page, and every nonzero mapping must point at a frame holding that page.
    /// A dirty frame must be writable; a clean one must not be.
    pub fn is_consistent_with(&self, page_table: &PageTable) -> bool {
        if page_table.nframes() != self.frames.len() {
            return false;
        }
        let frames_ok = self.frames.iter().all(|(frame, f)| match f.resident_page {
            None => true,
            Some(page) => page_table.entry(page).is_ok_and(|(mapped, prot)| {
                mapped == frame && prot.can_read() && prot.can_write() == f.dirty
            }),
        });
        let mappings_ok = page_table
            .mapped()
            .all(|(page, frame, _)| self.frames.get(frame).resident_page == Some(page));
        frames_ok && mappings_ok
    }
}
