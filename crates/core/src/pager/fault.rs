//! Page fault handler.
//!
//! The handler keeps no per-page state of its own. Each fault is classified
//! from the page's current permission bits into a [`PageState`], and the
//! transition is chosen from that:
//!
//! | State         | Action                                                   |
//! |---------------|----------------------------------------------------------|
//! | `NotResident` | load into a free frame, or evict through the policy      |
//! | `ReadOnly`    | mark the frame dirty, grant read+write                   |
//! | `Writable`    | nothing (spurious fault)                                 |
//! | `ExecOnly`    | nothing                                                  |
//!
//! The fault counter is bumped before classification, so every invocation
//! counts, including the no-op ones.

use tracing::{debug, trace};

use super::Pager;
use crate::common::{FrameIndex, PageId, Result};
use crate::disk::BlockDevice;
use crate::mmu::{FaultHandler, PageTable, Protection};

/// Residency state of a faulting page, derived from its permission bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// No permission: the page is not in any frame.
    NotResident,
    /// Resident and readable; the faulting access needed write.
    ReadOnly {
        /// Frame holding the page.
        frame: FrameIndex,
    },
    /// Resident and writable.
    Writable,
    /// Execute permission only.
    ExecOnly,
}

impl PageState {
    /// Classifies a page-table entry. Write wins over read, read over execute.
    pub const fn classify(frame: FrameIndex, prot: Protection) -> Self {
        if prot.can_write() {
            Self::Writable
        } else if prot.can_read() {
            Self::ReadOnly { frame }
        } else if prot.can_exec() {
            Self::ExecOnly
        } else {
            Self::NotResident
        }
    }
}

impl<D: BlockDevice> FaultHandler for Pager<D> {
    fn handle_fault(&mut self, page_table: &mut PageTable, page: PageId) -> Result<()> {
        self.page_faults += 1;
        let (frame, prot) = page_table.entry(page)?;
        let state = PageState::classify(frame, prot);
        trace!(page, ?state, fault = self.page_faults, "page fault");

        match state {
            PageState::Writable | PageState::ExecOnly => Ok(()),
            PageState::ReadOnly { frame } => {
                self.frames.mark_dirty(frame);
                page_table.set_entry(page, frame, Protection::READ_WRITE)
            }
            PageState::NotResident => match self.frames.allocate_free() {
                Some(frame) => {
                    debug!(page, frame, "loading into free frame");
                    self.install(page_table, page, frame)
                }
                None => self.evict(page_table, page),
            },
        }
    }
}
