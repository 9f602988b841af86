//! Eviction and write-back.
//!
//! The sequence shared by every policy once a victim frame is chosen, plus the
//! batch flush used by the clean-preferring policy.

use tracing::debug;

use super::Pager;
use super::policies::Victim;
use crate::common::{FrameIndex, PageId, Result};
use crate::disk::BlockDevice;
use crate::mmu::{PageTable, Protection};

impl<D: BlockDevice> Pager<D> {
    /// Makes room for `page` by evicting the frame the policy picks.
    pub(super) fn evict(&mut self, page_table: &mut PageTable, page: PageId) -> Result<()> {
        let frame = match self.policy.get_victim(&self.frames) {
            Victim::Frame(frame) => frame,
            Victim::FlushAllThenOldest => {
                self.flush_all(page_table)?;
                self.frames.oldest()
            }
        };
        self.replace(page_table, frame, page)
    }

    /// Swaps `page` into `frame`, writing the previous occupant back if dirty.
    fn replace(&mut self, page_table: &mut PageTable, frame: FrameIndex, page: PageId) -> Result<()> {
        let victim = *self.frames.get(frame);
        if let Some(old_page) = victim.resident_page {
            if victim.dirty {
                self.store.write(old_page, page_table.frame(frame)?)?;
            }
            debug!(page, frame, old_page, dirty = victim.dirty, "evicting");
            self.store.read(page, page_table.frame_mut(frame)?)?;
            page_table.set_entry(old_page, frame, Protection::NONE)?;
            page_table.set_entry(page, frame, Protection::READ)?;
            self.frames.mark_resident(frame, page, self.page_faults);
            Ok(())
        } else {
            self.install(page_table, page, frame)
        }
    }

    /// Loads `page` into the unoccupied `frame` read-only.
    pub(super) fn install(
        &mut self,
        page_table: &mut PageTable,
        page: PageId,
        frame: FrameIndex,
    ) -> Result<()> {
        self.store.read(page, page_table.frame_mut(frame)?)?;
        page_table.set_entry(page, frame, Protection::READ)?;
        self.frames.mark_resident(frame, page, self.page_faults);
        Ok(())
    }

    /// Writes every resident frame back and downgrades it to clean, read-only.
    fn flush_all(&mut self, page_table: &mut PageTable) -> Result<()> {
        debug!(nframes = self.frames.len(), "flushing all frames");
        for frame in 0..self.frames.len() {
            let Some(page) = self.frames.get(frame).resident_page else {
                continue;
            };
            self.store.write(page, page_table.frame(frame)?)?;
            self.frames.mark_clean(frame);
            page_table.set_entry(page, frame, Protection::READ)?;
        }
        Ok(())
    }
}
