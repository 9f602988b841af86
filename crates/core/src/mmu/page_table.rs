//! Single-level page table.
//!
//! Every virtual page has one entry holding a frame index and a permission
//! mask. A mask of [`Protection::NONE`] means the page is not resident and the
//! frame field is meaningless. The table also owns physical memory, addressed
//! frame by frame.

use std::fmt;
use std::ops::BitOr;

use crate::common::constants::PAGE_SIZE;
use crate::common::{FrameIndex, PageId, Result, SimError};

/// Page permission mask.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Protection(u8);

impl Protection {
    /// No access; the page is not resident.
    pub const NONE: Self = Self(0);
    /// Read permission.
    pub const READ: Self = Self(1);
    /// Write permission.
    pub const WRITE: Self = Self(1 << 1);
    /// Execute permission.
    pub const EXEC: Self = Self(1 << 2);
    /// Read and write permission.
    pub const READ_WRITE: Self = Self(Self::READ.0 | Self::WRITE.0);

    /// Builds a mask from raw bits, discarding bits outside `R|W|X`.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b111)
    }

    /// Returns the raw bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if every bit of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if no permission bit is set.
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the Read (R) bit is set.
    pub const fn can_read(self) -> bool {
        self.contains(Self::READ)
    }

    /// Returns true if the Write (W) bit is set.
    pub const fn can_write(self) -> bool {
        self.contains(Self::WRITE)
    }

    /// Returns true if the Execute (X) bit is set.
    pub const fn can_exec(self) -> bool {
        self.contains(Self::EXEC)
    }
}

impl BitOr for Protection {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Debug for Protection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            flag(self.can_read(), 'r'),
            flag(self.can_write(), 'w'),
            flag(self.can_exec(), 'x')
        )
    }
}

/// A single page-table entry.
#[derive(Clone, Copy, Debug, Default)]
struct PageTableEntry {
    frame: FrameIndex,
    prot: Protection,
}

/// Page table plus the physical memory it maps into.
pub struct PageTable {
    entries: Vec<PageTableEntry>,
    physmem: Vec<u8>,
    nframes: usize,
}

impl PageTable {
    /// Creates a table of `npages` unmapped entries over `nframes` zeroed frames.
    pub fn new(npages: usize, nframes: usize) -> Self {
        Self {
            entries: vec![PageTableEntry::default(); npages],
            physmem: vec![0; nframes * PAGE_SIZE],
            nframes,
        }
    }

    /// Number of virtual pages.
    pub fn npages(&self) -> usize {
        self.entries.len()
    }

    /// Number of physical frames.
    pub const fn nframes(&self) -> usize {
        self.nframes
    }

    /// Returns the frame and permission mask currently recorded for `page`.
    ///
    /// # Errors
    ///
    /// Returns `PageOutOfRange` if `page` is not in the table.
    pub fn entry(&self, page: PageId) -> Result<(FrameIndex, Protection)> {
        let e = self.entries.get(page).ok_or(SimError::PageOutOfRange {
            page,
            npages: self.entries.len(),
        })?;
        Ok((e.frame, e.prot))
    }

    /// Maps `page` to `frame` with permission `prot`.
    ///
    /// Passing [`Protection::NONE`] revokes residency.
    ///
    /// # Errors
    ///
    /// Returns `PageOutOfRange` or `FrameOutOfRange` for indices outside the table.
    pub fn set_entry(&mut self, page: PageId, frame: FrameIndex, prot: Protection) -> Result<()> {
        self.check_frame(frame)?;
        let npages = self.entries.len();
        let e = self
            .entries
            .get_mut(page)
            .ok_or(SimError::PageOutOfRange { page, npages })?;
        e.frame = frame;
        e.prot = prot;
        Ok(())
    }

    /// Iterates over `(page, frame, prot)` for every page with a nonzero mask.
    pub fn mapped(&self) -> impl Iterator<Item = (PageId, FrameIndex, Protection)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.prot.is_none())
            .map(|(page, e)| (page, e.frame, e.prot))
    }

    /// Whole physical memory.
    pub fn physmem(&self) -> &[u8] {
        &self.physmem
    }

    /// Whole physical memory, mutably.
    pub fn physmem_mut(&mut self) -> &mut [u8] {
        &mut self.physmem
    }

    /// Bytes of one frame.
    ///
    /// # Errors
    ///
    /// Returns `FrameOutOfRange` if `frame >= nframes`.
    pub fn frame(&self, frame: FrameIndex) -> Result<&[u8]> {
        self.check_frame(frame)?;
        let base = frame * PAGE_SIZE;
        Ok(&self.physmem[base..base + PAGE_SIZE])
    }

    /// Bytes of one frame, mutably.
    ///
    /// # Errors
    ///
    /// Returns `FrameOutOfRange` if `frame >= nframes`.
    pub fn frame_mut(&mut self, frame: FrameIndex) -> Result<&mut [u8]> {
        self.check_frame(frame)?;
        let base = frame * PAGE_SIZE;
        Ok(&mut self.physmem[base..base + PAGE_SIZE])
    }

    fn check_frame(&self, frame: FrameIndex) -> Result<()> {
        if frame < self.nframes {
            Ok(())
        } else {
            Err(SimError::FrameOutOfRange {
                frame,
                nframes: self.nframes,
            })
        }
    }
}

impl fmt::Debug for PageTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageTable")
            .field("npages", &self.entries.len())
            .field("nframes", &self.nframes)
            .field("mapped", &self.mapped().count())
            .finish()
    }
}
