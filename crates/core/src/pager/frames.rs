//! Frame directory.
//!
//! Per-frame bookkeeping: which page lives in each frame, whether it has been
//! written since it was loaded or flushed, and when it was loaded. Load time is
//! measured in page faults; only one page is loaded per fault, so the smallest
//! `sequence` among occupied frames identifies the first one in.
//!
//! The directory holds no policy. It never evicts on its own: a caller
//! reassigning a frame reads its previous occupant first.

use crate::common::{FrameIndex, PageId};

/// Metadata for one physical frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frame {
    /// Page occupying the frame, `None` if free.
    pub resident_page: Option<PageId>,
    /// Written since last load or flush.
    pub dirty: bool,
    /// Fault count at the time the frame was last loaded.
    pub sequence: u64,
}

impl Frame {
    /// Returns true if no page occupies the frame.
    pub const fn is_free(&self) -> bool {
        self.resident_page.is_none()
    }
}

/// Fixed-size table of frame metadata, indexed `0..nframes`.
#[derive(Debug, Clone)]
pub struct FrameDirectory {
    frames: Vec<Frame>,
}

impl FrameDirectory {
    /// Creates a directory of `nframes` free frames.
    pub fn new(nframes: usize) -> Self {
        Self {
            frames: vec![Frame::default(); nframes],
        }
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if the directory has no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Metadata of `frame`.
    ///
    /// # Panics
    ///
    /// Panics if `frame` is out of range.
    pub fn get(&self, frame: FrameIndex) -> &Frame {
        &self.frames[frame]
    }

    /// Iterates over `(index, frame)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (FrameIndex, &Frame)> {
        self.frames.iter().enumerate()
    }

    /// Lowest-indexed free frame, if any.
    pub fn allocate_free(&self) -> Option<FrameIndex> {
        self.frames.iter().position(Frame::is_free)
    }

    /// Records `page` as loaded into `frame` at fault count `sequence`.
    ///
    /// The dirty bit is cleared: a freshly loaded page matches its block.
    pub fn mark_resident(&mut self, frame: FrameIndex, page: PageId, sequence: u64) {
        self.frames[frame] = Frame {
            resident_page: Some(page),
            dirty: false,
            sequence,
        };
    }

    /// Sets the dirty bit of `frame`.
    pub fn mark_dirty(&mut self, frame: FrameIndex) {
        self.frames[frame].dirty = true;
    }

    /// Clears the dirty bit of `frame`.
    pub fn mark_clean(&mut self, frame: FrameIndex) {
        self.frames[frame].dirty = false;
    }

    /// Frame loaded longest ago.
    ///
    /// Smallest `sequence` wins; ties go to the lowest index. With an empty
    /// directory this returns 0, which callers never reach since a run has at
    /// least one frame.
    pub fn oldest(&self) -> FrameIndex {
        self.oldest_where(|_| true).unwrap_or(0)
    }

    /// Clean frame loaded longest ago, if any frame is clean.
    ///
    /// Free frames are not candidates.
    pub fn oldest_clean(&self) -> Option<FrameIndex> {
        self.oldest_where(|f| !f.is_free() && !f.dirty)
    }

    fn oldest_where(&self, pred: impl Fn(&Frame) -> bool) -> Option<FrameIndex> {
        let mut best: Option<(FrameIndex, u64)> = None;
        for (i, f) in self.iter() {
            if !pred(f) {
                continue;
            }
            // Strict comparison keeps the lowest index on ties.
            if best.is_none_or(|(_, seq)| f.sequence < seq) {
                best = Some((i, f.sequence));
            }
        }
        best.map(|(i, _)| i)
    }
}
