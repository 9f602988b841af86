//! Frame Directory Unit Tests.
//!
//! Verifies free-frame allocation order, residency updates, and the
//! oldest / oldest-clean scans with their tie-breaks.

use pretty_assertions::assert_eq;
use virtmem_core::pager::{Frame, FrameDirectory};

// ══════════════════════════════════════════════════════════
// 1. Allocation
// ══════════════════════════════════════════════════════════

#[test]
fn new_directory_is_all_free() {
    let dir = FrameDirectory::new(4);
    assert_eq!(dir.len(), 4);
    assert!(dir.iter().all(|(_, f)| f.is_free()));
    assert_eq!(dir.allocate_free(), Some(0));
}

#[test]
fn allocate_free_returns_lowest_free_index() {
    let mut dir = FrameDirectory::new(3);
    dir.mark_resident(0, 10, 1);
    assert_eq!(dir.allocate_free(), Some(1));
    dir.mark_resident(2, 12, 2);
    assert_eq!(dir.allocate_free(), Some(1));
    dir.mark_resident(1, 11, 3);
    assert_eq!(dir.allocate_free(), None);
}

// ══════════════════════════════════════════════════════════
// 2. Residency and dirty bit
// ══════════════════════════════════════════════════════════

#[test]
fn mark_resident_sets_page_and_sequence_and_clears_dirty() {
    let mut dir = FrameDirectory::new(2);
    dir.mark_resident(1, 7, 3);
    dir.mark_dirty(1);
    assert!(dir.get(1).dirty);

    dir.mark_resident(1, 9, 8);
    assert_eq!(
        *dir.get(1),
        Frame {
            resident_page: Some(9),
            dirty: false,
            sequence: 8,
        }
    );
}

#[test]
fn mark_dirty_and_clean_leave_residency_alone() {
    let mut dir = FrameDirectory::new(1);
    dir.mark_resident(0, 4, 5);
    dir.mark_dirty(0);
    assert_eq!(dir.get(0).resident_page, Some(4));
    assert_eq!(dir.get(0).sequence, 5);
    dir.mark_clean(0);
    assert!(!dir.get(0).dirty);
    assert_eq!(dir.get(0).sequence, 5);
}

// ══════════════════════════════════════════════════════════
// 3. Oldest scans
// ══════════════════════════════════════════════════════════

#[test]
fn oldest_picks_smallest_sequence() {
    let mut dir = FrameDirectory::new(3);
    dir.mark_resident(0, 0, 5);
    dir.mark_resident(1, 1, 2);
    dir.mark_resident(2, 2, 9);
    assert_eq!(dir.oldest(), 1);
}

#[test]
fn oldest_breaks_ties_by_lowest_index() {
    let mut dir = FrameDirectory::new(3);
    dir.mark_resident(0, 0, 5);
    dir.mark_resident(1, 1, 3);
    dir.mark_resident(2, 2, 3);
    assert_eq!(dir.oldest(), 1);
}

#[test]
fn oldest_ignores_dirtiness() {
    let mut dir = FrameDirectory::new(2);
    dir.mark_resident(0, 0, 1);
    dir.mark_resident(1, 1, 2);
    dir.mark_dirty(0);
    assert_eq!(dir.oldest(), 0);
}

#[test]
fn oldest_clean_skips_dirty_frames() {
    let mut dir = FrameDirectory::new(3);
    dir.mark_resident(0, 0, 1);
    dir.mark_resident(1, 1, 2);
    dir.mark_resident(2, 2, 3);
    dir.mark_dirty(0);
    assert_eq!(dir.oldest_clean(), Some(1));
    dir.mark_dirty(1);
    assert_eq!(dir.oldest_clean(), Some(2));
    dir.mark_dirty(2);
    assert_eq!(dir.oldest_clean(), None);
}

#[test]
fn oldest_clean_ignores_free_frames() {
    let mut dir = FrameDirectory::new(3);
    dir.mark_resident(1, 6, 4);
    assert_eq!(dir.oldest_clean(), Some(1));
}

#[test]
fn oldest_clean_breaks_ties_by_lowest_index() {
    let mut dir = FrameDirectory::new(4);
    for frame in 0..4 {
        dir.mark_resident(frame, frame, 2);
    }
    dir.mark_dirty(0);
    assert_eq!(dir.oldest_clean(), Some(1));
}
