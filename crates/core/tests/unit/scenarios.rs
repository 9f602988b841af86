//! Hand-Traced Paging Scenarios.
//!
//! Short access traces whose counters and final frame contents were worked
//! out by hand. They pin down victim order, write-back and the batch flush.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::harness::{reads, resident_pages, run_trace, stats};
use virtmem_core::config::ReplacementPolicy;
use virtmem_core::workload::{Access, trace};

use crate::common::harness::vm;

/// R0, W0, R1, R2, R0, R1, R3.
fn dirty_head_trace() -> Vec<Access> {
    vec![
        Access::read_page(0),
        Access::write_page(0, 0xAB),
        Access::read_page(1),
        Access::read_page(2),
        Access::read_page(0),
        Access::read_page(1),
        Access::read_page(3),
    ]
}

/// W0, then R1 and R2 alternating.
fn alternating_trace() -> Vec<Access> {
    let mut accesses = vec![Access::write_page(0, 1)];
    for _ in 0..3 {
        accesses.push(Access::read_page(1));
        accesses.push(Access::read_page(2));
    }
    accesses
}

/// W0, W1, W2, W0.
fn all_dirty_trace() -> Vec<Access> {
    vec![
        Access::write_page(0, 1),
        Access::write_page(1, 2),
        Access::write_page(2, 3),
        Access::write_page(0, 4),
    ]
}

#[test]
fn fifo_read_only_evicts_in_load_order() {
    let (s, vm) = run_trace(4, 2, ReplacementPolicy::Fifo, &reads(&[0, 1, 2, 0, 1, 3]));
    assert_eq!(s, stats(6, 6, 0));
    assert_eq!(resident_pages(&vm), vec![Some(1), Some(3)]);
    assert!(vm.handler().is_consistent_with(vm.page_table()));
}

#[test]
fn fifo_writes_back_dirty_victim_and_reloads_it() {
    let mut vm = vm(4, 2, ReplacementPolicy::Fifo);
    let sum = trace::replay(&mut vm, &dirty_head_trace()).unwrap();
    assert_eq!(vm.handler().stats(), stats(7, 6, 1));
    // Only the second R0 sees the stored byte, after a round trip to disk.
    assert_eq!(sum, 0xAB);
    assert_eq!(resident_pages(&vm), vec![Some(1), Some(3)]);
}

#[test]
fn custom_keeps_dirty_page_resident() {
    let mut vm = vm(4, 2, ReplacementPolicy::Custom);
    let sum = trace::replay(&mut vm, &dirty_head_trace()).unwrap();
    assert_eq!(vm.handler().stats(), stats(6, 5, 0));
    assert_eq!(sum, 0xAB);
    assert_eq!(resident_pages(&vm), vec![Some(0), Some(3)]);
    assert!(vm.handler().frames().get(0).dirty);
}

#[rstest]
#[case(ReplacementPolicy::Fifo, stats(4, 3, 1))]
#[case(ReplacementPolicy::Custom, stats(8, 7, 0))]
fn alternating_reads_behind_one_dirty_page(
    #[case] policy: ReplacementPolicy,
    #[case] expected: virtmem_core::PagerStats,
) {
    let (s, vm) = run_trace(3, 2, policy, &alternating_trace());
    assert_eq!(s, expected);
    assert!(vm.handler().is_consistent_with(vm.page_table()));
}

#[test]
fn custom_flushes_everything_when_all_frames_dirty() {
    let (s, vm) = run_trace(3, 2, ReplacementPolicy::Custom, &all_dirty_trace());
    assert_eq!(s, stats(8, 4, 2));
    assert_eq!(resident_pages(&vm), vec![Some(2), Some(0)]);

    // Page 1 was clean after the flush and was dropped without a second write.
    let disk = vm.into_parts().1.into_device();
    assert_eq!(disk.block(0)[0], 1);
    assert_eq!(disk.block(1)[0], 2);
    assert_eq!(disk.block(2)[0], 0);
}

#[test]
fn fifo_writes_back_each_dirty_victim() {
    let (s, vm) = run_trace(3, 2, ReplacementPolicy::Fifo, &all_dirty_trace());
    assert_eq!(s, stats(8, 4, 2));
    assert_eq!(resident_pages(&vm), vec![Some(2), Some(0)]);

    let disk = vm.into_parts().1.into_device();
    assert_eq!(disk.block(0)[0], 1);
    assert_eq!(disk.block(1)[0], 2);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
fn fifo_cycle_one_larger_than_memory_always_faults(#[case] nframes: usize) {
    let cycle: Vec<usize> = (0..=nframes).collect();
    let pages: Vec<usize> = cycle.iter().copied().cycle().take(3 * cycle.len()).collect();
    let (s, _) = run_trace(nframes + 1, nframes, ReplacementPolicy::Fifo, &reads(&pages));
    let n = pages.len() as u64;
    assert_eq!(s, stats(n, n, 0));
}

#[rstest]
fn no_eviction_when_memory_holds_every_page(
    #[values(ReplacementPolicy::Random, ReplacementPolicy::Fifo, ReplacementPolicy::Custom)]
    policy: ReplacementPolicy,
    #[values(4, 6)] nframes: usize,
) {
    let (s, vm) = run_trace(4, nframes, policy, &reads(&[0, 1, 2, 3, 3, 2, 1, 0, 2]));
    assert_eq!(s, stats(4, 4, 0));
    assert!(vm.handler().is_consistent_with(vm.page_table()));
}

#[test]
fn single_frame_round_trips_every_write() {
    let accesses = vec![
        Access::write_page(0, 5),
        Access::write_page(1, 6),
        Access::read_page(0),
        Access::read_page(1),
    ];
    let mut vm = vm(2, 1, ReplacementPolicy::Random);
    let sum = trace::replay(&mut vm, &accesses).unwrap();
    assert_eq!(sum, 11);
    // W0: load+upgrade, W1: evict(write)+load+upgrade, R0: evict(write)+load, R1: evict+load.
    assert_eq!(vm.handler().stats(), stats(6, 4, 2));
}

#[rstest]
#[case(4, dirty_head_trace())]
#[case(3, alternating_trace())]
#[case(3, all_dirty_trace())]
fn custom_writes_no_more_than_fifo_on_hand_traced_runs(
    #[case] npages: usize,
    #[case] accesses: Vec<Access>,
) {
    let (fifo, _) = run_trace(npages, 2, ReplacementPolicy::Fifo, &accesses);
    let (custom, _) = run_trace(npages, 2, ReplacementPolicy::Custom, &accesses);
    assert!(custom.disk_writes <= fifo.disk_writes);
}
