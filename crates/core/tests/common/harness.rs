use virtmem_core::PagerStats;
use virtmem_core::common::PageId;
use virtmem_core::common::constants::DEFAULT_SEED;
use virtmem_core::config::ReplacementPolicy;
use virtmem_core::disk::MemDisk;
use virtmem_core::mmu::VirtualMemory;
use virtmem_core::pager::Pager;
use virtmem_core::workload::Access;
use virtmem_core::workload::trace;

/// An address space paged against an in-memory disk.
pub type TestVm = VirtualMemory<Pager<MemDisk>>;

/// Installs a test-writer subscriber at trace level (once per process).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("virtmem_core=trace")
        .try_init();
}

/// Builds an address space with the default seed.
pub fn vm(npages: usize, nframes: usize, policy: ReplacementPolicy) -> TestVm {
    vm_with_seed(npages, nframes, policy, DEFAULT_SEED)
}

/// Builds an address space with an explicit random-policy seed.
pub fn vm_with_seed(
    npages: usize,
    nframes: usize,
    policy: ReplacementPolicy,
    seed: u64,
) -> TestVm {
    let pager = Pager::new(nframes, MemDisk::new(npages), policy, seed);
    VirtualMemory::new(npages, nframes, pager)
}

/// Replays `accesses` on a fresh address space, returning the counters and the address space.
pub fn run_trace(
    npages: usize,
    nframes: usize,
    policy: ReplacementPolicy,
    accesses: &[Access],
) -> (PagerStats, TestVm) {
    let mut vm = vm(npages, nframes, policy);
    let _ = trace::replay(&mut vm, accesses).expect("trace replay");
    (vm.handler().stats(), vm)
}

/// Reads of the first byte of each page in `pages`.
pub fn reads(pages: &[PageId]) -> Vec<Access> {
    pages.iter().map(|&p| Access::read_page(p)).collect()
}

/// Shorthand for a counter triple.
pub const fn stats(page_faults: u64, disk_reads: u64, disk_writes: u64) -> PagerStats {
    PagerStats {
        page_faults,
        disk_reads,
        disk_writes,
    }
}

/// Resident page of every frame, in frame order.
pub fn resident_pages(vm: &TestVm) -> Vec<Option<PageId>> {
    vm.handler()
        .frames()
        .iter()
        .map(|(_, f)| f.resident_page)
        .collect()
}
