//! Run controller.
//!
//! One `Simulator` performs one run: open the backing store, build the page
//! table and pager, run the workload to completion, collect the counters.
//! Any error aborts the run; nothing is retried.

use tracing::info;

use crate::common::Result;
use crate::config::{Config, DiskConfig};
use crate::disk::{BlockDevice, FileDisk, MemDisk};
use crate::mmu::VirtualMemory;
use crate::pager::Pager;
use crate::stats::RunReport;
use crate::workload;

/// Drives a single simulation run.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: Config,
}

impl Simulator {
    /// Creates a simulator for `config`.
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// The run's configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Opens the configured backing store and runs the workload on it.
    ///
    /// # Errors
    ///
    /// Returns `SimError::DiskOpen` if the disk file cannot be created, or
    /// any I/O error raised while paging.
    pub fn run(&self) -> Result<RunReport> {
        match &self.config.disk {
            DiskConfig::File(path) => self.run_with(FileDisk::open(path, self.config.npages)?),
            DiskConfig::Memory => self.run_with(MemDisk::new(self.config.npages)),
        }
    }

    /// Runs the workload paging against `device`.
    ///
    /// # Errors
    ///
    /// Returns the first I/O or addressing error raised while paging.
    pub fn run_with<D: BlockDevice>(&self, device: D) -> Result<RunReport> {
        let Config {
            npages,
            nframes,
            policy,
            program,
            seed,
            ..
        } = self.config;
        info!(npages, nframes, %policy, %program, seed, "starting simulation");

        let pager = Pager::new(nframes, device, policy, seed);
        let mut vm = VirtualMemory::new(npages, nframes, pager);
        let result = workload::run(program, &mut vm)?;

        let stats = vm.handler().stats();
        info!(
            page_faults = stats.page_faults,
            disk_reads = stats.disk_reads,
            disk_writes = stats.disk_writes,
            "simulation complete"
        );
        Ok(RunReport::new(&self.config, stats, result))
    }
}
