//! Simulation driver.
//!
//! Wires a validated [`Config`](crate::config::Config) into a backing store,
//! page table and pager, runs the selected workload and reports the counters.

/// Run controller.
pub mod simulator;

pub use simulator::Simulator;
