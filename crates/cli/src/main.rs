//! Demand-paging simulator CLI.
//!
//! Runs one workload against a paged virtual region and prints the summary
//! line `nframes,page_faults,disk_reads,disk_writes` on stdout. Diagnostics
//! go to stderr; set `RUST_LOG=debug` (or `trace`) to follow every fault.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use virtmem_core::common::constants::DEFAULT_DISK_PATH;
use virtmem_core::config::DiskConfig;
use virtmem_core::{Config, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "virtmem",
    author,
    version,
    about = "Demand-paging simulator comparing page-replacement policies",
    long_about = "Runs a synthetic workload over <npages> virtual pages backed by <nframes> physical frames.\n\nExamples:\n  virtmem 100 10 fifo scan\n  virtmem 100 25 custom focus --memory-disk\n  virtmem 50 7 rand sort --seed 42 --json"
)]
struct Cli {
    /// Number of virtual pages.
    #[arg(allow_negative_numbers = true)]
    npages: i64,

    /// Number of physical frames.
    #[arg(allow_negative_numbers = true)]
    nframes: i64,

    /// Replacement policy: rand, fifo or custom.
    policy: String,

    /// Workload: sort, scan or focus.
    program: String,

    /// Seed for the random replacement policy.
    #[arg(long)]
    seed: Option<u64>,

    /// Backing store file (created or truncated).
    #[arg(long, default_value = DEFAULT_DISK_PATH)]
    disk: PathBuf,

    /// Keep the backing store in memory instead of a file.
    #[arg(long, conflicts_with = "disk")]
    memory_disk: bool,

    /// Print the full report as JSON instead of the summary line.
    #[arg(long)]
    json: bool,
}

/// One-line usage shown for any malformed command line.
const USAGE: &str = "use: virtmem <npages> <nframes> <rand|fifo|custom> <sort|scan|focus>";

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match usage_error(&e) {
            Some(line) => {
                eprintln!("{line}");
                return ExitCode::FAILURE;
            }
            None => e.exit(),
        },
    };
    init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Maps a parse failure to the one-line usage message.
///
/// Returns `None` for help and version requests, which clap renders itself.
fn usage_error(err: &clap::Error) -> Option<&'static str> {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        _ => Some(USAGE),
    }
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, defaulting to `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Validates the arguments, runs the simulation and prints the report.
fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = Config::from_args(cli.npages, cli.nframes, &cli.policy, &cli.program)?;
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let disk = if cli.memory_disk {
        DiskConfig::Memory
    } else {
        DiskConfig::File(cli.disk)
    };
    let config = config.with_disk(disk);
    debug!(?config, "parsed arguments");

    let report = Simulator::new(config).run()?;
    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }
    Ok(())
}
