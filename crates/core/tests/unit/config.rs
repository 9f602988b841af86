//! # Configuration Tests
//!
//! Validation of raw command-line values, name parsing, and builder defaults.

use rstest::rstest;
use virtmem_core::common::ConfigError;
use virtmem_core::common::constants::{DEFAULT_DISK_PATH, DEFAULT_SEED};
use virtmem_core::config::*;

#[test]
fn from_args_accepts_valid_values() {
    let config = Config::from_args(100, 10, "fifo", "scan").unwrap();
    assert_eq!(config.npages, 100);
    assert_eq!(config.nframes, 10);
    assert_eq!(config.policy, ReplacementPolicy::Fifo);
    assert_eq!(config.program, Program::Scan);
    assert_eq!(config.seed, DEFAULT_SEED);
    assert_eq!(config.disk, DiskConfig::File(DEFAULT_DISK_PATH.into()));
}

#[rstest]
#[case(0, 10, "fifo", "scan", ConfigError::InvalidPageCount(0))]
#[case(-3, 10, "fifo", "scan", ConfigError::InvalidPageCount(-3))]
#[case(10, 0, "fifo", "scan", ConfigError::InvalidFrameCount(0))]
#[case(10, -1, "fifo", "scan", ConfigError::InvalidFrameCount(-1))]
#[case(10, 3, "lru", "scan", ConfigError::UnknownPolicy("lru".into()))]
#[case(10, 3, "fifo", "grep", ConfigError::UnknownProgram("grep".into()))]
#[case(0, 0, "nope", "nope", ConfigError::InvalidPageCount(0))]
#[case(5, 0, "nope", "nope", ConfigError::InvalidFrameCount(0))]
#[case(5, 5, "nope", "nope", ConfigError::UnknownPolicy("nope".into()))]
fn from_args_rejects_first_invalid_value(
    #[case] npages: i64,
    #[case] nframes: i64,
    #[case] policy: &str,
    #[case] program: &str,
    #[case] expected: ConfigError,
) {
    assert_eq!(
        Config::from_args(npages, nframes, policy, program),
        Err(expected)
    );
}

#[test]
fn config_error_messages() {
    assert_eq!(
        ConfigError::InvalidPageCount(0).to_string(),
        "must have at least 1 page (got 0)"
    );
    assert_eq!(
        ConfigError::InvalidFrameCount(-2).to_string(),
        "must have at least 1 frame (got -2)"
    );
    assert_eq!(
        ConfigError::UnknownPolicy("lru".into()).to_string(),
        "unknown replacement strategy: lru"
    );
    assert_eq!(
        ConfigError::UnknownProgram("x".into()).to_string(),
        "unknown program: x"
    );
}

#[rstest]
#[case("rand", ReplacementPolicy::Random)]
#[case("fifo", ReplacementPolicy::Fifo)]
#[case("custom", ReplacementPolicy::Custom)]
fn policy_names_round_trip(#[case] name: &str, #[case] policy: ReplacementPolicy) {
    assert_eq!(name.parse::<ReplacementPolicy>().unwrap(), policy);
    assert_eq!(policy.to_string(), name);
}

#[rstest]
#[case("sort", Program::Sort)]
#[case("scan", Program::Scan)]
#[case("focus", Program::Focus)]
fn program_names_round_trip(#[case] name: &str, #[case] program: Program) {
    assert_eq!(name.parse::<Program>().unwrap(), program);
    assert_eq!(program.to_string(), name);
}

#[test]
fn policy_names_are_case_sensitive() {
    assert!("FIFO".parse::<ReplacementPolicy>().is_err());
    assert!("random".parse::<ReplacementPolicy>().is_err());
}

#[test]
fn new_rejects_zero_counts() {
    assert_eq!(
        Config::new(0, 1, ReplacementPolicy::Fifo, Program::Scan),
        Err(ConfigError::InvalidPageCount(0))
    );
    assert_eq!(
        Config::new(1, 0, ReplacementPolicy::Fifo, Program::Scan),
        Err(ConfigError::InvalidFrameCount(0))
    );
}

#[test]
fn builders_replace_seed_and_disk() {
    let config = Config::new(4, 2, ReplacementPolicy::Random, Program::Focus)
        .unwrap()
        .with_seed(7)
        .with_disk(DiskConfig::Memory);
    assert_eq!(config.seed, 7);
    assert_eq!(config.disk, DiskConfig::Memory);
}

#[test]
fn config_serializes_with_command_line_names() {
    let config = Config::new(4, 2, ReplacementPolicy::Random, Program::Focus)
        .unwrap()
        .with_disk(DiskConfig::Memory);
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["policy"], "rand");
    assert_eq!(json["program"], "focus");
    assert_eq!(json["disk"], "memory");
}
