//! Diagnostic tracing setup for binaries.
//!
//! The library only emits `tracing` events; nothing is printed unless a
//! subscriber is installed. The rule engine logs accepted and rejected
//! actions at `debug` and victory scans at `trace`, so
//! `RUST_LOG=shogi_gomoku=debug` shows every decision of a replay.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "warn";

/// Install a compact stderr subscriber filtered by `RUST_LOG`.
///
/// Stdout is left to the caller for boards and JSON. Returns `false` if a
/// global subscriber was already installed; the existing one stays.
pub fn init() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .is_ok()
}
