//! Wall-clock and memory measurement around a solver call.
//!
//! Timing uses `std::time::Instant`; memory is the resident-set delta of the
//! current process in KiB, sampled through `sysinfo` immediately before and
//! after the call. The RSS delta is a coarse proxy for peak allocation but
//! needs no allocator hooks, and it is comparable across the solvers since
//! the harness runs them one at a time.

use std::time::Instant;

use sysinfo::{get_current_pid, ProcessRefreshKind, System};

/// One measured invocation.
#[derive(Debug, Clone)]
pub struct Measured<T> {
    /// Wall-clock duration in seconds.
    pub wall_s: f64,
    /// Resident-set growth across the call, KiB.
    pub rss_delta_kib: u64,
    pub value: T,
}

/// Run `compute`, recording elapsed time and RSS delta without altering its
/// semantics.
pub fn measure<T, F>(sys: &mut System, compute: F) -> Measured<T>
where
    F: FnOnce() -> T,
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let value = compute();
    let wall_s = start.elapsed().as_secs_f64();
    let after = rss_kib(sys);

    Measured {
        wall_s,
        rss_delta_kib: after.saturating_sub(before),
        value,
    }
}

/// Current process RSS in KiB, or 0 if the process cannot be inspected.
pub fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

/// Humanize a duration given in seconds (μs / ms / s).
pub fn format_time(wall_s: f64) -> String {
    let ms = wall_s * 1_000.0;
    if ms < 1.0 {
        format!("{:.2} μs", ms * 1_000.0)
    } else if ms < 1_000.0 {
        format!("{ms:.2} ms")
    } else {
        format!("{:.2} s", ms / 1_000.0)
    }
}

/// Humanize a memory amount given in KiB (KiB / MiB).
pub fn format_memory(kib: u64) -> String {
    if kib < 1024 {
        format!("{kib} KiB")
    } else {
        format!("{:.2} MiB", kib as f64 / 1024.0)
    }
}
