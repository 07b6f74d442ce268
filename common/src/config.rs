use std::time::Duration;

/// Fallback pool size when the user does not override it.
pub const DEFAULT_WORKER_COUNT: usize = 4;

/// How long a single probe waits before its target counts as dead.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(1);

pub struct Config {
    /// Number of concurrent probe workers. Anything below 1 is rejected
    /// before a sweep starts.
    pub worker_count: usize,
    /// Upper bound on a single probe, enforced by the probe itself.
    pub probe_timeout: Duration,
    /// Suppresses decorative output when non-zero.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            worker_count: DEFAULT_WORKER_COUNT,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            quiet: 0,
        }
    }
}
