use std::path::PathBuf;
use std::time::Duration;

use crate::network::range::PortRange;

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(1);
pub const DEFAULT_RESOLVE_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_CONCURRENCY: usize = 512;

/// Everything the engine needs to sweep one host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    pub ports: PortRange,
    /// Upper bound for a single connect attempt.
    pub probe_timeout: Duration,
    /// Upper bound for turning a name into an address.
    pub resolve_timeout: Duration,
    /// Maximum number of probes in flight for a host. Never zero.
    pub concurrency: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ports: PortRange::default(),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            resolve_timeout: DEFAULT_RESOLVE_TIMEOUT,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

/// Presentation settings for the front end.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Appends one block per scanned host to this file.
    pub output: Option<PathBuf>,
    pub no_banner: bool,
    /// 0 prints everything, 1 drops decorations, 2 only prints results.
    pub quiet: u8,
}
