use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    #[error("port 0 is not a valid scan target")]
    ZeroPort,
    #[error("start port {start} is greater than end port {end}")]
    Inverted { start: u16, end: u16 },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("host cannot be empty")]
    Empty,
    #[error("no hosts given")]
    NoHosts,
}

/// A host string could not be mapped to an address.
///
/// Always recovered by the driver: the host is skipped and the sweep moves on.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("failed to resolve {host}: {source}")]
    Lookup {
        host: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{host} did not resolve to any address")]
    NoAddress { host: String },
    #[error("resolving {host} timed out after {}s", .timeout.as_secs_f64())]
    TimedOut { host: String, timeout: Duration },
}

impl ResolutionError {
    /// The host string exactly as it was given.
    pub fn host(&self) -> &str {
        match self {
            Self::Lookup { host, .. } | Self::NoAddress { host } | Self::TimedOut { host, .. } => {
                host
            }
        }
    }
}

/// Failures of the scan machinery itself, as opposed to a single probe.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The stop signal fired while the host was being scanned.
    #[error("scan aborted")]
    Aborted,
    #[error("probe worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
    #[error("collected {received} probe outcomes, expected {expected}")]
    Incomplete { expected: usize, received: usize },
    #[error("port {0} produced more than one probe outcome")]
    Duplicate(u16),
    #[error("port {0} is outside the scanned range")]
    Unexpected(u16),
}
