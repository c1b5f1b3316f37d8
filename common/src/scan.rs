//! # Scan Results
//!
//! Values produced by the engine. A [`ProbeOutcome`] exists once per probed
//! port; a [`ScanResult`] exists once per successfully resolved host.

use std::fmt::Write;
use std::io;
use std::net::IpAddr;
use std::time::Duration;

use crate::error::ResolutionError;
use crate::network::target::HostTarget;

/// Classification of a single connect attempt.
///
/// Only [`ProbeOutcome::Open`] is a positive signal. A timeout and a refused
/// or otherwise failed connect are both "not open"; the engine never tries to
/// tell a closed port from a filtered one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Open(u16),
    ClosedOrFiltered(u16),
    Error {
        port: u16,
        kind: io::ErrorKind,
        reason: String,
    },
}

impl ProbeOutcome {
    pub fn error(port: u16, err: &io::Error) -> Self {
        Self::Error {
            port,
            kind: err.kind(),
            reason: err.to_string(),
        }
    }

    pub fn port(&self) -> u16 {
        match self {
            Self::Open(port) | Self::ClosedOrFiltered(port) | Self::Error { port, .. } => *port,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

/// Open ports of one host, ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub host: HostTarget,
    pub address: IpAddr,
    pub open_ports: Vec<u16>,
    /// Number of outcomes collected, always the length of the scanned range.
    pub probed: usize,
    /// Outcomes that ended in a connect error rather than success or timeout.
    pub errors: usize,
    pub elapsed: Duration,
}

impl ScanResult {
    /// Renders the block written to a results file.
    ///
    /// ```text
    /// Open ports on 10.0.0.1:
    /// 22
    /// 80
    /// ```
    pub fn report_block(&self) -> String {
        let mut block = format!("Open ports on {}:\n", self.address);
        for port in &self.open_ports {
            let _ = writeln!(block, "{port}");
        }
        block
    }
}

/// What the driver hands to a [`ResultSink`](crate::scanning::ResultSink) for each host.
#[derive(Debug)]
pub enum HostReport {
    Unresolved(ResolutionError),
    Scanned(ScanResult),
}

/// Totals for a complete run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub scanned: usize,
    pub unresolved: usize,
    pub open_ports: usize,
    /// Set when the stop signal cut the run short.
    pub aborted: bool,
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
