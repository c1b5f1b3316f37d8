use std::net::IpAddr;

use crate::error::ResolutionError;
use crate::network::{range::PortRange, target::HostTarget};
use crate::scan::{ProbeOutcome, ScanResult};

/// Observability hooks for a sweep.
///
/// Passed into the engine explicitly so that nothing in the core depends on a
/// process-wide logger. Every hook defaults to doing nothing.
pub trait ScanObserver: Send + Sync {
    fn host_started(&self, _host: &HostTarget, _ports: &PortRange) {}

    fn host_resolved(&self, _host: &HostTarget, _address: IpAddr) {}

    fn host_unresolved(&self, _err: &ResolutionError) {}

    /// Called from the collecting task, once per port, in completion order.
    fn probe_finished(&self, _address: IpAddr, _outcome: &ProbeOutcome) {}

    fn host_finished(&self, _result: &ScanResult) {}

    fn sweep_aborted(&self, _host: &HostTarget) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}
