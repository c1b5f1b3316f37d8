use std::net::IpAddr;

use portsweep_common::{
    error::ResolutionError,
    network::{range::PortRange, target::HostTarget},
    observer::ScanObserver,
    scan::{ProbeOutcome, ScanResult},
};
use tracing::{debug, error, info, warn};

/// Log target for per-port connect errors. Front ends usually filter it out
/// unless asked to be verbose.
pub const PROBE_LOG_TARGET: &str = "portsweep::probe";

/// Reports sweep progress as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ScanObserver for TracingObserver {
    fn host_started(&self, host: &HostTarget, ports: &PortRange) {
        info!("Scanning {host}, ports {ports}");
    }

    fn host_resolved(&self, host: &HostTarget, address: IpAddr) {
        debug!("{host} resolved to {address}");
    }

    fn host_unresolved(&self, err: &ResolutionError) {
        warn!("Skipping {}: {err}", err.host());
    }

    fn probe_finished(&self, address: IpAddr, outcome: &ProbeOutcome) {
        if let ProbeOutcome::Error { port, reason, .. } = outcome {
            error!(target: PROBE_LOG_TARGET, "Connect to {address}:{port} failed: {reason}");
        }
    }

    fn host_finished(&self, result: &ScanResult) {
        info!(
            "Finished {} in {:.2}s: {} open of {} probed",
            result.address,
            result.elapsed.as_secs_f64(),
            result.open_ports.len(),
            result.probed
        );
    }

    fn sweep_aborted(&self, host: &HostTarget) {
        warn!("Sweep interrupted while scanning {host}, partial results discarded");
    }
}
