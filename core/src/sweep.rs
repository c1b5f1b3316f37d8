//! # Sweep Service
//!
//! Drives a complete run: hosts are handled strictly one after another, each
//! one resolved, scanned, and reported before the next begins. Ports within a
//! host are scanned concurrently by the [`PortScanner`].
//!
//! A host that fails to resolve is reported and skipped. Only failures of the
//! scan machinery or of a result sink end the run early.

use std::sync::Arc;

use anyhow::Context;
use portsweep_common::{
    config::ScanConfig,
    error::ScanError,
    network::{range::PortRange, target::HostList},
    observer::ScanObserver,
    scan::{HostReport, SweepSummary},
    scanning::{HostResolver, PortProber, ResultSink},
    signal::StopSignal,
};

use crate::network::tcp::TcpConnectProber;
use crate::scanner::{PortScanner, resolver::SystemResolver};

pub struct SweepService {
    resolver: Box<dyn HostResolver>,
    scanner: PortScanner,
    observer: Arc<dyn ScanObserver>,
    ports: PortRange,
}

impl SweepService {
    pub fn new(
        resolver: Box<dyn HostResolver>,
        prober: Arc<dyn PortProber>,
        observer: Arc<dyn ScanObserver>,
        cfg: &ScanConfig,
    ) -> Self {
        Self {
            resolver,
            scanner: PortScanner::new(prober, Arc::clone(&observer), cfg),
            observer,
            ports: cfg.ports,
        }
    }

    /// System resolver and TCP connect prober.
    pub fn with_system_defaults(cfg: &ScanConfig, observer: Arc<dyn ScanObserver>) -> Self {
        Self::new(
            Box::new(SystemResolver::new(cfg.resolve_timeout)),
            Arc::new(TcpConnectProber),
            observer,
            cfg,
        )
    }

    /// Sweeps every host in order and hands one report per host to `sink`.
    ///
    /// When `stop` fires mid-host, that host's partial results are dropped
    /// and the remaining hosts are skipped. The returned summary is flagged
    /// `aborted` in that case.
    pub async fn run(
        &self,
        hosts: &HostList,
        sink: &mut dyn ResultSink,
        stop: &StopSignal,
    ) -> anyhow::Result<SweepSummary> {
        let mut summary = SweepSummary::default();

        for host in hosts {
            if stop.is_stopped() {
                summary.aborted = true;
                break;
            }

            self.observer.host_started(host, &self.ports);

            let resolved = self.resolver.resolve(host).await;
            if stop.is_stopped() {
                self.observer.sweep_aborted(host);
                summary.aborted = true;
                break;
            }

            let address = match resolved {
                Ok(address) => address,
                Err(err) => {
                    self.observer.host_unresolved(&err);
                    summary.unresolved += 1;
                    sink.record(&HostReport::Unresolved(err)).await?;
                    continue;
                }
            };
            self.observer.host_resolved(host, address);

            match self.scanner.scan(host, address, self.ports, stop).await {
                Ok(result) => {
                    self.observer.host_finished(&result);
                    summary.scanned += 1;
                    summary.open_ports += result.open_ports.len();
                    sink.record(&HostReport::Scanned(result)).await?;
                }
                Err(ScanError::Aborted) => {
                    self.observer.sweep_aborted(host);
                    summary.aborted = true;
                    break;
                }
                Err(err) => {
                    return Err(err).with_context(|| format!("scanning {host} ({address}) failed"));
                }
            }
        }

        sink.finish().await?;
        Ok(summary)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
