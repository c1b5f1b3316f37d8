//! The **scan coordinator**.
//!
//! For one resolved address, [`PortScanner::scan`] fans a port range out over a
//! fixed pool of worker tasks and fans the outcomes back in:
//!
//! * workers claim ports from a shared [`queue::PortQueue`], so the number of
//!   connects in flight never exceeds the configured concurrency;
//! * each worker sends one [`ProbeOutcome`] per claimed port over an `mpsc`
//!   channel, so there is no shared mutable collection to lock;
//! * the collecting side tallies exactly `range.len()` outcomes and sorts the
//!   open ports, whatever order the probes finished in.

use std::collections::BTreeSet;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use portsweep_common::{
    config::ScanConfig,
    error::ScanError,
    network::{range::PortRange, target::HostTarget},
    observer::ScanObserver,
    scan::{ProbeOutcome, ScanResult},
    scanning::PortProber,
    signal::StopSignal,
};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use queue::PortQueue;

mod queue;
pub mod resolver;

pub struct PortScanner {
    prober: Arc<dyn PortProber>,
    observer: Arc<dyn ScanObserver>,
    probe_timeout: Duration,
    concurrency: usize,
}

impl PortScanner {
    pub fn new(
        prober: Arc<dyn PortProber>,
        observer: Arc<dyn ScanObserver>,
        cfg: &ScanConfig,
    ) -> Self {
        Self {
            prober,
            observer,
            probe_timeout: cfg.probe_timeout,
            concurrency: cfg.concurrency.max(1),
        }
    }

    /// Probes every port of `ports` on `address` and returns the open ones.
    ///
    /// Individual probe failures never fail the scan. Errors are reserved for
    /// the machinery itself (a worker panicked, an outcome went missing) and
    /// for [`ScanError::Aborted`] when `stop` fires, in which case every
    /// in-flight probe is cancelled and nothing collected so far is returned.
    pub async fn scan(
        &self,
        host: &HostTarget,
        address: IpAddr,
        ports: PortRange,
        stop: &StopSignal,
    ) -> Result<ScanResult, ScanError> {
        let started: Instant = Instant::now();
        let (tx, mut rx) = mpsc::unbounded_channel::<ProbeOutcome>();
        let mut workers: JoinSet<()> = self.spawn_workers(address, ports, tx);

        let stopped = stop.stopped();
        tokio::pin!(stopped);

        let mut tally = Tally::new(ports);
        loop {
            tokio::select! {
                biased;

                _ = &mut stopped => {
                    workers.abort_all();
                    return Err(ScanError::Aborted);
                }

                outcome = rx.recv() => match outcome {
                    Some(outcome) => {
                        self.observer.probe_finished(address, &outcome);
                        tally.record(outcome)?;
                    }
                    None => break,
                }
            }
        }

        while let Some(joined) = workers.join_next().await {
            joined?;
        }

        tally.finish(host, address, started.elapsed())
    }

    fn spawn_workers(
        &self,
        address: IpAddr,
        ports: PortRange,
        tx: mpsc::UnboundedSender<ProbeOutcome>,
    ) -> JoinSet<()> {
        let queue = Arc::new(PortQueue::new(ports));
        let mut workers = JoinSet::new();

        for _ in 0..self.concurrency.min(ports.len()) {
            let queue = Arc::clone(&queue);
            let prober = Arc::clone(&self.prober);
            let tx = tx.clone();
            let probe_timeout = self.probe_timeout;

            workers.spawn(async move {
                while let Some(port) = queue.next_port() {
                    let outcome = prober.probe(address, port, probe_timeout).await;
                    if tx.send(outcome).is_err() {
                        break;
                    }
                }
            });
        }

        workers
    }
}

/// Aggregation point for one host. Each port may contribute exactly once.
struct Tally {
    ports: PortRange,
    seen: Vec<bool>,
    received: usize,
    errors: usize,
    open: BTreeSet<u16>,
}

impl Tally {
    fn new(ports: PortRange) -> Self {
        Self {
            ports,
            seen: vec![false; ports.len()],
            received: 0,
            errors: 0,
            open: BTreeSet::new(),
        }
    }

    fn record(&mut self, outcome: ProbeOutcome) -> Result<(), ScanError> {
        let port = outcome.port();
        if !self.ports.contains(port) {
            return Err(ScanError::Unexpected(port));
        }

        let slot = &mut self.seen[usize::from(port - self.ports.start())];
        if *slot {
            return Err(ScanError::Duplicate(port));
        }
        *slot = true;
        self.received += 1;

        match outcome {
            ProbeOutcome::Open(port) => {
                self.open.insert(port);
            }
            ProbeOutcome::Error { .. } => self.errors += 1,
            ProbeOutcome::ClosedOrFiltered(_) => {}
        }
        Ok(())
    }

    fn finish(
        self,
        host: &HostTarget,
        address: IpAddr,
        elapsed: Duration,
    ) -> Result<ScanResult, ScanError> {
        let expected = self.ports.len();
        if self.received != expected {
            return Err(ScanError::Incomplete {
                expected,
                received: self.received,
            });
        }

        Ok(ScanResult {
            host: host.clone(),
            address,
            open_ports: self.open.into_iter().collect(),
            probed: self.received,
            errors: self.errors,
            elapsed,
        })
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
