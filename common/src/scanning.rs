//! The **abstractions** the sweep engine is written against.
//!
//! Concrete strategies live in `portsweep-core` (system resolver, TCP connect
//! prober, file sink) and in the CLI (console sink). Tests swap any of them for
//! in-memory fakes.

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::ResolutionError;
use crate::network::target::HostTarget;
use crate::scan::{HostReport, ProbeOutcome};

/// Turns a host string into one connectable address.
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn resolve(&self, host: &HostTarget) -> Result<IpAddr, ResolutionError>;
}

/// A single connect attempt against one address and port.
///
/// Implementations must never fail: every failure mode is folded into the
/// returned [`ProbeOutcome`].
#[async_trait]
pub trait PortProber: Send + Sync {
    async fn probe(&self, ip: IpAddr, port: u16, timeout: Duration) -> ProbeOutcome;
}

/// Receives per-host reports in host-processing order.
#[async_trait]
pub trait ResultSink: Send {
    async fn record(&mut self, report: &HostReport) -> anyhow::Result<()>;

    /// Called once after the last host, including after an aborted run.
    async fn finish(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[async_trait]
impl ResultSink for Vec<Box<dyn ResultSink>> {
    async fn record(&mut self, report: &HostReport) -> anyhow::Result<()> {
        for sink in self.iter_mut() {
            sink.record(report).await?;
        }
        Ok(())
    }

    async fn finish(&mut self) -> anyhow::Result<()> {
        for sink in self.iter_mut() {
            sink.finish().await?;
        }
        Ok(())
    }
}
