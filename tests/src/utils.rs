#![cfg(test)]
use std::net::{IpAddr, Ipv4Addr};

use async_trait::async_trait;
use portsweep_common::scan::{HostReport, ScanResult};
use portsweep_common::scanning::ResultSink;
use tokio::net::TcpListener;

pub const LOCALHOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Binds a listener on an ephemeral loopback port. The port stays open for
/// as long as the listener lives; the kernel completes handshakes without an
/// explicit `accept`.
pub async fn open_port() -> (TcpListener, u16) {
    let listener = TcpListener::bind((LOCALHOST, 0)).await.unwrap();
    let port = listener.local_addr().unwrap().port();
    (listener, port)
}

/// A loopback port nothing listens on.
pub async fn closed_port() -> u16 {
    let (_listener, port) = open_port().await;
    port
}

#[derive(Default)]
pub struct RecordingSink {
    pub unresolved: Vec<String>,
    pub scanned: Vec<ScanResult>,
}

#[async_trait]
impl ResultSink for RecordingSink {
    async fn record(&mut self, report: &HostReport) -> anyhow::Result<()> {
        match report {
            HostReport::Unresolved(err) => self.unresolved.push(err.host().to_string()),
            HostReport::Scanned(result) => self.scanned.push(result.clone()),
        }
        Ok(())
    }
}
