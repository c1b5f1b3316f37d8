use std::future::Future;
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use portsweep_common::scan::ProbeOutcome;
use portsweep_common::scanning::PortProber;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Full-handshake connect scan. An accepted connection is the only signal;
/// nothing is written to or read from the socket.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpConnectProber;

#[async_trait]
impl PortProber for TcpConnectProber {
    async fn probe(&self, ip: IpAddr, port: u16, probe_timeout: Duration) -> ProbeOutcome {
        handshake_probe(SocketAddr::new(ip, port), probe_timeout).await
    }
}

pub async fn handshake_probe(socket_addr: SocketAddr, probe_timeout: Duration) -> ProbeOutcome {
    classify_connect(
        socket_addr.port(),
        probe_timeout,
        TcpStream::connect(socket_addr),
    )
    .await
}

/// Races `connect` against `probe_timeout`.
///
/// The connection (or the pending attempt, on timeout) is dropped before this
/// returns, which closes the socket on every path.
pub(crate) async fn classify_connect<F, S>(
    port: u16,
    probe_timeout: Duration,
    connect: F,
) -> ProbeOutcome
where
    F: Future<Output = io::Result<S>>,
{
    match timeout(probe_timeout, connect).await {
        Ok(Ok(_stream)) => ProbeOutcome::Open(port),
        Ok(Err(err)) => ProbeOutcome::error(port, &err),
        Err(_elapsed) => ProbeOutcome::ClosedOrFiltered(port),
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
