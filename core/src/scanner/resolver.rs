use std::io;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use portsweep_common::{
    error::ResolutionError, network::target::HostTarget, scanning::HostResolver,
};
use tokio::net::lookup_host;
use tokio::time::timeout;

/// Resolves through the operating system's resolver.
///
/// `tokio::net::lookup_host` runs the blocking `getaddrinfo` call on tokio's
/// blocking pool, so a slow lookup never stalls in-flight probes.
#[derive(Debug, Clone, Copy)]
pub struct SystemResolver {
    resolve_timeout: Duration,
}

impl SystemResolver {
    pub fn new(resolve_timeout: Duration) -> Self {
        Self { resolve_timeout }
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolve(&self, host: &HostTarget) -> Result<IpAddr, ResolutionError> {
        resolve(host, self.resolve_timeout).await
    }
}

/// Maps `host` to a single address. Literals skip the lookup entirely.
pub async fn resolve(
    host: &HostTarget,
    resolve_timeout: Duration,
) -> Result<IpAddr, ResolutionError> {
    if let Some(ip) = host.as_literal() {
        return Ok(ip);
    }

    if host.as_str().chars().any(char::is_whitespace) {
        return Err(ResolutionError::Lookup {
            host: host.to_string(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "host name contains whitespace"),
        });
    }

    let lookup = timeout(resolve_timeout, lookup_host((host.as_str(), 0)));
    let addrs: Vec<SocketAddr> = match lookup.await {
        Ok(Ok(addrs)) => addrs.collect(),
        Ok(Err(source)) => {
            return Err(ResolutionError::Lookup {
                host: host.to_string(),
                source,
            });
        }
        Err(_elapsed) => {
            return Err(ResolutionError::TimedOut {
                host: host.to_string(),
                timeout: resolve_timeout,
            });
        }
    };

    pick_address(addrs.iter().map(SocketAddr::ip)).ok_or_else(|| ResolutionError::NoAddress {
        host: host.to_string(),
    })
}

/// First IPv4 address if there is one, otherwise the first address at all.
fn pick_address(addrs: impl IntoIterator<Item = IpAddr>) -> Option<IpAddr> {
    let mut first: Option<IpAddr> = None;
    for ip in addrs {
        if ip.is_ipv4() {
            return Some(ip);
        }
        first.get_or_insert(ip);
    }
    first
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    const RESOLVE_TIMEOUT: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn literal_addresses_resolve_to_themselves() {
        let v4: HostTarget = "192.0.2.10".parse().unwrap();
        let v6: HostTarget = "::1".parse().unwrap();

        assert_eq!(
            resolve(&v4, RESOLVE_TIMEOUT).await.unwrap(),
            IpAddr::V4(Ipv4Addr::new(192, 0, 2, 10))
        );
        assert_eq!(
            resolve(&v6, RESOLVE_TIMEOUT).await.unwrap(),
            IpAddr::V6(Ipv6Addr::LOCALHOST)
        );
    }

    #[tokio::test]
    async fn localhost_resolves_to_loopback() {
        let host: HostTarget = "localhost".parse().unwrap();
        let ip = SystemResolver::new(RESOLVE_TIMEOUT)
            .resolve(&host)
            .await
            .unwrap();
        assert!(ip.is_loopback());
    }

    #[tokio::test]
    async fn malformed_name_fails_with_original_host() {
        let host: HostTarget = "bad..name..invalid".parse().unwrap();
        let err = resolve(&host, RESOLVE_TIMEOUT).await.unwrap_err();
        assert_eq!(err.host(), "bad..name..invalid");
    }

    #[tokio::test]
    async fn name_with_whitespace_is_a_lookup_failure() {
        let host: HostTarget = "bad host".parse().unwrap();
        let err = SystemResolver::new(RESOLVE_TIMEOUT)
            .resolve(&host)
            .await
            .unwrap_err();

        assert_eq!(err.host(), "bad host");
        match err {
            ResolutionError::Lookup { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::InvalidInput);
            }
            other => panic!("expected a lookup failure, got {other:?}"),
        }
    }

    #[test]
    fn pick_address_prefers_ipv4() {
        let v6 = IpAddr::V6(Ipv6Addr::LOCALHOST);
        let v4 = IpAddr::V4(Ipv4Addr::LOCALHOST);

        assert_eq!(pick_address([v6, v4]), Some(v4));
        assert_eq!(pick_address([v6]), Some(v6));
        assert_eq!(pick_address([]), None);
    }
}
