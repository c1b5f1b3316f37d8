#![cfg(test)]
use std::sync::Arc;
use std::time::Duration;

use portsweep_common::config::ScanConfig;
use portsweep_common::network::{range::PortRange, target::HostList};
use portsweep_common::observer::NoopObserver;
use portsweep_common::scanning::ResultSink;
use portsweep_common::signal::StopSignal;
use portsweep_core::report::FileSink;
use portsweep_core::sweep::SweepService;

use crate::utils::{self, LOCALHOST, RecordingSink};

fn config(ports: PortRange) -> ScanConfig {
    ScanConfig {
        ports,
        probe_timeout: Duration::from_secs(1),
        resolve_timeout: Duration::from_secs(3),
        concurrency: 64,
    }
}

fn around(port: u16) -> PortRange {
    let start = port.saturating_sub(2).max(1);
    let end = port.saturating_add(3);
    PortRange::new(start, end).unwrap()
}

fn service(ports: PortRange) -> SweepService {
    SweepService::with_system_defaults(&config(ports), Arc::new(NoopObserver))
}

/// A listener on one port inside a small range is found, and every port of
/// the range is accounted for.
#[tokio::test]
async fn sweep_finds_listening_loopback_port() {
    let (_listener, port) = utils::open_port().await;
    let ports = around(port);
    let hosts: HostList = "127.0.0.1".parse().unwrap();
    let mut sink = RecordingSink::default();

    let summary = service(ports)
        .run(&hosts, &mut sink, &StopSignal::new())
        .await
        .unwrap();

    assert_eq!(summary.scanned, 1);
    let result = &sink.scanned[0];
    assert_eq!(result.address, LOCALHOST);
    assert_eq!(result.probed, ports.len());
    assert!(result.open_ports.contains(&port));
    assert!(result.open_ports.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(result.open_ports.iter().all(|p| ports.contains(*p)));
}

#[tokio::test]
async fn sweep_without_listeners_reports_empty_result() {
    let port = utils::closed_port().await;
    let hosts: HostList = "127.0.0.1".parse().unwrap();
    let mut sink = RecordingSink::default();

    let summary = service(PortRange::single(port).unwrap())
        .run(&hosts, &mut sink, &StopSignal::new())
        .await
        .unwrap();

    assert_eq!(summary.scanned, 1);
    assert_eq!(summary.open_ports, 0);
    assert!(sink.scanned[0].open_ports.is_empty());
    assert_eq!(sink.scanned[0].probed, 1);
}

#[tokio::test]
async fn unresolvable_host_does_not_stop_the_next_one() {
    let (_listener, port) = utils::open_port().await;
    let hosts: HostList = "bad..host..invalid,localhost".parse().unwrap();
    let mut sink = RecordingSink::default();

    let summary = service(PortRange::single(port).unwrap())
        .run(&hosts, &mut sink, &StopSignal::new())
        .await
        .unwrap();

    assert_eq!(summary.unresolved, 1);
    assert_eq!(summary.scanned, 1);
    assert_eq!(sink.unresolved, vec!["bad..host..invalid".to_string()]);
    assert_eq!(sink.scanned[0].host.as_str(), "localhost");
    assert!(sink.scanned[0].address.is_loopback());
    assert_eq!(sink.scanned[0].open_ports, vec![port]);
}

#[tokio::test]
async fn repeated_sweeps_agree() {
    let (_first, first_port) = utils::open_port().await;
    let (_second, second_port) = utils::open_port().await;
    let low = first_port.min(second_port);
    let high = first_port.max(second_port);
    let ports = PortRange::new(low, high).unwrap();
    let hosts: HostList = "127.0.0.1".parse().unwrap();
    let sweeper = service(ports);

    let mut first_run = RecordingSink::default();
    let mut second_run = RecordingSink::default();
    sweeper
        .run(&hosts, &mut first_run, &StopSignal::new())
        .await
        .unwrap();
    sweeper
        .run(&hosts, &mut second_run, &StopSignal::new())
        .await
        .unwrap();

    let open = &first_run.scanned[0].open_ports;
    assert!(open.contains(&low) && open.contains(&high));
    assert_eq!(open, &second_run.scanned[0].open_ports);
}

#[tokio::test]
async fn results_file_holds_one_block_per_scanned_host() {
    let (_listener, port) = utils::open_port().await;
    let path = std::env::temp_dir().join(format!("portsweep-it-{}.txt", std::process::id()));
    let hosts: HostList = "127.0.0.1,bad..host..invalid,127.0.0.1".parse().unwrap();

    let mut sinks: Vec<Box<dyn ResultSink>> = vec![
        Box::new(RecordingSink::default()),
        Box::new(FileSink::create(&path).await.unwrap()),
    ];
    service(PortRange::single(port).unwrap())
        .run(&hosts, &mut sinks, &StopSignal::new())
        .await
        .unwrap();

    let written = tokio::fs::read_to_string(&path).await.unwrap();
    let block = format!("Open ports on 127.0.0.1:\n{port}\n");
    assert_eq!(written, format!("{block}{block}"));
    let _ = tokio::fs::remove_file(&path).await;
}
