use std::net::IpAddr;

use indicatif::ProgressStyle;
use portsweep_common::{
    error::ResolutionError,
    network::{range::PortRange, target::HostTarget},
    observer::ScanObserver,
    scan::{ProbeOutcome, ScanResult},
};
use portsweep_core::observer::TracingObserver;
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Logs through [`TracingObserver`] and drives the progress bar attached to
/// the sweep span.
pub struct ProgressObserver {
    inner: TracingObserver,
    span: Span,
}

impl ProgressObserver {
    pub fn new(span: Span) -> anyhow::Result<Self> {
        let style = ProgressStyle::with_template(
            "{spinner:.blue} {msg} {wide_bar:.green/bright_black} {pos}/{len} ({eta})",
        )?
        .tick_strings(TICK_STRINGS)
        .progress_chars("━╸─");
        span.pb_set_style(&style);

        Ok(Self {
            inner: TracingObserver,
            span,
        })
    }
}

impl ScanObserver for ProgressObserver {
    fn host_started(&self, host: &HostTarget, ports: &PortRange) {
        self.inner.host_started(host, ports);
        self.span.pb_set_length(ports.len() as u64);
        self.span.pb_set_position(0);
        self.span.pb_set_message(&format!("Probing {host}"));
    }

    fn host_resolved(&self, host: &HostTarget, address: IpAddr) {
        self.inner.host_resolved(host, address);
        self.span.pb_set_message(&format!("Probing {host} ({address})"));
    }

    fn host_unresolved(&self, err: &ResolutionError) {
        self.inner.host_unresolved(err);
    }

    fn probe_finished(&self, address: IpAddr, outcome: &ProbeOutcome) {
        self.inner.probe_finished(address, outcome);
        self.span.pb_inc(1);
    }

    fn host_finished(&self, result: &ScanResult) {
        self.inner.host_finished(result);
    }

    fn sweep_aborted(&self, host: &HostTarget) {
        self.inner.sweep_aborted(host);
    }
}
