use std::sync::Arc;
use std::time::{Duration, Instant};

use colored::*;
use portsweep_common::{
    config::{Config, ScanConfig},
    network::target::HostList,
    scan::SweepSummary,
    scanning::ResultSink,
    signal::StopSignal,
};
use portsweep_core::{report::FileSink, sweep::SweepService};
use tracing::{Instrument, info, info_span, warn};

use crate::mprint;
use crate::terminal::{colors, print, report::ConsoleSink, spinner::ProgressObserver};

pub async fn sweep(hosts: &HostList, scan_cfg: &ScanConfig, cfg: &Config) -> anyhow::Result<()> {
    let stop: StopSignal = StopSignal::new();
    listen_for_interrupt(stop.clone());

    let span = info_span!("sweep", indicatif.pb_show = true);
    let observer = Arc::new(ProgressObserver::new(span.clone())?);
    let service = SweepService::with_system_defaults(scan_cfg, observer);

    let mut sinks: Vec<Box<dyn ResultSink>> = vec![Box::new(ConsoleSink::new(cfg.quiet))];
    if let Some(path) = &cfg.output {
        let file_sink = FileSink::create(path).await?;
        info!("Writing results to {}", file_sink.path().display());
        sinks.push(Box::new(file_sink));
    }

    let start_time: Instant = Instant::now();
    let summary: SweepSummary = service.run(hosts, &mut sinks, &stop).instrument(span).await?;

    sweep_ends(&summary, start_time.elapsed(), cfg);
    Ok(())
}

/// First Ctrl-C stops the sweep; the current host's partial results are dropped.
fn listen_for_interrupt(stop: StopSignal) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, stopping sweep");
            stop.stop();
        }
    });
}

fn sweep_ends(summary: &SweepSummary, total_time: Duration, cfg: &Config) {
    if summary.aborted {
        warn!("Sweep aborted before all hosts were scanned");
    }

    let scanned: ColoredString = format!("{} hosts", summary.scanned).bold().green();
    let open: ColoredString = format!("{} open ports", summary.open_ports).bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let mut output: String = format!("Sweep Complete: {open} on {scanned} in {total_time}");
    if summary.unresolved > 0 {
        let unresolved: ColoredString =
            format!("{} unresolved", summary.unresolved).bold().color(colors::UNRESOLVED);
        output.push_str(&format!(", {unresolved}"));
    }
    let output: ColoredString = output.color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
            print::end_of_program();
        }
        1 => {
            mprint!();
            info!("{}", output);
        }
        _ => {}
    }
}
