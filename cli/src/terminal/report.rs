use async_trait::async_trait;
use colored::*;
use portsweep_common::scan::HostReport;
use portsweep_common::scanning::ResultSink;

use crate::mprint;
use crate::terminal::{colors, format, print};

/// Prints a tree per host as soon as the driver hands it over.
pub struct ConsoleSink {
    quiet: u8,
    printed: usize,
}

impl ConsoleSink {
    pub fn new(quiet: u8) -> Self {
        Self { quiet, printed: 0 }
    }

    fn print_host_tree(&self, report: &HostReport) {
        match report {
            HostReport::Unresolved(err) => {
                print::tree_head(self.printed, err.host());
                print::as_tree_one_level(vec![(
                    "Status".to_string(),
                    err.to_string().color(colors::UNRESOLVED),
                )]);
            }
            HostReport::Scanned(result) => {
                print::tree_head(self.printed, result.host.as_str());
                print::as_tree_one_level(vec![
                    format::address_to_detail(&result.address),
                    format::open_ports_to_detail(&result.open_ports),
                    format::probed_to_detail(result.probed, result.errors, result.elapsed),
                ]);
            }
        }
    }

    fn print_result_line(&self, report: &HostReport) {
        if let HostReport::Scanned(result) = report {
            print::print(&format!(
                "{} {}",
                result.address,
                format::join_ports(&result.open_ports)
            ));
        }
    }
}

#[async_trait]
impl ResultSink for ConsoleSink {
    async fn record(&mut self, report: &HostReport) -> anyhow::Result<()> {
        match self.quiet {
            2.. => self.print_result_line(report),
            _ => {
                if self.printed > 0 {
                    mprint!();
                }
                self.print_host_tree(report);
            }
        }
        self.printed += 1;
        Ok(())
    }
}
