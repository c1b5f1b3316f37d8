pub mod sweep;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use portsweep_common::config::{Config, DEFAULT_CONCURRENCY, ScanConfig};
use portsweep_common::network::{range::PortRange, target::HostList};

#[derive(Parser)]
#[command(name = "portsweep")]
#[command(version, about = "A concurrent TCP connect scanner.")]
pub struct CommandLine {
    /// Comma-separated list of target IP addresses or hostnames
    #[arg(short = 'H', long)]
    pub hosts: HostList,

    /// First port of the range (inclusive)
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub start_port: u16,

    /// Last port of the range (inclusive)
    #[arg(short, long, default_value_t = 65535, value_parser = clap::value_parser!(u16).range(1..))]
    pub end_port: u16,

    /// Per-connection timeout in seconds
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Append open ports of every scanned host to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum number of connection attempts in flight per host
    #[arg(short, long, default_value_t = DEFAULT_CONCURRENCY, value_parser = parse_concurrency)]
    pub concurrency: usize,

    /// Give up on resolving a hostname after this many seconds
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    pub resolve_timeout: u64,

    /// Print less (-q hides decorations, -qq prints results only)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Skip the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Log every failed connection attempt
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn scan_config(&self) -> anyhow::Result<ScanConfig> {
        let ports = PortRange::new(self.start_port, self.end_port)?;
        Ok(ScanConfig {
            ports,
            probe_timeout: Duration::from_secs(self.timeout),
            resolve_timeout: Duration::from_secs(self.resolve_timeout),
            concurrency: self.concurrency,
        })
    }

    pub fn config(&self) -> Config {
        Config {
            output: self.output.clone(),
            no_banner: self.no_banner,
            quiet: self.quiet,
        }
    }
}

fn parse_concurrency(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("concurrency must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid concurrency '{s}': {e}")),
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_line_is_well_formed() {
        CommandLine::command().debug_assert();
    }

    #[test]
    fn defaults_cover_the_full_port_space() {
        let cmd = CommandLine::try_parse_from(["portsweep", "-H", "127.0.0.1"]).unwrap();
        let scan_cfg = cmd.scan_config().unwrap();

        assert_eq!(scan_cfg.ports, PortRange::default());
        assert_eq!(scan_cfg.probe_timeout, Duration::from_secs(1));
        assert_eq!(scan_cfg.concurrency, DEFAULT_CONCURRENCY);
        assert!(cmd.config().output.is_none());
    }

    #[test]
    fn flags_map_onto_scan_config() {
        let cmd = CommandLine::try_parse_from([
            "portsweep", "-H", "a.test, b.test", "-s", "20", "-e", "25", "--timeout", "3",
            "-c", "64", "-o", "out.txt", "-qq",
        ])
        .unwrap();
        let scan_cfg = cmd.scan_config().unwrap();
        let cfg = cmd.config();

        assert_eq!(cmd.hosts.iter().len(), 2);
        assert_eq!(scan_cfg.ports, PortRange::new(20, 25).unwrap());
        assert_eq!(scan_cfg.probe_timeout, Duration::from_secs(3));
        assert_eq!(scan_cfg.concurrency, 64);
        assert_eq!(cfg.output, Some(PathBuf::from("out.txt")));
        assert_eq!(cfg.quiet, 2);
    }

    #[test]
    fn inverted_range_is_rejected_before_scanning() {
        let cmd =
            CommandLine::try_parse_from(["portsweep", "-H", "h.test", "-s", "100", "-e", "20"])
                .unwrap();
        assert!(cmd.scan_config().is_err());
    }

    #[test]
    fn invalid_values_are_rejected_by_the_parser() {
        for args in [
            vec!["portsweep", "-H", ","],
            vec!["portsweep", "-H", "h.test", "-s", "0"],
            vec!["portsweep", "-H", "h.test", "-e", "65536"],
            vec!["portsweep", "-H", "h.test", "-c", "0"],
            vec!["portsweep", "-H", "h.test", "--timeout", "0"],
            vec!["portsweep"],
        ] {
            assert!(CommandLine::try_parse_from(&args).is_err(), "accepted {args:?}");
        }
    }
}
