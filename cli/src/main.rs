mod commands;
mod terminal;

use commands::{CommandLine, sweep};
use portsweep_common::config::{Config, ScanConfig};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet);

    let cfg: Config = commands.config();
    let scan_cfg: ScanConfig = commands.scan_config()?;

    print::banner(cfg.no_banner, cfg.quiet);
    print::header("starting sweep", cfg.quiet);

    sweep::sweep(&commands.hosts, &scan_cfg, &cfg).await
}
