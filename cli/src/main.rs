mod commands;
mod terminal;

use anyhow::Context;

use commands::CommandLine;
use hostmap_core::sync::SyncService;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet);

    let cfg = commands.to_config()?;

    print::header("syncing tailscale peers", commands.quiet);
    let report = SyncService::from_config(&cfg)
        .run()
        .with_context(|| format!("could not sync peers into {}", cfg.hosts_file.display()))?;

    print::block(&report.block);
    print::summary(&report, &cfg);

    if !commands.quiet {
        print::schedule_hint(&cfg);
    }
    Ok(())
}
