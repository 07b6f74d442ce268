mod commands;
mod terminal;

use std::time::Duration;

use commands::CommandLine;
use sweepr_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    let cfg = Config {
        worker_count: commands.workers as usize,
        probe_timeout: Duration::from_secs(commands.timeout),
        quiet: commands.quiet,
    };

    print::banner(cfg.quiet);
    print::header("getting ready for the sweep", cfg.quiet);

    commands::sweep::sweep(commands.target, commands.show, &cfg).await
}
