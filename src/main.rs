use anyhow::Result;
use clap::Parser;
use timeclock::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    timeclock::init_logger(&cli.log_level);
    timeclock::run(cli)
}
