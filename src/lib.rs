pub mod accumulator;
pub mod app;
pub mod cli;
pub mod clock;
pub mod config;
pub mod entry;
pub mod report;
pub mod session;

use anyhow::Result;
use env_logger::Env;
use log::*;

pub fn run(cli: cli::Cli) -> Result<()> {
    let app = app::Application::from_cli(&cli)?;
    info!("Initializing timeclock");
    app.run(cli.command.as_ref())
}

/// Log to stderr as "<timestamp> [LEVEL] message". `RUST_LOG` wins over `default_level`.
pub fn init_logger(default_level: &str) {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

// Re-export commonly used types
pub use accumulator::{accumulate, RunningTotal};
pub use clock::{format_time, ClockTime, FormatError};
pub use config::Config;
pub use entry::{ChoiceError, DayEntry, EntryError, Meridiem};
