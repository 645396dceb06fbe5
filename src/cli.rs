use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Timeclock - total up the hours and minutes worked across several days
#[derive(Debug, Parser)]
#[command(name = "timeclock")]
#[command(about = "Total up the hours and minutes worked across several days", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute (if not specified, starts the interactive session)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file to use instead of the default location
    #[arg(long = "config", short = 'c', global = true)]
    pub config_file: Option<PathBuf>,

    /// How to print the total (overrides output.format from the config)
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, short, default_value = "warn", global = true)]
    pub log_level: String,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Total day entries given as arguments
    #[command(alias = "sum")]
    Total {
        /// Entries of the form <start>am|pm-<end>am|pm, e.g. 10:15am-2:30pm
        #[arg(required = true)]
        entries: Vec<String>,
    },

    /// View configuration
    Config {
        #[command(subcommand)]
        action: ConfigActions,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigActions {
    /// Show the effective configuration
    #[command(alias = "list")]
    Show,

    /// Print the config file location
    Path,
}
