use crate::cli::{Cli, Commands, ConfigActions};
use crate::config::{get_config_path, Config, OutputFormat};
use crate::entry::{total_of, DayEntry};
use crate::report::{render, Summary};
use crate::session::{Outcome, Session, Terminal};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

pub struct Application {
    config: Config,
    config_path: Option<PathBuf>,
    format: OutputFormat,
}

impl Application {
    pub fn new(config: Config, config_path: Option<PathBuf>, format: Option<OutputFormat>) -> Self {
        let format = format.unwrap_or(config.output.format);
        Self { config, config_path, format }
    }

    /// Build from parsed arguments, loading the config they point at
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::resolve(cli.config_file.as_deref())?;
        Ok(Self::new(config, cli.config_file.clone(), cli.format))
    }

    pub fn run(&self, command: Option<&Commands>) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        match command {
            None => self.run_session(&mut out),
            Some(Commands::Total { entries }) => self.run_total(entries, &mut out),
            Some(Commands::Config { action }) => self.run_config(action, &mut out),
        }
    }

    fn run_session(&self, out: &mut impl Write) -> Result<()> {
        let terminal = Terminal::new().context("Failed to open the terminal")?;
        let outcome = Session::new(terminal, &mut *out, &self.config.session).run()?;
        match outcome {
            Outcome::Finished(summary) => self.print_summary(&summary, out),
            Outcome::Abandoned => Ok(()),
        }
    }

    /// Total entries given on the command line; the first bad entry aborts
    pub fn run_total(&self, entries: &[String], out: &mut impl Write) -> Result<()> {
        let days = entries
            .iter()
            .map(|entry| entry.parse::<DayEntry>())
            .collect::<Result<Vec<_>, _>>()?;

        for (index, day) in days.iter().enumerate() {
            log::debug!("Day {}: {}", index + 1, day);
        }

        let summary = Summary::new(total_of(&days), days.len());
        self.print_summary(&summary, out)
    }

    fn run_config(&self, action: &ConfigActions, out: &mut impl Write) -> Result<()> {
        match action {
            ConfigActions::Show => write!(out, "{}", self.config.to_toml()?)?,
            ConfigActions::Path => {
                let path = match &self.config_path {
                    Some(path) => path.clone(),
                    None => get_config_path()?,
                };
                writeln!(out, "{}", path.display())?;
            }
        }
        Ok(())
    }

    fn print_summary(&self, summary: &Summary, out: &mut impl Write) -> Result<()> {
        if self.format == OutputFormat::Text {
            writeln!(out)?;
        }
        writeln!(out, "{}", render(summary, self.format)?)?;
        Ok(())
    }
}
