//! The interactive day-by-day dialogue.
//!
//! A `Session` asks for a start time, its AM/PM flag, an end time and its
//! flag, adds the day to the running total, then asks whether there are
//! more days. A bad answer is reported and only that field is asked again.

use crate::accumulator::RunningTotal;
use crate::clock::format_time;
use crate::config::SessionConfig;
use crate::entry::{clean_time_input, parse_yes_no, DayEntry, Meridiem};
use crate::report::Summary;
use anyhow::Result;
use log::{debug, info};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::collections::VecDeque;
use std::fmt::Display;
use std::io::Write;

const START_PROMPT: &str = "START TIME: ";
const END_PROMPT: &str = "END TIME: ";
const MERIDIEM_PROMPT: &str = "AM(0) OR PM(1): ";
const MORE_PROMPT: &str = "ADD MORE TIMES: NO(0) OR YES(1): ";

/// One read from a line source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// End of input (Ctrl-D)
    Eof,
    /// Ctrl-C
    Interrupted,
}

/// Where session answers come from
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Input>;
}

/// Line editor backed by rustyline, with per-session history
pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        Ok(Self { editor: DefaultEditor::new()? })
    }
}

impl LineSource for Terminal {
    fn read_line(&mut self, prompt: &str) -> Result<Input> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let _ = self.editor.add_history_entry(line.as_str());
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(err) => Err(err.into()),
        }
    }
}

/// Canned answers, handed out in order; `Eof` once they run out
#[derive(Debug, Default)]
pub struct Scripted {
    lines: VecDeque<String>,
}

impl Scripted {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { lines: lines.into_iter().map(Into::into).collect() }
    }
}

impl LineSource for Scripted {
    fn read_line(&mut self, _prompt: &str) -> Result<Input> {
        Ok(self.lines.pop_front().map_or(Input::Eof, Input::Line))
    }
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user said there were no more days, or input ran out
    Finished(Summary),
    /// Ctrl-C; nothing should be reported
    Abandoned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    Eof,
    Interrupted,
}

pub struct Session<'a, S: LineSource, W: Write> {
    source: S,
    out: W,
    settings: &'a SessionConfig,
    stopped: Option<Stop>,
}

impl<'a, S: LineSource, W: Write> Session<'a, S, W> {
    pub fn new(source: S, out: W, settings: &'a SessionConfig) -> Self {
        Self { source, out, settings, stopped: None }
    }

    pub fn run(&mut self) -> Result<Outcome> {
        info!("Starting timeclock session");
        writeln!(self.out, "\nA timeclock app.")?;

        let mut total = RunningTotal::default();
        let mut days = 0;
        let accept_words = self.settings.accept_meridiem_words;

        loop {
            writeln!(self.out, "\nDAY # {}", days + 1)?;
            let Some(entry) = self.read_day()? else { break };
            total = entry.add_to(total);
            days += 1;
            debug!("Day {}: {}, total now {}", days, entry, total);

            writeln!(self.out)?;
            let Some(more) = self.ask(MORE_PROMPT, |line| parse_yes_no(line, accept_words))?
            else {
                break;
            };
            if !more {
                break;
            }
        }

        match self.stopped {
            Some(Stop::Interrupted) => {
                writeln!(self.out, "CTRL-C")?;
                info!("Session abandoned after {} day(s)", days);
                Ok(Outcome::Abandoned)
            }
            stopped => {
                if stopped == Some(Stop::Eof) {
                    writeln!(self.out, "CTRL-D")?;
                }
                info!("Session finished after {} day(s): {}", days, total);
                Ok(Outcome::Finished(Summary::new(total, days)))
            }
        }
    }

    fn read_day(&mut self) -> Result<Option<DayEntry>> {
        let strip = self.settings.strip_separators;
        let accept_words = self.settings.accept_meridiem_words;
        let time = |line: &str| format_time(&clean_time_input(line, strip));
        let meridiem = |line: &str| Meridiem::parse_choice(line, accept_words);

        let Some(start) = self.ask(START_PROMPT, time)? else { return Ok(None) };
        let Some(start_meridiem) = self.ask(MERIDIEM_PROMPT, meridiem)? else { return Ok(None) };
        let Some(end) = self.ask(END_PROMPT, time)? else { return Ok(None) };
        let Some(end_meridiem) = self.ask(MERIDIEM_PROMPT, meridiem)? else { return Ok(None) };

        Ok(Some(DayEntry::new(start, start_meridiem, end, end_meridiem)))
    }

    /// Prompt until `parse` accepts the answer. `None` once input has stopped.
    fn ask<T, E, F>(&mut self, prompt: &str, parse: F) -> Result<Option<T>>
    where
        E: Display,
        F: Fn(&str) -> Result<T, E>,
    {
        loop {
            self.out.flush()?;
            match self.source.read_line(prompt)? {
                Input::Line(line) => match parse(&line) {
                    Ok(value) => return Ok(Some(value)),
                    Err(err) => writeln!(self.out, "\n[!]{}[!]\n", err)?,
                },
                Input::Eof => {
                    self.stopped = Some(Stop::Eof);
                    return Ok(None);
                }
                Input::Interrupted => {
                    self.stopped = Some(Stop::Interrupted);
                    return Ok(None);
                }
            }
        }
    }
}
