//! Day entries: the start and end of one stretch of work.
//!
//! Entries come either from the interactive session, one field at a time,
//! or from a single command-line token such as `10:15am-2:30pm`.

use crate::accumulator::{accumulate, RunningTotal};
use crate::clock::{format_time, ClockTime, FormatError};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

const DEFAULT_CHOICE_MESSAGE: &str = "Invalid choice";

static ENTRY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*([0-9:]+)\s*([ap])\.?m\.?\s*-\s*([0-9:]+)\s*([ap])\.?m\.?\s*$").unwrap()
});

/// Raised when a selector answer is not one of the accepted tokens
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ChoiceError {
    message: String,
}

impl ChoiceError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl Default for ChoiceError {
    fn default() -> Self {
        Self { message: DEFAULT_CHOICE_MESSAGE.to_string() }
    }
}

/// Errors for a day entry written as a single token
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error("Entry '{0}' is not of the form <start>am|pm-<end>am|pm")]
    InvalidSyntax(String),
    #[error("Entry '{entry}': {source}")]
    InvalidTime {
        entry: String,
        #[source]
        source: FormatError,
    },
}

/// Which half of the day a `ClockTime` falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn is_pm(self) -> bool {
        self == Meridiem::Pm
    }

    /// Parse a selector answer: `0`/`1`, and `am`/`pm` when `accept_words` is set
    pub fn parse_choice(input: &str, accept_words: bool) -> Result<Self, ChoiceError> {
        let answer = input.trim();
        match answer {
            "0" => Ok(Meridiem::Am),
            "1" => Ok(Meridiem::Pm),
            _ if accept_words && answer.eq_ignore_ascii_case("am") => Ok(Meridiem::Am),
            _ if accept_words && answer.eq_ignore_ascii_case("pm") => Ok(Meridiem::Pm),
            _ => {
                debug!("Rejected AM/PM choice {:?}", input);
                Err(ChoiceError::new())
            }
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => write!(f, "AM"),
            Meridiem::Pm => write!(f, "PM"),
        }
    }
}

/// Parse a yes/no answer: `0`/`1`, and `no`/`yes`/`n`/`y` when `accept_words` is set
pub fn parse_yes_no(input: &str, accept_words: bool) -> Result<bool, ChoiceError> {
    let answer = input.trim().to_ascii_lowercase();
    match answer.as_str() {
        "0" => Ok(false),
        "1" => Ok(true),
        "n" | "no" if accept_words => Ok(false),
        "y" | "yes" if accept_words => Ok(true),
        _ => {
            debug!("Rejected yes/no choice {:?}", input);
            Err(ChoiceError::new())
        }
    }
}

/// Prepare a raw time field for `format_time`
pub fn clean_time_input(input: &str, strip_separators: bool) -> String {
    let trimmed = input.trim();
    if strip_separators {
        trimmed.replace(':', "")
    } else {
        trimmed.to_string()
    }
}

/// One validated day of work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayEntry {
    pub start: ClockTime,
    pub start_meridiem: Meridiem,
    pub end: ClockTime,
    pub end_meridiem: Meridiem,
}

impl DayEntry {
    pub fn new(
        start: ClockTime,
        start_meridiem: Meridiem,
        end: ClockTime,
        end_meridiem: Meridiem,
    ) -> Self {
        Self { start, start_meridiem, end, end_meridiem }
    }

    /// Add this day to `total`
    pub fn add_to(&self, total: RunningTotal) -> RunningTotal {
        accumulate(
            total,
            self.start,
            self.start_meridiem.is_pm(),
            self.end,
            self.end_meridiem.is_pm(),
        )
    }
}

impl fmt::Display for DayEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {} {}", self.start, self.start_meridiem, self.end, self.end_meridiem)
    }
}

fn meridiem_letter(letter: &str) -> Meridiem {
    if letter.eq_ignore_ascii_case("p") { Meridiem::Pm } else { Meridiem::Am }
}

impl FromStr for DayEntry {
    type Err = EntryError;

    /// Parse `<start>am|pm-<end>am|pm`, e.g. `9am-5:30pm` or `1130PM - 2AM`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = ENTRY_RE.captures(s).ok_or_else(|| EntryError::InvalidSyntax(s.to_string()))?;

        let time = |index: usize| {
            format_time(&clean_time_input(&caps[index], true))
                .map_err(|source| EntryError::InvalidTime { entry: s.to_string(), source })
        };

        Ok(DayEntry {
            start: time(1)?,
            start_meridiem: meridiem_letter(&caps[2]),
            end: time(3)?,
            end_meridiem: meridiem_letter(&caps[4]),
        })
    }
}

/// Total a sequence of day entries starting from zero
pub fn total_of<'a, I>(entries: I) -> RunningTotal
where
    I: IntoIterator<Item = &'a DayEntry>,
{
    entries.into_iter().fold(RunningTotal::default(), |total, entry| entry.add_to(total))
}
