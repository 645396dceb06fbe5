//! Normalization and validation of raw clock entries.
//
// A raw entry is the digits a user typed for a time of day, e.g. "3", "106"
// or "0212". `format_time` pads it out to a 4-digit "hhmm" token on a
// 12-hour dial.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

const DEFAULT_FORMAT_MESSAGE: &str = "Not a valid time format";

/// Highest value a padded token may take: 12:00
const MAX_TOKEN: u32 = 1200;
const MAX_MINUTE: u32 = 59;

static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Raised when a raw time entry cannot be turned into a `ClockTime`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FormatError {
    message: String,
}

impl FormatError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for FormatError {
    fn default() -> Self {
        Self { message: DEFAULT_FORMAT_MESSAGE.to_string() }
    }
}

/// A validated "hhmm" time on the 12-hour dial (00:00 through 12:00).
///
/// Only `format_time` (or `str::parse`, which calls it) builds one, so every
/// value satisfies `hour <= 12`, `minute <= 59` and `hhmm <= 1200`.
///
/// ```compile_fail
/// let past_noon = timeclock::ClockTime::new_unchecked(12, 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Build a token from dial parts without the `1200` ceiling check
    #[cfg(test)]
    pub(crate) fn new_unchecked(hour: u32, minute: u32) -> Self {
        debug_assert!(hour <= 12 && minute <= MAX_MINUTE);
        Self { hour, minute }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// The canonical 4-digit token, e.g. "0930"
    pub fn token(&self) -> String {
        self.to_string()
    }

    /// True for the "1200" noon/midnight pivot
    pub fn is_twelve_o_clock(&self) -> bool {
        self.hour == 12 && self.minute == 0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.hour, self.minute)
    }
}

impl PartialEq<&str> for ClockTime {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl FromStr for ClockTime {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        format_time(s)
    }
}

/// Validate a raw time string and pad it to "hhmm".
///
/// | input  | output |
/// |--------|--------|
/// | `3`    | `0300` |
/// | `11`   | `1100` |
/// | `106`  | `0106` |
/// | `0212` | `0212` |
///
/// Anything that is not 1-4 ASCII digits, or that pads to a value above
/// `1200` or a minute above `59`, is a `FormatError`.
pub fn format_time(raw: &str) -> Result<ClockTime, FormatError> {
    if !DIGITS_RE.is_match(raw) {
        debug!("Rejected time {:?}: not all digits", raw);
        return Err(FormatError::new());
    }

    let padded = match raw.len() {
        1 => format!("0{}00", raw),
        2 => format!("{}00", raw),
        3 => format!("0{}", raw),
        4 => raw.to_string(),
        len => {
            debug!("Rejected time {:?}: {} digits", raw, len);
            return Err(FormatError::new());
        }
    };

    let value: u32 = padded.parse().map_err(|_| FormatError::new())?;
    let hour = value / 100;
    let minute = value % 100;

    if value > MAX_TOKEN || minute > MAX_MINUTE {
        debug!("Rejected time {:?}: {} is off the 12-hour dial", raw, padded);
        return Err(FormatError::new());
    }

    Ok(ClockTime { hour, minute })
}
