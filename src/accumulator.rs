//! Running total of time worked.
//!
//! Each day entry is a start and an end `ClockTime`, each tagged AM or PM.
//! `accumulate` adds the elapsed time between them to a `RunningTotal` and
//! hands back the new total; the caller threads it into the next call.

use crate::clock::ClockTime;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

const HOURS_PER_HALF_DAY: u32 = 12;
const HOURS_PER_DAY: u32 = 24;
const MINUTES_PER_HOUR: u32 = 60;

/// Hours and minutes worked so far. `minutes` stays below 60 once a value
/// has come back from `accumulate`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningTotal {
    pub hours: u32,
    pub minutes: u32,
}

impl RunningTotal {
    pub fn new(hours: u32, minutes: u32) -> Self {
        Self { hours, minutes }
    }

    pub fn total_minutes(&self) -> u64 {
        u64::from(self.hours) * u64::from(MINUTES_PER_HOUR) + u64::from(self.minutes)
    }
}

impl From<(u32, u32)> for RunningTotal {
    fn from((hours, minutes): (u32, u32)) -> Self {
        Self { hours, minutes }
    }
}

impl From<RunningTotal> for (u32, u32) {
    fn from(total: RunningTotal) -> Self {
        (total.hours, total.minutes)
    }
}

impl fmt::Display for RunningTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {:02}m", self.hours, self.minutes)
    }
}

/// Position of a token on the 24-hour clock after the PM offset.
///
/// A start of "1200" is hour 0 of its half-day. An end of "1200" AM is the
/// midnight that closes the day (hour 24); "1200" PM as an end takes the
/// plain +12 offset. Past-noon tokens such as "1215" never come out of
/// `format_time`; their hour counts as 0 of the half-day.
fn dial_position(time: ClockTime, is_end: bool, is_pm: bool) -> (u32, u32) {
    let hour = if !time.is_twelve_o_clock() {
        time.hour() % HOURS_PER_HALF_DAY
    } else if !is_end {
        0
    } else if !is_pm {
        return (HOURS_PER_DAY, 0);
    } else {
        HOURS_PER_HALF_DAY
    };
    let hour = if is_pm { hour + HOURS_PER_HALF_DAY } else { hour };
    (hour, time.minute())
}

/// Add the interval `start..end` to `total`.
///
/// An end that reads earlier than its start is taken to be on the next
/// day. Both times are expected to come from `format_time`; no validation
/// happens here. Hours saturate at `u32::MAX`.
pub fn accumulate(
    total: RunningTotal,
    start: ClockTime,
    start_is_pm: bool,
    end: ClockTime,
    end_is_pm: bool,
) -> RunningTotal {
    let (start_hour, start_minute) = dial_position(start, false, start_is_pm);
    let (end_hour, end_minute) = dial_position(end, true, end_is_pm);

    let crosses_midnight =
        start_hour > end_hour || (start_hour == end_hour && start_minute > end_minute);
    let mut hours = if crosses_midnight {
        end_hour + HOURS_PER_DAY - start_hour
    } else {
        end_hour - start_hour
    };

    let mut minutes = if start_minute > end_minute {
        hours -= 1;
        end_minute + MINUTES_PER_HOUR - start_minute
    } else {
        end_minute - start_minute
    };

    debug!(
        "Interval {:02}:{:02} -> {:02}:{:02} adds {}h {:02}m",
        start_hour, start_minute, end_hour, end_minute, hours, minutes
    );

    hours = hours.saturating_add(total.hours);
    minutes = minutes.saturating_add(total.minutes);

    if minutes >= MINUTES_PER_HOUR {
        hours = hours.saturating_add(minutes / MINUTES_PER_HOUR);
        minutes %= MINUTES_PER_HOUR;
    }

    RunningTotal { hours, minutes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::format_time;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn t(raw: &str) -> ClockTime {
        format_time(raw).unwrap()
    }

    #[test_case((2, 17), "1015", false, "0230", true, (6, 32) ; "morning to afternoon with carried total")]
    #[test_case((0, 0), "1200", false, "1200", false, (24, 0) ; "midnight to midnight is a full day")]
    #[test_case((0, 0), "1200", true, "1200", false, (12, 0) ; "noon to midnight")]
    #[test_case((0, 0), "1130", true, "0200", false, (2, 30) ; "overnight shift")]
    #[test_case((0, 35), "0200", true, "0235", true, (1, 10) ; "carried minutes fold into hours")]
    #[test_case((0, 0), "0900", false, "0500", true, (8, 0) ; "nine to five")]
    #[test_case((0, 0), "0115", false, "0632", false, (5, 17) ; "same half day")]
    #[test_case((0, 0), "0900", false, "1200", true, (15, 0) ; "end at twelve pm takes the pm offset")]
    #[test_case((0, 0), "1200", false, "1200", true, (24, 0) ; "twelve am to twelve pm")]
    #[test_case((0, 0), "1200", true, "1200", true, (12, 0) ; "twelve pm to twelve pm")]
    #[test_case((0, 0), "1100", false, "1145", false, (0, 45) ; "within the morning")]
    #[test_case((0, 0), "0230", false, "0215", false, (23, 45) ; "same hour wraps past midnight")]
    #[test_case((0, 0), "0800", false, "0800", false, (0, 0) ; "empty interval")]
    #[test_case((10, 0), "1045", true, "0115", false, (12, 30) ; "overnight with minute borrow")]
    fn test_accumulate(
        total: (u32, u32),
        start: &str,
        start_is_pm: bool,
        end: &str,
        end_is_pm: bool,
        expected: (u32, u32),
    ) {
        let result = accumulate(total.into(), t(start), start_is_pm, t(end), end_is_pm);
        assert_eq!(result, RunningTotal::from(expected));
    }

    #[test]
    fn test_accumulate_past_noon_token() {
        let start = t("1200");
        let end = ClockTime::new_unchecked(12, 15);
        assert_eq!(
            accumulate(RunningTotal::default(), start, true, end, true),
            RunningTotal::new(0, 15)
        );
    }

    #[test]
    fn test_minutes_stay_below_an_hour() {
        let mut total = RunningTotal::default();
        for hour in 1..=12 {
            for minute in (0..60).step_by(7) {
                let start = ClockTime::new_unchecked(hour, minute);
                let end = ClockTime::new_unchecked(13 - hour, 59 - minute);
                for (start_is_pm, end_is_pm) in
                    [(false, false), (false, true), (true, false), (true, true)]
                {
                    total = accumulate(total, start, start_is_pm, end, end_is_pm);
                    assert!(total.minutes < 60, "minutes overflowed: {:?}", total);
                }
            }
        }
    }

    #[test]
    fn test_order_of_days_does_not_matter() {
        let days = [
            (t("0815"), false, t("1145"), true),
            (t("1130"), true, t("0200"), false),
            (t("0959"), false, t("1001"), false),
            (t("1200"), false, t("1200"), false),
            (t("0405"), true, t("0350"), true),
        ];

        let forward = days
            .iter()
            .fold(RunningTotal::default(), |acc, &(s, sp, e, ep)| accumulate(acc, s, sp, e, ep));
        let backward = days
            .iter()
            .rev()
            .fold(RunningTotal::default(), |acc, &(s, sp, e, ep)| accumulate(acc, s, sp, e, ep));
        assert_eq!(forward, backward);

        let separate: u64 = days
            .iter()
            .map(|&(s, sp, e, ep)| accumulate(RunningTotal::default(), s, sp, e, ep).total_minutes())
            .sum();
        assert_eq!(forward.total_minutes(), separate);
    }

    #[test]
    fn test_unnormalized_incoming_minutes_are_folded() {
        let total = RunningTotal::new(1, 125);
        let result = accumulate(total, t("0100"), false, t("0100"), false);
        assert_eq!(result, RunningTotal::new(3, 5));
    }

    #[test]
    fn test_hours_saturate_instead_of_overflowing() {
        let total = RunningTotal::new(u32::MAX, 50);
        let result = accumulate(total, t("0100"), false, t("0130"), false);
        assert_eq!(result, RunningTotal::new(u32::MAX, 20));

        let total = RunningTotal::new(u32::MAX - 1, 0);
        let result = accumulate(total, t("0100"), false, t("0300"), false);
        assert_eq!(result, RunningTotal::new(u32::MAX, 0));
    }

    #[test]
    fn test_running_total_display() {
        assert_eq!(RunningTotal::new(7, 5).to_string(), "7h 05m");
        assert_eq!(RunningTotal::new(7, 29).total_minutes(), 449);
    }
}
