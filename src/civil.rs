use crate::utils;
use chrono::{DateTime, Datelike, LocalResult, TimeZone, Timelike};
use std::fmt::Display;

/// Broken-down calendar time, the search works over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilTime {
    /// Absolute year, e.g. 2019.
    pub year: i32,
    /// Month, 1-12.
    pub month: u32,
    /// Day of month, 1-31.
    pub day: u32,
    /// Hour, 0-23.
    pub hour: u32,
    /// Minute, 0-59.
    pub minute: u32,
    /// Second, 0-59.
    pub second: u32,
    /// Day of week, 0-6, 0 is Sunday.
    pub weekday: u32,
}

impl CivilTime {
    /// Constructs a civil time, the weekday is derived from the date.
    ///
    /// Returns `None` if any of the values is out of its range.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Option<Self> {
        if !(1..=12).contains(&month)
            || day == 0
            || day > utils::days_in_month(year, month)
            || hour > 23
            || minute > 59
            || second > 59
        {
            return None;
        }

        Some(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            weekday: utils::day_of_week(year, month, day),
        })
    }

    /// Breaks down provided instant in its own timezone, sub-second part is dropped.
    pub fn from_datetime<Tz: TimeZone>(value: &DateTime<Tz>) -> Self {
        Self {
            year: value.year(),
            month: value.month(),
            day: value.day(),
            hour: value.hour(),
            minute: value.minute(),
            second: value.second(),
            weekday: value.weekday().num_days_from_sunday(),
        }
    }

    /// Converts civil time back to an instant in the `tz` timezone.
    ///
    /// If the local time is ambiguous (clocks were turned back), the earliest instant after `after`
    /// is taken. Returns `None` if the local time doesn't exist in the timezone or isn't representable.
    pub fn to_datetime_after<Tz: TimeZone>(&self, tz: &Tz, after: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        let local = tz.with_ymd_and_hms(self.year, self.month, self.day, self.hour, self.minute, self.second);
        let result = match local {
            LocalResult::Single(value) => Some(value),
            LocalResult::Ambiguous(earliest, latest) => {
                if earliest > *after {
                    Some(earliest)
                } else {
                    Some(latest)
                }
            }
            LocalResult::None => None,
        };

        result.filter(|value| value > after)
    }

    /// Returns `true` if this is the last day of the month.
    #[inline]
    pub fn is_last_day_of_month(&self) -> bool {
        (1..=12).contains(&self.month) && self.day == utils::days_in_month(self.year, self.month)
    }
}

impl Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
