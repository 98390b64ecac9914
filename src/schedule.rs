use crate::{
    civil::CivilTime,
    field::{Field, FieldSet, YEAR_BASE, YEAR_MAX},
    pattern, utils, CronError, Result,
};
use chrono::{DateTime, SubsecRound, TimeDelta, TimeZone, Utc};
use std::{fmt::Display, str::FromStr};

/// The Gregorian calendar repeats itself every 400 years, so a schedule without years
/// which doesn't match within this horizon never matches.
const SEARCH_YEARS: i32 = 400;

/// Parser options: which optional fields are present in the expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    /// Expression starts with the seconds field.
    pub with_seconds: bool,
    /// Expression ends with the years field.
    pub with_years: bool,
    /// Trailing fields may be omitted, each of them is `*`.
    pub assume_star: bool,
}

impl Options {
    /// Classic five fields expression.
    pub const DEFAULT: Self = Self {
        with_seconds: false,
        with_years: false,
        assume_star: false,
    };

    /// Seven fields expression, with seconds and years.
    pub const FULL: Self = Self {
        with_seconds: true,
        with_years: true,
        assume_star: false,
    };

    /// Sets the `with_seconds` flag.
    pub const fn with_seconds(mut self, value: bool) -> Self {
        self.with_seconds = value;
        self
    }

    /// Sets the `with_years` flag.
    pub const fn with_years(mut self, value: bool) -> Self {
        self.with_years = value;
        self
    }

    /// Sets the `assume_star` flag.
    pub const fn with_assume_star(mut self, value: bool) -> Self {
        self.assume_star = value;
        self
    }
}

/// Parsed cron schedule, immutable once built.
///
/// For the expression format and usage examples, please refer to the [crate documentation](crate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SerdeSchedule"))]
#[cfg_attr(feature = "serde", serde(into = "SerdeSchedule"))]
pub struct Schedule {
    seconds: FieldSet,
    minutes: FieldSet,
    hours: FieldSet,
    days: FieldSet,
    months: FieldSet,
    weekdays: FieldSet,
    years: FieldSet,
    with_seconds: bool,
    with_years: bool,
    days_starred: bool,
    weekdays_starred: bool,
}

/// Levels of the search below the year, from the most significant one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl Level {
    fn next(self) -> Option<Self> {
        match self {
            Self::Month => Some(Self::Day),
            Self::Day => Some(Self::Hour),
            Self::Hour => Some(Self::Minute),
            Self::Minute => Some(Self::Second),
            Self::Second => None,
        }
    }

    fn get(self, time: &CivilTime) -> u32 {
        match self {
            Self::Month => time.month,
            Self::Day => time.day,
            Self::Hour => time.hour,
            Self::Minute => time.minute,
            Self::Second => time.second,
        }
    }

    fn set(self, time: &mut CivilTime, value: u32) {
        match self {
            Self::Month => time.month = value,
            Self::Day => time.day = value,
            Self::Hour => time.hour = value,
            Self::Minute => time.minute = value,
            Self::Second => time.second = value,
        }
    }
}

impl Schedule {
    /// Parses and validates provided `expression` with explicit `options`.
    ///
    /// Returns [`CronError`] with the offset of the failing character if the expression is invalid.
    pub fn parse(expression: &str, options: Options) -> Result<Self> {
        pattern::parse(expression, options).inspect_err(|error| {
            log::debug!(
                "unable to parse {expression:?} ({options:?}): {:?} at offset {}",
                error.kind(),
                error.offset()
            );
        })
    }

    /// Parses provided `expression`, options are inferred from the number of fields:
    /// five fields is the classic expression, six fields start with seconds and seven fields
    /// have seconds and years.
    ///
    /// Alternative way to construct [`Schedule`] is to use one of `try_from` or `from_str` methods.
    pub fn new(expression: impl AsRef<str>) -> Result<Self> {
        let expression = expression.as_ref();
        let options = match expression.split_whitespace().count() {
            6 => Options::DEFAULT.with_seconds(true),
            7 => Options::FULL,
            _ => Options::DEFAULT,
        };
        Self::parse(expression, options)
    }

    pub(crate) fn from_parts(
        values: [FieldSet; 7],
        options: Options,
        days_starred: bool,
        weekdays_starred: bool,
    ) -> Self {
        Self {
            seconds: values[Field::Seconds as usize],
            minutes: values[Field::Minutes as usize],
            hours: values[Field::Hours as usize],
            days: values[Field::Days as usize],
            months: values[Field::Months as usize],
            weekdays: values[Field::Weekdays as usize],
            years: values[Field::Years as usize],
            with_seconds: options.with_seconds,
            with_years: options.with_years,
            days_starred,
            weekdays_starred,
        }
    }

    /// Allowed seconds, `{0}` if the seconds field is absent.
    pub fn seconds(&self) -> FieldSet {
        self.seconds
    }

    /// Allowed minutes.
    pub fn minutes(&self) -> FieldSet {
        self.minutes
    }

    /// Allowed hours.
    pub fn hours(&self) -> FieldSet {
        self.hours
    }

    /// Allowed days of month, bit 0 is the last day of month.
    pub fn days(&self) -> FieldSet {
        self.days
    }

    /// Allowed months.
    pub fn months(&self) -> FieldSet {
        self.months
    }

    /// Allowed days of week, 0 is Sunday.
    pub fn weekdays(&self) -> FieldSet {
        self.weekdays
    }

    /// Allowed years as offsets from [`YEAR_BASE`], `None` if the years field is absent.
    pub fn years(&self) -> Option<FieldSet> {
        self.with_years.then_some(self.years)
    }

    /// Layout of the expression the schedule was parsed from.
    ///
    /// `assume_star` isn't kept: defaulted fields are indistinguishable from `*`.
    pub fn options(&self) -> Options {
        Options::DEFAULT
            .with_seconds(self.with_seconds)
            .with_years(self.with_years)
    }

    /// Returns `true` if the day of month field has `L`.
    pub fn matches_last_day(&self) -> bool {
        self.days.contains(0)
    }

    /// Returns `true` if the day of month field is exactly `*`.
    pub fn day_of_month_starred(&self) -> bool {
        self.days_starred
    }

    /// Returns `true` if the day of week field is exactly `*`.
    pub fn day_of_week_starred(&self) -> bool {
        self.weekdays_starred
    }

    /// Returns `true` if provided civil time satisfies every field of the schedule.
    ///
    /// The `weekday` of `time` is trusted as is.
    pub fn matches(&self, time: &CivilTime) -> bool {
        self.year_matches(time.year)
            && has(self.months, time.month)
            && (1..=utils::days_in_month(time.year, time.month)).contains(&time.day)
            && self.day_matches(time)
            && has(self.hours, time.hour)
            && has(self.minutes, time.minute)
            && has(self.seconds, time.second)
    }

    /// Returns time of the next event strictly after `after`, in the timezone of `after`.
    ///
    /// Sub-second part of `after` is dropped before the search.
    /// Returns `None` if the schedule never matches after `after`, or if the matched local
    /// time doesn't exist in the timezone.
    pub fn next_after<Tz: TimeZone>(&self, after: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        // on the instant, local time may be ambiguous
        let start = after
            .clone()
            .trunc_subsecs(0)
            .checked_add_signed(TimeDelta::seconds(1))?;
        let found = self.next_civil(CivilTime::from_datetime(&start))?;

        let next = found.to_datetime_after(&after.timezone(), after);
        if next.is_none() {
            log::trace!("{found} isn't representable after {after:?}");
        }
        next
    }

    /// Same as [`Schedule::next_after`] but over Unix timestamps in UTC.
    pub fn next_timestamp(&self, after: i64) -> Option<i64> {
        let after = DateTime::<Utc>::from_timestamp(after, 0)?;
        self.next_after(&after).map(|next| next.timestamp())
    }

    /// Returns iterator of events strictly after `after`.
    #[inline]
    pub fn iter<Tz: TimeZone>(&self, after: &DateTime<Tz>) -> impl Iterator<Item = DateTime<Tz>> {
        ScheduleIterator {
            schedule: *self,
            next: self.next_after(after),
        }
    }

    /// Consumes [`Schedule`] and returns iterator of events strictly after `after`.
    #[inline]
    pub fn into_iter<Tz: TimeZone>(self, after: &DateTime<Tz>) -> impl Iterator<Item = DateTime<Tz>> {
        let next = self.next_after(after);
        ScheduleIterator { schedule: self, next }
    }

    /// The smallest matching civil time which is not less than `start`.
    fn next_civil(&self, start: CivilTime) -> Option<CivilTime> {
        if self.seconds.is_empty()
            || self.minutes.is_empty()
            || self.hours.is_empty()
            || self.days.is_empty()
            || self.months.is_empty()
            || self.weekdays.is_empty()
            || (self.with_years && self.years.is_empty())
        {
            return None;
        }

        let (first_year, last_year) = if self.with_years {
            (start.year.max(YEAR_BASE as i32), YEAR_MAX as i32)
        } else {
            (start.year, start.year.saturating_add(SEARCH_YEARS))
        };

        let mut time = start;
        let mut rollover = first_year != start.year;
        for year in first_year..=last_year {
            if self.year_matches(year) {
                time.year = year;
                if self.search(&mut time, Level::Month, rollover) {
                    return Some(time);
                }
            }
            rollover = true;
        }

        log::trace!("no match from {start} up to year {last_year}");
        None
    }

    /// Looks for the first accepted value of the `level` and all levels below it.
    ///
    /// Starts from the current value of the level unless `rollover` is set,
    /// then every level starts from its minimum.
    fn search(&self, time: &mut CivilTime, level: Level, mut rollover: bool) -> bool {
        let (min, max) = match level {
            Level::Month => (1, 12),
            Level::Day => (1, utils::days_in_month(time.year, time.month)),
            Level::Hour => (0, 23),
            Level::Minute | Level::Second => (0, 59),
        };
        let first = if rollover { min } else { level.get(time) };
        if first > max {
            return false;
        }
        if level == Level::Day {
            time.weekday = utils::day_of_week(time.year, time.month, first);
        }

        for value in first..=max {
            level.set(time, value);
            if self.accepts(time, level) {
                match level.next() {
                    None => return true,
                    Some(next) if self.search(time, next, rollover) => return true,
                    Some(_) => {}
                }
            }
            rollover = true;
            if level == Level::Day {
                time.weekday = (time.weekday + 1) % 7;
            }
        }

        false
    }

    fn accepts(&self, time: &CivilTime, level: Level) -> bool {
        match level {
            Level::Month => has(self.months, time.month),
            Level::Day => self.day_matches(time),
            Level::Hour => has(self.hours, time.hour),
            Level::Minute => has(self.minutes, time.minute),
            Level::Second => has(self.seconds, time.second),
        }
    }

    fn year_matches(&self, year: i32) -> bool {
        if !self.with_years {
            return true;
        }
        (YEAR_BASE as i32..=YEAR_MAX as i32).contains(&year)
            && self.years.contains(Field::Years.bit(year as u16))
    }

    /// If both day fields are explicit the day matches either of them, otherwise it has to match both.
    fn day_matches(&self, time: &CivilTime) -> bool {
        let by_day = has(self.days, time.day) || (self.matches_last_day() && time.is_last_day_of_month());
        let by_weekday = has(self.weekdays, time.weekday);

        if self.days_starred || self.weekdays_starred {
            by_day && by_weekday
        } else {
            by_day || by_weekday
        }
    }
}

#[inline]
fn has(set: FieldSet, value: u32) -> bool {
    u16::try_from(value).is_ok_and(|bit| set.contains(bit))
}

/// Contains iterator state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ScheduleIterator<Tz: TimeZone> {
    schedule: Schedule,
    next: Option<DateTime<Tz>>,
}

impl<Tz: TimeZone> Iterator for ScheduleIterator<Tz> {
    type Item = DateTime<Tz>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = self.schedule.next_after(&current);
        Some(current)
    }
}

/// Renders values of the field as a comma separated list with `a-b` runs.
fn format_values(field: Field, set: FieldSet) -> String {
    let mut items = Vec::new();
    let mut values = set
        .iter()
        .filter(|bit| field != Field::Days || *bit > 0)
        .map(|bit| field.value(bit))
        .peekable();

    while let Some(first) = values.next() {
        let mut last = first;
        while values.peek() == Some(&(last + 1)) {
            last += 1;
            values.next();
        }
        if first == last {
            items.push(first.to_string());
        } else {
            items.push(format!("{first}-{last}"));
        }
    }

    if field == Field::Days && set.contains(0) {
        items.push("L".to_string());
    }

    items.join(",")
}

impl Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let plain = |field: Field, set: FieldSet| {
            if set == field.full() {
                "*".to_string()
            } else {
                format_values(field, set)
            }
        };
        let starred = |field: Field, set: FieldSet, is_star: bool| {
            if is_star {
                "*".to_string()
            } else {
                format_values(field, set)
            }
        };

        let mut fields = Vec::with_capacity(7);
        if self.with_seconds {
            fields.push(plain(Field::Seconds, self.seconds));
        }
        fields.push(plain(Field::Minutes, self.minutes));
        fields.push(plain(Field::Hours, self.hours));
        fields.push(starred(Field::Days, self.days, self.days_starred));
        fields.push(plain(Field::Months, self.months));
        fields.push(starred(Field::Weekdays, self.weekdays, self.weekdays_starred));
        if self.with_years {
            fields.push(plain(Field::Years, self.years));
        }

        write!(f, "{}", fields.join(" "))
    }
}

impl From<Schedule> for String {
    fn from(value: Schedule) -> Self {
        value.to_string()
    }
}

impl From<&Schedule> for String {
    fn from(value: &Schedule) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Schedule {
    type Error = CronError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&String> for Schedule {
    type Error = CronError;

    fn try_from(value: &String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Schedule {
    type Error = CronError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for Schedule {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Serialized form of the [`Schedule`]: canonical expression and its layout.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct SerdeSchedule {
    expression: String,
    #[serde(default)]
    with_seconds: bool,
    #[serde(default)]
    with_years: bool,
}

#[cfg(feature = "serde")]
impl From<Schedule> for SerdeSchedule {
    fn from(value: Schedule) -> Self {
        Self {
            expression: value.to_string(),
            with_seconds: value.with_seconds,
            with_years: value.with_years,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<SerdeSchedule> for Schedule {
    type Error = CronError;

    fn try_from(value: SerdeSchedule) -> Result<Self> {
        let options = Options::DEFAULT
            .with_seconds(value.with_seconds)
            .with_years(value.with_years);
        Self::parse(&value.expression, options)
    }
}
