//! Cron expression parser and next-occurrence calculator.
#![deny(unsafe_code, warnings, missing_docs)]

//! This crate is intended to:
//! - parse cron schedule expressions with exact error locations;
//! - calculate the next time which satisfies the schedule, strictly after provided instant.
//!
//! Calendar math is delegated to [chrono](https://crates.io/crates/chrono), so any chrono timezone may be used.
//!
//! _This is not a cron jobs scheduler or runner._ Nothing is executed and nothing is tracked,
//! the crate answers a single question: "when is the next event?".
//!
//! ## Cron schedule format
//!
//! Traditionally, cron schedule expression has a 5-fields format: minutes, hours, days, months and days of week.
//! Two optional fields may be added, seconds (the first one) and years (the last one),
//! [`Options`] define which of them are present:
//! - if _seconds_ is absent, `0` is used;
//! - if _years_ is absent, any year matches.
//!
//! The table below describes valid values and patterns of each field:
//!
//! | Field        | Required | Allowed values        | Allowed special characters |
//! |--------------|----------|-----------------------|----------------------------|
//! | Seconds      | No       | 0-59                  | * , - /                    |
//! | Minutes      | Yes      | 0-59                  | * , - /                    |
//! | Hours        | Yes      | 0-23                  | * , - /                    |
//! | Day of Month | Yes      | 1-31                  | * , - / L                  |
//! | Month        | Yes      | 1-12 or JAN-DEC       | * , - /                    |
//! | Day of Week  | Yes      | 0-7 or SUN-SAT        | * , - /                    |
//! | Year         | No       | 2000-2063             | * , - /                    |
//!
//! Patterns meanings:
//! - `*` - each possible value, i.e. `0,1,2,...,59` for minutes;
//! - `,` - list of values or patterns, i.e. `1,7,12`, `SUN,FRI`;
//! - `-` - range of values, i.e. `0-15`, `JAN-MAR`; the upper bound can't be less than the lower one;
//! - `/` - repeating values of `*` or a range, i.e. `*/12`, `30-59/2`; a single value can't have a step;
//! - `L` - last day of the month, whatever its length.
//!
//! Names are case-insensitive and always three letters long. Day of week `7` is Sunday, as `0` is.
//!
//! If both day of month and day of week are restricted (none of them is `*`), a day matches if it
//! satisfies either of them. Otherwise, it has to satisfy both, so `*` is effectively ignored.
//!
//! An expression which can never match a calendar date, like `0 0 30 FEB *`, is rejected.
//!
//! ## How to use
//!
//! The central entity of the crate is a [`Schedule`] structure:
//! - [parse()](Schedule::parse): parses and validates an expression with explicit [`Options`];
//! - [new()](Schedule::new): same, options are inferred from the number of fields (5, 6 or 7);
//! - [next_after()](Schedule::next_after): returns time of the next event, strictly after the provided instant;
//! - [iter()](Schedule::iter): returns an `Iterator` which produces a series of events according to the schedule.
//!
//! [`ScheduleSet`] picks the earliest event of several schedules.
//!
//! ### Example with `next_after`
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use cron_calc::{Result, Schedule};
//!
//! fn next_after() -> Result<()> {
//!     let schedule = Schedule::new("10 7 L * *")?;
//!     let after = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
//!
//!     // The last day of the month, at 07:10
//!     let next = schedule.next_after(&after);
//!     assert_eq!(next, Some(Utc.with_ymd_and_hms(2020, 1, 31, 7, 10, 0).unwrap()));
//!
//!     Ok(())
//! }
//! # next_after().unwrap();
//! ```
//!
//! ### Example with `iter`
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use cron_calc::{Options, Result, Schedule};
//!
//! fn iterator() -> Result<()> {
//!     let schedule = Schedule::parse("*/20 * * * * *", Options::DEFAULT.with_seconds(true))?;
//!     let after = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
//!
//!     // Get the next 10 timestamps
//!     schedule.iter(&after).take(10).for_each(|t| println!("next: {t}"));
//!
//!     Ok(())
//! }
//! # iterator().unwrap();
//! ```
//!
//! ### Errors
//! Every error carries the byte offset of the character which made parsing fail:
//! ```rust
//! use cron_calc::{CronError, Schedule};
//!
//! let error = Schedule::new("* * * M *").unwrap_err();
//! assert_eq!(error, CronError::InvalidName(6));
//! assert_eq!(error.caret("* * * M *"), "error: invalid name at offset 6\n  * * * M *\n        ^");
//! ```
//!
//! # Feature flags
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html) and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html) trait implementation for [`Schedule`] and [`Options`].

/// Broken-down calendar time.
pub mod civil;
/// Crate specific Error implementation.
pub mod error;
/// Schedule fields and sets of their values.
pub mod field;
mod pattern;
/// Cron schedule parser and next event calculator.
pub mod schedule;
/// Earliest event of several schedules.
pub mod set;
mod utils;

// Re-export of public entities.
pub use civil::CivilTime;
pub use error::{CronError, ErrorKind};
pub use field::{Field, FieldSet, YEAR_BASE, YEAR_MAX};
pub use schedule::{Options, Schedule};
pub use set::ScheduleSet;

/// Convenient alias for `Result`.
pub type Result<T, E = CronError> = std::result::Result<T, E>;
