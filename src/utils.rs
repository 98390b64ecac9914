//! Calendar helpers over the proleptic Gregorian calendar.

/// Returns `true` if provided year is leap.
#[inline]
pub(crate) fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Returns number of days in specified month.
///
/// Panics if month is out of 1..=12; callers validate it first.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => panic!("Invalid month: {month}"),
    }
}

/// Longest possible length of the month in any year.
pub(crate) fn max_days_in_month(month: u32) -> u32 {
    match month {
        2 => 29,
        _ => days_in_month(1, month),
    }
}

/// Calculates day of week for specified date, 0 is Sunday.
///
/// Panics on invalid date.
pub(crate) fn day_of_week(year: i32, month: u32, day: u32) -> u32 {
    if day == 0 || month == 0 || month > 12 || day > days_in_month(year, month) {
        panic!("Invalid date: {year:04}-{month:02}-{day:02}");
    }

    let month_offset: i64 = if is_leap_year(year) {
        [0, 3, 4, 0, 2, 5, 0, 3, 6, 1, 4, 6]
    } else {
        [0, 3, 3, 6, 1, 4, 6, 2, 5, 0, 3, 5]
    }[(month - 1) as usize];

    let year = year as i64 - 1;

    (day as i64 + month_offset + 5 * year.rem_euclid(4) + 4 * year.rem_euclid(100) + 6 * year.rem_euclid(400))
        .rem_euclid(7) as u32
}
