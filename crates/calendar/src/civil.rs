//! Proleptic Gregorian civil date to epoch arithmetic.

/// Seconds since 1970-01-01T00:00:00Z.
pub type Epoch = i64;

/// Seconds in a minute.
pub const SECONDS_PER_MINUTE: Epoch = 60;

/// Seconds in an hour.
pub const SECONDS_PER_HOUR: Epoch = 60 * SECONDS_PER_MINUTE;

/// Seconds in a day. Leap seconds are not modelled.
pub const SECONDS_PER_DAY: Epoch = 24 * SECONDS_PER_HOUR;

/// Seconds in a 365-day year.
pub const SECONDS_PER_YEAR: Epoch = 365 * SECONDS_PER_DAY;

/// Days from 1970-01-01 to `year-month-day`, with `month` in `1..=12`.
///
/// Howard Hinnant's `days_from_civil`, which shifts the year to start in
/// March so the leap day is the last day of the shifted year.
/// See <https://howardhinnant.github.io/date_algorithms.html#days_from_civil>.
pub(crate) const fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year } as i64;
    let mp = if month <= 2 { month + 9 } else { month - 3 } as i64;

    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400; // [0, 399]
    let doy = (153 * mp + 2) / 5 + day as i64 - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]

    era * 146_097 + doe - 719_468
}

/// Epoch of `00:00:00` on the first day of a month.
///
/// `month` is 0-based; `month == 12` means January of the following year.
pub(crate) fn month_start(year: i32, month: u32) -> Epoch {
    let (year, month) = if month >= 12 {
        (year + (month / 12) as i32, month % 12)
    } else {
        (year, month)
    };
    days_from_civil(year, month + 1, 1) * SECONDS_PER_DAY
}

/// Returns `true` for Gregorian leap years.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
