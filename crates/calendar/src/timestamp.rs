//! Calendar timestamp and its field range checks.

use crate::error::TimeError;

/// First calendar year the engine converts.
pub const MIN_YEAR: i32 = 1970;

/// Last calendar year the engine converts.
pub const MAX_YEAR: i32 = 2033;

/// Number of supported years, one boundary-cache slot per year.
pub const YEAR_SLOTS: usize = (MAX_YEAR - MIN_YEAR + 1) as usize;

/// A broken-down UTC timestamp.
///
/// `month` is 0-based (0 = January). All other fields use their natural
/// calendar numbering. Values are stored as given; use
/// [`CalendarTimestamp::validate`] before converting.
///
/// `second` may be 60. It is accepted but treated as an ordinary offset of
/// 60 seconds into the minute, so `12:00:60` encodes to the same epoch as
/// `12:01:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CalendarTimestamp {
    /// Calendar year, `MIN_YEAR..=MAX_YEAR`.
    pub year: i32,
    /// Month, `0..=11`.
    pub month: i32,
    /// Day of month, `1..=31`.
    pub day: i32,
    /// Hour, `0..=23`.
    pub hour: i32,
    /// Minute, `0..=59`.
    pub minute: i32,
    /// Second, `0..=60`.
    pub second: i32,
}

impl CalendarTimestamp {
    /// Creates a timestamp from its fields without checking them.
    pub fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Returns the offset of `year` from [`MIN_YEAR`].
    ///
    /// Only meaningful for a timestamp that passed [`validate`](Self::validate).
    pub(crate) fn year_offset(&self) -> usize {
        (self.year - MIN_YEAR) as usize
    }

    /// Checks every field against its closed range.
    ///
    /// The day is only checked against `1..=31`; overflow past the end of a
    /// shorter month is caught later by the encoder.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::FieldOutOfRange`] for the first field that fails.
    pub fn validate(&self) -> Result<(), TimeError> {
        check("year", self.year, MIN_YEAR, MAX_YEAR)?;
        check("month", self.month, 0, 11)?;
        check("day", self.day, 1, 31)?;
        check("hour", self.hour, 0, 23)?;
        check("minute", self.minute, 0, 59)?;
        check("second", self.second, 0, 60)?;
        Ok(())
    }

    /// Returns `true` if every field is within its range.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

fn check(field: &'static str, value: i32, min: i32, max: i32) -> Result<(), TimeError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(TimeError::FieldOutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
