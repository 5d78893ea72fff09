//! Calendar timestamp to epoch.

use tracing::error;

use crate::cache::YearBoundaryCache;
use crate::civil::{Epoch, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::error::TimeError;
use crate::timestamp::CalendarTimestamp;

/// Converts a calendar timestamp to seconds since the Unix epoch.
///
/// The month start comes from the year's boundary table; day and time of
/// day are added as plain offsets. A day that does not exist in the month
/// (February 30, April 31, February 29 outside leap years) pushes the
/// result past the next month's start and is rejected there, so no
/// days-per-month table is consulted.
///
/// # Errors
///
/// - [`TimeError::FieldOutOfRange`] if any field fails validation.
/// - [`TimeError::MonthOverflow`] if the result lands at or after the start
///   of the following month.
pub fn encode(cache: &YearBoundaryCache, ts: &CalendarTimestamp) -> Result<Epoch, TimeError> {
    if let Err(e) = ts.validate() {
        error!(?ts, error = %e, "invalid timestamp");
        return Err(e);
    }

    let table = cache.ensure(ts.year_offset())?;
    let month = ts.month as usize;

    let epoch = table.month_start(month)
        + Epoch::from(ts.day - 1) * SECONDS_PER_DAY
        + Epoch::from(ts.hour) * SECONDS_PER_HOUR
        + Epoch::from(ts.minute) * SECONDS_PER_MINUTE
        + Epoch::from(ts.second);

    if epoch >= table.month_start(month + 1) {
        let e = TimeError::MonthOverflow {
            year: ts.year,
            month: ts.month,
            day: ts.day,
        };
        error!(?ts, error = %e, "invalid timestamp");
        return Err(e);
    }

    Ok(epoch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enc(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
    ) -> Result<Epoch, TimeError> {
        let cache = YearBoundaryCache::new();
        let ts = CalendarTimestamp::new(year, month, day, hour, minute, second);
        encode(&cache, &ts)
    }

    #[test]
    fn unix_epoch() {
        assert_eq!(enc(1970, 0, 1, 0, 0, 0).unwrap(), 0);
    }

    #[test]
    fn known_instants() {
        assert_eq!(enc(2000, 0, 1, 0, 0, 0).unwrap(), 946_684_800);
        assert_eq!(enc(2001, 8, 9, 1, 46, 40).unwrap(), 1_000_000_000);
        assert_eq!(enc(2033, 4, 18, 3, 33, 20).unwrap(), 2_000_000_000);
    }

    #[test]
    fn feb_29_leap_and_common() {
        assert!(enc(2020, 1, 29, 12, 0, 0).is_ok());
        assert_eq!(
            enc(2021, 1, 29, 0, 0, 0).unwrap_err(),
            TimeError::MonthOverflow {
                year: 2021,
                month: 1,
                day: 29,
            }
        );
    }

    #[test]
    fn day_31_in_30_day_month() {
        assert!(matches!(
            enc(2021, 3, 31, 0, 0, 0),
            Err(TimeError::MonthOverflow { month: 3, day: 31, .. })
        ));
        assert!(enc(2021, 2, 31, 23, 59, 59).is_ok());
    }

    #[test]
    fn last_second_of_month() {
        let last = enc(2021, 1, 28, 23, 59, 59).unwrap();
        let next = enc(2021, 2, 1, 0, 0, 0).unwrap();
        assert_eq!(last + 1, next);
    }

    #[test]
    fn second_60_is_plain_offset() {
        assert_eq!(
            enc(2010, 5, 15, 12, 0, 60).unwrap(),
            enc(2010, 5, 15, 12, 1, 0).unwrap()
        );
        // Spilling past the month end is still rejected.
        assert!(matches!(
            enc(2010, 5, 30, 23, 59, 60),
            Err(TimeError::MonthOverflow { .. })
        ));
    }

    #[test]
    fn invalid_fields_rejected_before_cache() {
        let cache = YearBoundaryCache::new();
        let ts = CalendarTimestamp::new(2040, 0, 1, 0, 0, 0);
        assert!(matches!(
            encode(&cache, &ts),
            Err(TimeError::FieldOutOfRange { field: "year", .. })
        ));
        assert_eq!(cache.builds(), 0);
    }

    #[test]
    fn last_supported_second() {
        assert_eq!(enc(2033, 11, 31, 23, 59, 59).unwrap(), 2_019_686_399);
    }
}
