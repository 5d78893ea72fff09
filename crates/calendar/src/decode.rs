//! Epoch to calendar timestamp and fixed-width ISO-8601 rendering.

use std::fmt;

use tracing::{error, warn};

use crate::cache::YearBoundaryCache;
use crate::civil::{
    Epoch, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_YEAR,
    days_from_civil,
};
use crate::error::TimeError;
use crate::timestamp::{CalendarTimestamp, MAX_YEAR, YEAR_SLOTS};

/// Length of a rendered `YYYY-MM-DDTHH:MM:SSZ` string.
pub const ISO_UTC_LEN: usize = 20;

/// First epoch past the supported range (January 1 after [`MAX_YEAR`]).
pub const EPOCH_LIMIT: Epoch = days_from_civil(MAX_YEAR + 1, 1, 1) * SECONDS_PER_DAY;

const SECONDS_PER_LONG_MONTH: Epoch = 31 * SECONDS_PER_DAY;

/// Converts an epoch to a calendar timestamp.
///
/// The year is first estimated with 365-day years. That never undercounts,
/// so the table for the estimate either contains `epoch` or starts after it,
/// in which case the previous year is used. The month is then estimated
/// with 31-day months, which never overcounts and is off by at most one.
/// Day, hour and minute are peeled off the remainder in turn.
///
/// # Errors
///
/// - [`TimeError::NegativeEpoch`] if `epoch < 0`.
/// - [`TimeError::EpochOutOfRange`] if `epoch >= EPOCH_LIMIT`.
pub fn decode(cache: &YearBoundaryCache, epoch: Epoch) -> Result<CalendarTimestamp, TimeError> {
    if epoch < 0 {
        error!(epoch, "cannot decode a negative epoch");
        return Err(TimeError::NegativeEpoch { epoch });
    }
    if epoch >= EPOCH_LIMIT {
        error!(epoch, limit = EPOCH_LIMIT, "epoch past the supported range");
        return Err(TimeError::EpochOutOfRange {
            epoch,
            limit: EPOCH_LIMIT,
        });
    }

    let mut year_offset = ((epoch / SECONDS_PER_YEAR) as usize).min(YEAR_SLOTS - 1);
    let mut table = cache.ensure(year_offset)?;
    if table.year_start() > epoch {
        year_offset -= 1;
        table = cache.ensure(year_offset)?;
    }

    let mut month = ((epoch - table.year_start()) / SECONDS_PER_LONG_MONTH) as usize;
    if epoch >= table.month_start(month + 1) {
        month += 1;
    }

    let mut cursor = table.month_start(month);
    let day = take_units(epoch, &mut cursor, SECONDS_PER_DAY);
    let hour = take_units(epoch, &mut cursor, SECONDS_PER_HOUR);
    let minute = take_units(epoch, &mut cursor, SECONDS_PER_MINUTE);
    let second = (epoch - cursor) as i32;

    Ok(CalendarTimestamp::new(
        table.year(),
        month as i32,
        day + 1,
        hour,
        minute,
        second,
    ))
}

/// Renders `epoch` as `YYYY-MM-DDTHH:MM:SSZ` into the front of `buf`.
///
/// Returns the number of bytes written, always [`ISO_UTC_LEN`]. Nothing is
/// written on failure.
///
/// # Errors
///
/// - [`TimeError::NegativeEpoch`] / [`TimeError::EpochOutOfRange`] as for
///   [`decode`].
/// - [`TimeError::BufferTooSmall`] if `buf` is shorter than [`ISO_UTC_LEN`].
pub fn decode_into(
    cache: &YearBoundaryCache,
    epoch: Epoch,
    buf: &mut [u8],
) -> Result<usize, TimeError> {
    if epoch < 0 {
        error!(epoch, "cannot decode a negative epoch");
        return Err(TimeError::NegativeEpoch { epoch });
    }
    let capacity = buf.len();
    let Some(out) = buf.first_chunk_mut::<ISO_UTC_LEN>() else {
        warn!(capacity, required = ISO_UTC_LEN, "output buffer too small");
        return Err(TimeError::BufferTooSmall {
            capacity,
            required: ISO_UTC_LEN,
        });
    };
    let ts = decode(cache, epoch)?;
    render(&ts, out);
    Ok(ISO_UTC_LEN)
}

/// Writes the fixed-width form of an already decoded timestamp.
fn render(ts: &CalendarTimestamp, out: &mut [u8; ISO_UTC_LEN]) {
    put_digits(&mut out[0..4], ts.year);
    out[4] = b'-';
    put_digits(&mut out[5..7], ts.month + 1);
    out[7] = b'-';
    put_digits(&mut out[8..10], ts.day);
    out[10] = b'T';
    put_digits(&mut out[11..13], ts.hour);
    out[13] = b':';
    put_digits(&mut out[14..16], ts.minute);
    out[16] = b':';
    put_digits(&mut out[17..19], ts.second);
    out[19] = b'Z';
}

/// Fills `dst` with the low decimal digits of `value`, zero-padded.
fn put_digits(dst: &mut [u8], value: i32) {
    let mut rest = value.unsigned_abs();
    for byte in dst.iter_mut().rev() {
        *byte = b'0' + (rest % 10) as u8;
        rest /= 10;
    }
}

/// Counts whole `unit`s between `cursor` and `epoch` and advances `cursor`
/// past them.
fn take_units(epoch: Epoch, cursor: &mut Epoch, unit: Epoch) -> i32 {
    let n = (epoch - *cursor) / unit;
    *cursor += n * unit;
    n as i32
}

/// Formats as `YYYY-MM-DDTHH:MM:SSZ` with a 1-based month.
impl fmt::Display for CalendarTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year,
            self.month + 1,
            self.day,
            self.hour,
            self.minute,
            self.second
        )
    }
}
