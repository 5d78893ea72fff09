//! Strict fixed-position parser for `YYYY-MM-DDTHH:MM:SS`.
//!
//! The layout is fixed: separators sit at known byte offsets and every other
//! byte of the 19-byte core must be an ASCII digit. Nothing is inferred and
//! nothing after offset 19 is read, so a trailing `Z` (or anything else) is
//! ignored rather than interpreted as a zone designator.

use std::ops::Range;

use tracing::error;

use crate::cache::YearBoundaryCache;
use crate::civil::Epoch;
use crate::encode::encode;
use crate::error::{FormatError, TimeError};
use crate::timestamp::CalendarTimestamp;

/// Minimum input length: `YYYY-MM-DDTHH:MM:SS`.
pub const MIN_ISO_LEN: usize = 19;

const SEPARATORS: [(usize, u8); 5] = [
    (4, b'-'),
    (7, b'-'),
    (10, b'T'),
    (13, b':'),
    (16, b':'),
];

/// Byte ranges of year, month, day, hour, minute, second.
const FIELDS: [Range<usize>; 6] = [0..4, 5..7, 8..10, 11..13, 14..16, 17..19];

/// Splits a strict ISO-8601 string into calendar fields.
///
/// Only the layout is checked here. Field ranges are left to
/// [`CalendarTimestamp::validate`], so `"2021-13-01T00:00:00"` parses to a
/// timestamp with `month == 12`. The month is stored 0-based.
///
/// # Errors
///
/// Returns the [`FormatError`] describing the first layout violation.
pub fn parse_fields(text: &str) -> Result<CalendarTimestamp, FormatError> {
    let Some(core) = text.as_bytes().first_chunk::<MIN_ISO_LEN>() else {
        return Err(FormatError::TooShort { len: text.len() });
    };

    for (offset, expected) in SEPARATORS {
        if core[offset] != expected {
            return Err(FormatError::Separator {
                offset,
                expected: char::from(expected),
                found: char_at(text, offset),
            });
        }
    }

    let mut values = [0i32; 6];
    for (value, range) in values.iter_mut().zip(FIELDS) {
        *value = read_segment(text, core, range)?;
    }
    let [year, month, day, hour, minute, second] = values;

    Ok(CalendarTimestamp::new(
        year,
        month - 1,
        day,
        hour,
        minute,
        second,
    ))
}

/// Converts a strict ISO-8601 UTC string to an epoch.
///
/// # Errors
///
/// - [`TimeError::Format`] if the layout is wrong.
/// - Any error from [`encode`] for out-of-range fields or a day past the end
///   of the month.
pub fn parse(cache: &YearBoundaryCache, text: &str) -> Result<Epoch, TimeError> {
    let ts = parse_fields(text).map_err(|e| {
        error!(input = text, error = %e, "wrong format, expected YYYY-MM-DDTHH:MM:SS");
        TimeError::from(e)
    })?;
    encode(cache, &ts)
}

/// Reads one numeric segment right to left, weighting each digit by its
/// power of ten.
fn read_segment(
    text: &str,
    core: &[u8; MIN_ISO_LEN],
    range: Range<usize>,
) -> Result<i32, FormatError> {
    let mut value = 0;
    let mut scale = 1;
    for offset in range.rev() {
        let byte = core[offset];
        if !byte.is_ascii_digit() {
            return Err(FormatError::NonDigit {
                offset,
                found: char_at(text, offset),
            });
        }
        value += i32::from(byte - b'0') * scale;
        scale *= 10;
    }
    Ok(value)
}

/// The character whose encoding covers byte `offset` of `text`.
fn char_at(text: &str, offset: usize) -> char {
    text.char_indices()
        .take_while(|&(start, _)| start <= offset)
        .last()
        .map_or(char::REPLACEMENT_CHARACTER, |(_, c)| c)
}
