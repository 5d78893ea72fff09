//! Error types for the utcepoch-calendar crate.

/// Reason a string was rejected by the strict ISO-8601 parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Returned when the input is shorter than `YYYY-MM-DDTHH:MM:SS`.
    #[error("date string is too short: {len} bytes (need at least 19)")]
    TooShort {
        /// Length of the rejected input in bytes.
        len: usize,
    },

    /// Returned when a fixed separator position holds the wrong byte.
    #[error("expected {expected:?} at offset {offset}, found {found:?}")]
    Separator {
        /// Byte offset of the separator.
        offset: usize,
        /// The separator required at that offset.
        expected: char,
        /// The character whose encoding covers `offset`.
        found: char,
    },

    /// Returned when a numeric segment contains something other than `0-9`.
    #[error("expected a digit at offset {offset}, found {found:?}")]
    NonDigit {
        /// Byte offset of the offending byte.
        offset: usize,
        /// The character whose encoding covers `offset`.
        found: char,
    },
}

/// Error type for all fallible operations in the utcepoch-calendar crate.
///
/// Each variant is one of the ways a conversion can fail. None of them is
/// retried or repaired internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// Returned when a calendar field lies outside its closed range.
    #[error("{field} out of range: {value} (must be {min}..={max})")]
    FieldOutOfRange {
        /// Name of the rejected field.
        field: &'static str,
        /// The value that was provided.
        value: i32,
        /// Inclusive lower bound.
        min: i32,
        /// Inclusive upper bound.
        max: i32,
    },

    /// Returned when the day and time of day run past the end of the month.
    #[error("day {day} overflows month {number} of {year}", number = .month + 1)]
    MonthOverflow {
        /// Calendar year.
        year: i32,
        /// 0-based month.
        month: i32,
        /// Day of month that was requested.
        day: i32,
    },

    /// Returned when a negative epoch is passed to the decoder.
    #[error("negative epoch: {epoch}")]
    NegativeEpoch {
        /// The rejected epoch.
        epoch: i64,
    },

    /// Returned when an epoch lies past the last supported year.
    #[error("epoch {epoch} is past the supported range (limit {limit})")]
    EpochOutOfRange {
        /// The rejected epoch.
        epoch: i64,
        /// Exclusive upper bound.
        limit: i64,
    },

    /// Returned when a year offset has no slot in the boundary cache.
    #[error("year offset {year_offset} has no cache slot")]
    YearOutOfRange {
        /// Offset from the minimum supported year.
        year_offset: usize,
    },

    /// Returned when an output buffer cannot hold the rendered string.
    #[error("buffer too small: {capacity} bytes (need {required})")]
    BufferTooSmall {
        /// Size of the buffer supplied.
        capacity: usize,
        /// Bytes needed.
        required: usize,
    },

    /// Returned when an ISO-8601 string violates the fixed format.
    #[error("malformed date string: {0}")]
    Format(#[from] FormatError),
}
