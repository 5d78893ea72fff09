//! # utcepoch-calendar
//!
//! UTC conversions between calendar timestamps, fixed-width ISO-8601
//! strings and Unix epoch seconds for the years 1970 through 2033.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     S["YYYY-MM-DDTHH:MM:SS"] -->|"parse()"| T["CalendarTimestamp"]
//!     T -->|"validate()"| T
//!     T -->|"encode()"| E["Epoch"]
//!     E -->|"decode()"| T
//!     E -->|"decode_into()"| B["YYYY-MM-DDTHH:MM:SSZ"]
//!     C["YearBoundaryCache"] -.->|"month starts"| T
//! ```
//!
//! Both directions look up month start epochs in a [`YearBoundaryCache`].
//! Each year's table is computed once, from a pure proleptic Gregorian
//! day count, and shared read-only afterwards.
//!
//! ## Quick Start
//!
//! ```
//! use utcepoch_calendar::{
//!     CalendarTimestamp, epoch_to_iso_utc_string, iso_utc_to_epoch, time_to_epoch,
//! };
//!
//! let epoch = iso_utc_to_epoch("2020-02-29T12:00:00Z").unwrap();
//! assert_eq!(epoch_to_iso_utc_string(epoch).unwrap(), "2020-02-29T12:00:00Z");
//!
//! // Months are 0-based in a CalendarTimestamp.
//! let ts = CalendarTimestamp::new(2020, 1, 29, 12, 0, 0);
//! assert_eq!(time_to_epoch(&ts).unwrap(), epoch);
//!
//! // 2021 is not a leap year.
//! assert!(time_to_epoch(&CalendarTimestamp::new(2021, 1, 29, 0, 0, 0)).is_err());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `timestamp` | Calendar timestamp and field range checks |
//! | `civil` | Civil date to day count arithmetic |
//! | `table` | Per-year month boundary table |
//! | `cache` | Lazily built boundary cache and its process-wide instance |
//! | `encode` | Timestamp to epoch |
//! | `decode` | Epoch to timestamp and ISO-8601 rendering |
//! | `parse` | Strict ISO-8601 parser |
//! | `error` | Error types |

mod cache;
mod civil;
mod decode;
mod encode;
mod error;
mod parse;
mod table;
mod timestamp;

pub use cache::YearBoundaryCache;
pub use civil::{
    Epoch, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_YEAR, is_leap_year,
};
pub use decode::{EPOCH_LIMIT, ISO_UTC_LEN, decode, decode_into};
pub use encode::encode;
pub use error::{FormatError, TimeError};
pub use parse::{MIN_ISO_LEN, parse, parse_fields};
pub use table::{BOUNDARIES, YearBoundaryTable};
pub use timestamp::{CalendarTimestamp, MAX_YEAR, MIN_YEAR, YEAR_SLOTS};

/// Converts a calendar timestamp to an epoch using the process-wide cache.
///
/// # Errors
///
/// See [`encode`].
pub fn time_to_epoch(ts: &CalendarTimestamp) -> Result<Epoch, TimeError> {
    encode(&cache::global(), ts)
}

/// Writes `epoch` as `YYYY-MM-DDTHH:MM:SSZ` into `buf` using the
/// process-wide cache, returning the number of bytes written.
///
/// # Errors
///
/// See [`decode_into`].
pub fn epoch_to_iso_utc(epoch: Epoch, buf: &mut [u8]) -> Result<usize, TimeError> {
    decode_into(&cache::global(), epoch, buf)
}

/// Returns `epoch` as an owned `YYYY-MM-DDTHH:MM:SSZ` string.
///
/// # Errors
///
/// See [`decode`].
pub fn epoch_to_iso_utc_string(epoch: Epoch) -> Result<String, TimeError> {
    decode(&cache::global(), epoch).map(|ts| ts.to_string())
}

/// Converts a strict ISO-8601 UTC string to an epoch using the process-wide
/// cache.
///
/// # Errors
///
/// See [`parse`].
pub fn iso_utc_to_epoch(text: &str) -> Result<Epoch, TimeError> {
    parse(&cache::global(), text)
}

/// Creates the process-wide cache ahead of first use. Idempotent.
pub fn cache_init() {
    cache::init();
}

/// Drops the process-wide cache and every table it holds.
///
/// Conversions after this start again from an empty cache.
pub fn cache_teardown() {
    cache::teardown();
}

/// Returns a handle to the process-wide cache, creating it if needed.
pub fn global_cache() -> std::sync::Arc<YearBoundaryCache> {
    cache::global()
}
