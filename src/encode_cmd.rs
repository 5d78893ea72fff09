//! Encode command: calendar fields to epoch seconds.

use anyhow::{Context, Result};
use tracing::debug;

use utcepoch_calendar::{CalendarTimestamp, time_to_epoch};

use crate::cli::EncodeArgs;

/// Builds the timestamp for the CLI's 1-based month.
pub fn timestamp_from_args(args: &EncodeArgs) -> CalendarTimestamp {
    CalendarTimestamp::new(
        args.year,
        args.month - 1,
        args.day,
        args.hour,
        args.minute,
        args.second,
    )
}

/// Run the encode command.
pub fn run(args: EncodeArgs) -> Result<()> {
    let ts = timestamp_from_args(&args);
    debug!(?ts, "encoding");
    let epoch = time_to_epoch(&ts).with_context(|| {
        format!(
            "cannot encode {:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            args.year, args.month, args.day, args.hour, args.minute, args.second
        )
    })?;
    println!("{epoch}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(year: i32, month: i32, day: i32) -> EncodeArgs {
        EncodeArgs {
            year,
            month,
            day,
            hour: 6,
            minute: 30,
            second: 0,
        }
    }

    #[test]
    fn month_is_shifted_to_zero_based() {
        let ts = timestamp_from_args(&args(2020, 2, 29));
        assert_eq!(ts, CalendarTimestamp::new(2020, 1, 29, 6, 30, 0));
        assert_eq!(time_to_epoch(&ts).unwrap(), 1_582_957_800);
    }

    #[test]
    fn invalid_date_errors() {
        assert!(run(args(2021, 2, 29)).is_err());
        assert!(run(args(2021, 0, 1)).is_err());
    }
}
