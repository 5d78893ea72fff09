//! Parse command: ISO-8601 strings to epoch seconds.

use anyhow::{Context, Result};

use utcepoch_calendar::iso_utc_to_epoch;

use crate::cli::ParseArgs;

/// Run the parse command.
pub fn run(args: ParseArgs) -> Result<()> {
    for date in &args.dates {
        let epoch = iso_utc_to_epoch(date).with_context(|| format!("cannot parse {date:?}"))?;
        println!("{epoch}");
    }
    Ok(())
}
