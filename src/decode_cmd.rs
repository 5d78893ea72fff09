//! Decode command: epoch seconds to ISO-8601.

use std::io::{self, Write};

use anyhow::{Context, Result};

use utcepoch_calendar::{ISO_UTC_LEN, epoch_to_iso_utc};

use crate::cli::DecodeArgs;

/// Run the decode command.
pub fn run(args: DecodeArgs) -> Result<()> {
    let mut out = io::stdout().lock();
    let mut buf = [0u8; ISO_UTC_LEN];
    for epoch in args.epochs {
        let n = epoch_to_iso_utc(epoch, &mut buf)
            .with_context(|| format!("cannot decode epoch {epoch}"))?;
        out.write_all(&buf[..n])?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
