//! Convert command: stream epochs and ISO strings, converting each line to
//! the other form.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use utcepoch_calendar::{Epoch, TimeError, epoch_to_iso_utc_string, iso_utc_to_epoch};

use crate::cli::ConvertArgs;
use crate::config::ConvertToml;

/// Per-run conversion settings.
#[derive(Debug, Clone)]
pub struct ConvertSettings {
    pub skip_invalid: bool,
    pub comment_prefix: String,
}

/// Line counts for one conversion run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    pub converted: usize,
    pub skipped: usize,
}

/// Converts one value.
///
/// A plain run of ASCII digits, with an optional leading `-`, is an epoch
/// and is rendered as ISO; everything else goes through the strict ISO
/// parser. A leading `+` is not an epoch.
pub fn convert_value(value: &str) -> Result<String, TimeError> {
    let digits = value.strip_prefix('-').unwrap_or(value);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(epoch) = value.parse::<Epoch>() {
            return epoch_to_iso_utc_string(epoch);
        }
    }
    iso_utc_to_epoch(value).map(|epoch| epoch.to_string())
}

/// Converts every non-blank, non-comment line of `reader` into `writer`.
pub fn convert_stream<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    settings: &ConvertSettings,
) -> Result<ConvertSummary> {
    let mut summary = ConvertSummary::default();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("failed to read line {line_no}"))?;
        let value = line.trim();
        if value.is_empty()
            || (!settings.comment_prefix.is_empty() && value.starts_with(&settings.comment_prefix))
        {
            continue;
        }
        match convert_value(value) {
            Ok(converted) => {
                writeln!(writer, "{converted}")?;
                summary.converted += 1;
            }
            Err(e) if settings.skip_invalid => {
                warn!(line = line_no, error = %e, "skipping invalid line");
                summary.skipped += 1;
            }
            Err(e) => bail!("line {line_no}: {value:?}: {e}"),
        }
    }
    writer.flush()?;
    Ok(summary)
}

/// Run the convert command.
pub fn run(args: ConvertArgs, config: &ConvertToml) -> Result<()> {
    let _cmd = info_span!("convert").entered();
    let settings = ConvertSettings {
        skip_invalid: args.skip_invalid || config.skip_invalid,
        comment_prefix: config.comment_prefix.clone(),
    };

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path)
                .with_context(|| format!("failed to open input: {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("failed to create output: {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let summary = convert_stream(reader, writer, &settings)?;
    info!(
        converted = summary.converted,
        skipped = summary.skipped,
        "conversion complete"
    );
    Ok(())
}
