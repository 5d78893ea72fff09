//! Table command: month boundaries of one year.

use anyhow::{Context, Result};

use utcepoch_calendar::{EPOCH_LIMIT, YearBoundaryTable, epoch_to_iso_utc_string, global_cache};

use crate::cli::TableArgs;

const LABELS: [&str; 13] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec", "next",
];

/// Run the table command.
pub fn run(args: TableArgs) -> Result<()> {
    let cache = global_cache();
    let table = cache
        .ensure_year(args.year)
        .with_context(|| format!("no boundary table for {}", args.year))?;
    for line in format_table(table)? {
        println!("{line}");
    }
    Ok(())
}

/// One line per boundary: label, epoch, ISO form.
///
/// The start of 2034 is past the last decodable epoch and is shown with its
/// ISO form left out.
fn format_table(table: &YearBoundaryTable) -> Result<Vec<String>> {
    table
        .as_slice()
        .iter()
        .zip(LABELS)
        .map(|(&epoch, label)| {
            let iso = if epoch < EPOCH_LIMIT {
                epoch_to_iso_utc_string(epoch)?
            } else {
                "-".to_string()
            };
            Ok(format!("{label:<4} {epoch:>10} {iso}"))
        })
        .collect()
}
