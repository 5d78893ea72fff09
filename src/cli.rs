use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// UTC calendar and epoch converter.
#[derive(Parser)]
#[command(
    name = "utcepoch",
    version,
    about = "Convert between UTC timestamps, ISO-8601 strings and epoch seconds"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert calendar fields to epoch seconds.
    Encode(EncodeArgs),
    /// Render epoch seconds as YYYY-MM-DDTHH:MM:SSZ.
    Decode(DecodeArgs),
    /// Parse YYYY-MM-DDTHH:MM:SS strings to epoch seconds.
    Parse(ParseArgs),
    /// Convert a file of epochs and ISO strings line by line.
    Convert(ConvertArgs),
    /// Print the month boundaries of one year.
    Table(TableArgs),
}

/// Arguments for the `encode` subcommand.
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// Calendar year.
    #[arg(long)]
    pub year: i32,

    /// Month, 1 (January) to 12 (December).
    #[arg(long)]
    pub month: i32,

    /// Day of month.
    #[arg(long)]
    pub day: i32,

    /// Hour of day.
    #[arg(long, default_value_t = 0)]
    pub hour: i32,

    /// Minute.
    #[arg(long, default_value_t = 0)]
    pub minute: i32,

    /// Second.
    #[arg(long, default_value_t = 0)]
    pub second: i32,
}

/// Arguments for the `decode` subcommand.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// Epoch seconds to render.
    #[arg(required = true, allow_negative_numbers = true)]
    pub epochs: Vec<i64>,
}

/// Arguments for the `parse` subcommand.
#[derive(clap::Args)]
pub struct ParseArgs {
    /// ISO-8601 UTC strings, e.g. 2020-02-29T12:00:00Z.
    #[arg(required = true)]
    pub dates: Vec<String>,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Input file, one value per line. Reads stdin if omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file. Writes stdout if omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip lines that fail to convert (overrides config).
    #[arg(long)]
    pub skip_invalid: bool,
}

/// Arguments for the `table` subcommand.
#[derive(clap::Args)]
pub struct TableArgs {
    /// Calendar year.
    pub year: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn decode_accepts_negative_epoch() {
        let cli = Cli::try_parse_from(["utcepoch", "decode", "-1", "0"]).unwrap();
        match cli.command {
            Command::Decode(args) => assert_eq!(args.epochs, vec![-1, 0]),
            _ => panic!("expected decode"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["utcepoch", "table", "2020", "-vv", "--config", "x.toml"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }
}
