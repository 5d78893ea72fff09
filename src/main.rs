mod cli;
mod config;
mod convert_cmd;
mod decode_cmd;
mod encode_cmd;
mod logging;
mod parse_cmd;
mod table_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    config::warm_cache(&config.cache)?;

    let result = match cli.command {
        Command::Encode(args) => encode_cmd::run(args),
        Command::Decode(args) => decode_cmd::run(args),
        Command::Parse(args) => parse_cmd::run(args),
        Command::Convert(args) => convert_cmd::run(args, &config.convert),
        Command::Table(args) => table_cmd::run(args),
    };
    utcepoch_calendar::cache_teardown();
    result
}
