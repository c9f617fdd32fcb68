use std::str::FromStr;

use clap::Parser;

use ::loopperformance::benchmarks::core::{DEFAULT_ROUNDS, DEFAULT_SIZE};
use ::loopperformance::*;

const USAGE: &str = "Usage:
loopperformance [SIZE] [ROUNDS]

SIZE\tnumber of elements in the array to iterate
ROUNDS\tnumber of rounds to run each batch";

/// Compares the cost of different ways to iterate over a large byte array
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    /// Number of elements in the array to iterate
    #[arg(value_name = "SIZE", value_parser = parse_count::<usize>)]
    size: Option<usize>,

    /// Number of rounds to run each batch
    #[arg(value_name = "ROUNDS", value_parser = parse_count::<u32>)]
    rounds: Option<u32>,

    #[arg(short, long)]
    help: bool,
}

fn parse_count<T: FromStr>(value: &str) -> core::result::Result<T, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a non-negative integer"))
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(_) => {
            println!("{USAGE}");
            std::process::exit(1);
        }
    };

    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = match BenchmarkConfig::new(
        args.size.unwrap_or(DEFAULT_SIZE),
        args.rounds.unwrap_or(DEFAULT_ROUNDS),
    ) {
        Ok(config) => config,
        Err(err) if err.is_invalid_argument() => {
            println!("{USAGE}");
            eprintln!("{}", err);
            std::process::exit(1);
        }
        Err(err) => return Err(err),
    };

    // Flushes buffered log lines when main returns
    let _guard = init_tracing()?;

    let runner = BenchmarkRunner::new(config);
    if let Err(err) = runner.run() {
        tracing::error!("Benchmark aborted: {}", err);
        return Err(err);
    }

    Ok(())
}
