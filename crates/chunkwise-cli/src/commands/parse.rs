use clap::Args;
use chunkwise_core::{format_clock, parse_duration};
use serde::Serialize;

use super::CliResult;

#[derive(Args)]
pub struct ParseArgs {
    /// Duration text, e.g. "1h 30m 15s"
    input: String,
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Parsed<'a> {
    input: &'a str,
    total_secs: u64,
    formatted: String,
}

pub fn run(args: ParseArgs) -> CliResult {
    let total_secs = parse_duration(&args.input);
    if args.json {
        let parsed = Parsed {
            input: &args.input,
            total_secs,
            formatted: format_clock(total_secs),
        };
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else if total_secs == 0 {
        println!("0 seconds (no recognised units; try \"25m\" or \"1h 30m\")");
    } else {
        println!("{total_secs} seconds ({})", format_clock(total_secs));
    }
    Ok(())
}
