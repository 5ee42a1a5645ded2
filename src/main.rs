use clap::Parser;
use std::process::ExitCode;

/// Pipeline predicate that matches JSON issue records named with the MAD prefix.
///
/// Reads one JSON document from stdin and exits 0 when its `name` field is a
/// string starting with `MAD`, 1 otherwise. Takes no arguments.
#[derive(Debug, Parser)]
#[command(name = "mad-filter", version, about)]
struct Cli {}

fn main() -> ExitCode {
    let Cli {} = Cli::parse();
    mad_filter::run_filter()
}
