use std::io;
use std::process::ExitCode;

use crate::decision;
use crate::protocol::{DecodeError, Record, Verdict};

/// Execute the filter: read one JSON record from stdin, answer by exit status.
///
/// Both decision outcomes are silent; the caller reads only the status. A
/// decode failure prints its one diagnostic line to stdout and exits with
/// the no-match status, never as a process fault.
pub fn run() -> ExitCode {
    match execute_from_stdin() {
        Ok(verdict) => verdict.into(),
        Err(e) => {
            println!("{e}");
            ExitCode::from(1)
        }
    }
}

fn execute_from_stdin() -> Result<Verdict, DecodeError> {
    let record = Record::read(io::stdin().lock())?;
    Ok(decision::evaluate(&record))
}
