use std::process::ExitCode;

/// The filter's decision, reported to the caller as the process exit status.
///
/// There is no success payload. A pipeline caller reads only the status: 0
/// keeps the record, 1 drops it. The exit code is the outbound half of the
/// protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The record's name carries the required prefix.
    Match,
    /// Everything else: wrong name, missing key, non-string value, or a
    /// non-object document.
    NoMatch,
}

impl Verdict {
    /// The exit status this verdict maps to: 0 for a match, 1 otherwise.
    pub fn exit_code(self) -> u8 {
        match self {
            Verdict::Match => 0,
            Verdict::NoMatch => 1,
        }
    }
}

impl From<Verdict> for ExitCode {
    fn from(verdict: Verdict) -> Self {
        ExitCode::from(verdict.exit_code())
    }
}
