pub mod decision;
pub mod protocol;

pub(crate) mod cli;

/// Run the filter: read a JSON record from stdin, evaluate, exit by status.
///
/// This is the binary entry point. It exists to bridge the binary crate
/// (`main.rs`) to the library without exposing `cli` internals. Not a stable
/// integration API; callers should use [`decision::evaluate`] and
/// [`protocol::Record`] directly.
pub fn run_filter() -> std::process::ExitCode {
    cli::filter::run()
}
