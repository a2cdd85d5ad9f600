//! CLI entry point for the Kruskal minimum spanning tree tool.
//!
//! Parses command-line arguments with clap, computes the tree, reports its
//! weight on stdout, persists the edges to the output file, and maps errors to
//! exit codes. Logging is initialised eagerly and written to stderr so stdout
//! carries only status lines.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use kruskal_cli::{
    cli::{Cli, run_to_exit},
    logging::{self, LoggingError},
};

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut status = stdout.lock();
    ExitCode::from(run_to_exit(cli, &mut status))
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialised"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialise logging: {err}");
}
