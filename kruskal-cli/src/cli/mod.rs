//! Command-line interface orchestration for the Kruskal MST tool.
//!
//! The CLI loads an adjacency matrix from a file, computes its minimum
//! spanning tree and persists the accepted edges to an output file.

mod commands;
mod report;

pub use commands::{
    Cli, CliError, CycleCheckArg, DEFAULT_OUTPUT, ExecutionSummary, persist_tree,
    render_destination, render_failure, render_status, run_cli, write_tree,
};
pub use report::{
    DISCONNECTED_EXIT, FAILURE_EXIT, SUCCESS_EXIT, execute, exit_status, report_failure,
    run_to_exit,
};

#[cfg(test)]
mod test_helpers;
