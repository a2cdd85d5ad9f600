//! Top-level execution and failure reporting for the `kruskal` binary.
//!
//! Status lines go to the supplied writer (stdout in the binary); diagnostics
//! go through `tracing`.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{error, field, warn};

use super::commands::{
    Cli, CliError, persist_tree, render_destination, render_failure, render_status, run_cli,
};

/// Exit status for a successful run.
pub const SUCCESS_EXIT: u8 = 0;
/// Exit status for any failure other than a disconnected graph.
pub const FAILURE_EXIT: u8 = 1;
/// Exit status reported when the input graph has no spanning tree.
pub const DISCONNECTED_EXIT: u8 = 2;

/// Computes the tree, reports its weight, then persists the edges.
///
/// The weight line is flushed before the output file is opened so it is
/// reported even when persisting fails.
///
/// # Errors
/// Returns the [`CliError`] wrapped with context when computing, reporting or
/// persisting fails.
pub fn execute(cli: Cli, status: &mut impl Write) -> Result<()> {
    let summary = run_cli(cli).context("failed to compute minimum spanning tree")?;
    render_status(&summary, &mut *status).context("failed to render status")?;
    status.flush().context("failed to flush status")?;
    persist_tree(&summary).context("failed to persist minimum spanning tree")?;
    render_destination(&summary, &mut *status).context("failed to render status")?;
    status.flush().context("failed to flush status")?;
    Ok(())
}

/// Maps a failure to the process exit status.
#[must_use]
pub fn exit_status(err: &anyhow::Error) -> u8 {
    if err
        .downcast_ref::<CliError>()
        .is_some_and(CliError::is_disconnected)
    {
        DISCONNECTED_EXIT
    } else {
        FAILURE_EXIT
    }
}

/// Writes the failure's status message, logs it with its codes and returns
/// the exit status.
#[must_use]
pub fn report_failure(err: &anyhow::Error, status: &mut impl Write) -> u8 {
    let cli_error = err.downcast_ref::<CliError>();

    if let Some(failure) = cli_error
        && let Err(write_err) =
            render_failure(failure, &mut *status).and_then(|()| status.flush())
    {
        warn!(error = %write_err, "failed to render failure status");
    }

    let code_field = cli_error
        .and_then(CliError::code)
        .map(|code| field::display(code.as_str()));
    let load_code_field = cli_error
        .and_then(CliError::load_code)
        .map(|code| field::display(code.as_str()));

    error!(
        error = %err,
        code = code_field,
        load_code = load_code_field,
        "command execution failed"
    );

    exit_status(err)
}

/// Runs `cli` to completion and returns the process exit status.
#[must_use]
pub fn run_to_exit(cli: Cli, status: &mut impl Write) -> u8 {
    match execute(cli, status) {
        Ok(()) => SUCCESS_EXIT,
        Err(err) => report_failure(&err, status),
    }
}
