//! Command implementations and argument parsing for the Kruskal CLI.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use kruskal_core::{
    CycleCheckStrategy, KruskalBuilder, KruskalError, KruskalErrorCode, LoadErrorCode,
    SpanningTree, load_matrix,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Default destination for the accepted edges.
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Header written before the edge list in the output file.
const TREE_HEADER: &str = "The minimum spanning tree is:";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "kruskal",
    about = "Compute a minimum spanning tree from an adjacency matrix."
)]
pub struct Cli {
    /// Path to the adjacency matrix: a vertex count followed by N² weights.
    pub input: PathBuf,

    /// File receiving the accepted edges.
    #[arg(long, short, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Cycle check used while accepting edges.
    #[arg(long = "cycle-check", value_enum, default_value_t = CycleCheckArg::DisjointSet)]
    pub cycle_check: CycleCheckArg,
}

/// Cycle check strategies selectable from the command line.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum CycleCheckArg {
    /// Union-find with path compression.
    #[default]
    DisjointSet,
    /// Depth-first walk over the accepted edges.
    AdjacencyWalk,
}

impl CycleCheckArg {
    const fn label(self) -> &'static str {
        match self {
            Self::DisjointSet => "disjoint-set",
            Self::AdjacencyWalk => "adjacency-walk",
        }
    }
}

impl From<CycleCheckArg> for CycleCheckStrategy {
    fn from(arg: CycleCheckArg) -> Self {
        match arg {
            CycleCheckArg::DisjointSet => Self::DisjointSet,
            CycleCheckArg::AdjacencyWalk => Self::AdjacencyWalk,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    SourceUnavailable {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The output file could not be created or written.
    #[error("failed to write `{path}`: {source}")]
    SinkUnavailable {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Loading or computing the tree failed.
    #[error(transparent)]
    Core(#[from] KruskalError),
}

impl CliError {
    /// Returns the core error code when the failure came from the library.
    #[must_use]
    pub const fn code(&self) -> Option<KruskalErrorCode> {
        match self {
            Self::Core(error) => Some(error.code()),
            Self::SourceUnavailable { .. } | Self::SinkUnavailable { .. } => None,
        }
    }

    /// Returns the loader error code when the input was malformed.
    #[must_use]
    pub const fn load_code(&self) -> Option<LoadErrorCode> {
        match self {
            Self::Core(error) => error.load_code(),
            Self::SourceUnavailable { .. } | Self::SinkUnavailable { .. } => None,
        }
    }

    /// Returns `true` when the input graph had no spanning tree.
    #[must_use]
    pub const fn is_disconnected(&self) -> bool {
        matches!(self, Self::Core(KruskalError::Disconnected { .. }))
    }
}

/// Outcome of a successful run, ready to be reported and persisted.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Destination for the accepted edges.
    pub output: PathBuf,
    /// The computed spanning tree.
    pub tree: SpanningTree,
}

/// Loads the matrix named by `cli` and computes its minimum spanning tree.
///
/// Nothing is written: call [`render_status`] and [`persist_tree`] with the
/// returned summary.
///
/// # Errors
/// Returns [`CliError::SourceUnavailable`] when the input cannot be opened
/// and [`CliError::Core`] when it is malformed or disconnected.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{Cli, CycleCheckArg, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3\n0 1 1\n1 0 1\n1 1 0\n")?;
/// let cli = Cli {
///     input: file.path().to_path_buf(),
///     output: "tree.txt".into(),
///     cycle_check: CycleCheckArg::DisjointSet,
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.tree.total_weight(), 2);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(input = field::Empty, cycle_check = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let Cli {
        input,
        output,
        cycle_check,
    } = cli;
    let span = Span::current();
    span.record("input", field::display(input.display()));
    span.record("cycle_check", field::display(cycle_check.label()));

    let kruskal = KruskalBuilder::new()
        .with_cycle_check(cycle_check.into())
        .build();
    let reader = open_input(&input)?;
    let matrix = load_matrix(reader).map_err(KruskalError::from)?;
    let tree = kruskal.compute(&matrix)?;

    info!(
        edges = tree.edges().len(),
        total_weight = tree.total_weight(),
        "command completed"
    );
    Ok(ExecutionSummary { output, tree })
}

#[instrument(name = "cli.open_input", err, fields(path = field::Empty))]
pub(super) fn open_input(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Writes the total-weight status line to `writer`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_status(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "The weight of the minimum spanning tree is {}!",
        summary.tree.total_weight()
    )
}

/// Writes the line confirming where the tree was persisted.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_destination(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "The minimum spanning tree is written to {}!",
        summary.output.display()
    )
}

/// Writes the status message describing `error` to `writer`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_failure(error: &CliError, mut writer: impl Write) -> io::Result<()> {
    match error {
        CliError::SourceUnavailable { path, .. } => {
            writeln!(writer, "Unable to open the input file {}!", path.display())
        }
        CliError::SinkUnavailable { path, .. } => writeln!(
            writer,
            "Unable to write the minimum spanning tree to {}!",
            path.display()
        ),
        CliError::Core(KruskalError::Disconnected { .. }) => {
            writeln!(writer, "The graph is disconnected!")
        }
        CliError::Core(KruskalError::Load(load)) => {
            writeln!(writer, "The adjacency matrix is malformed: {load}")
        }
        CliError::Core(other) => writeln!(writer, "{other}"),
    }
}

/// Writes the header and one `A - B` line per edge in acceptance order.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::write_tree;
/// # use kruskal_core::{AdjacencyMatrix, EdgeSet, kruskal};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let matrix = AdjacencyMatrix::from_edges(3, [(1, 0, 1), (2, 1, 2)])?;
/// let tree = kruskal(EdgeSet::from_matrix(&matrix));
/// let mut buffer = Vec::new();
/// write_tree(&tree, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "The minimum spanning tree is:\n0 - 1\n1 - 2\n"
/// );
/// # Ok(())
/// # }
/// ```
pub fn write_tree(tree: &SpanningTree, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "{TREE_HEADER}")?;
    for edge in tree.edges() {
        writeln!(writer, "{} - {}", edge.source(), edge.target())?;
    }
    Ok(())
}

/// Creates the summary's output file and writes the tree into it.
///
/// # Errors
/// Returns [`CliError::SinkUnavailable`] when the file cannot be created or
/// written.
#[instrument(
    name = "cli.persist",
    err,
    skip(summary),
    fields(path = %summary.output.display(), edges = summary.tree.edges().len()),
)]
pub fn persist_tree(summary: &ExecutionSummary) -> Result<(), CliError> {
    let sink_error = |source| CliError::SinkUnavailable {
        path: summary.output.clone(),
        source,
    };
    let file = File::create(&summary.output).map_err(sink_error)?;
    let mut writer = BufWriter::new(file);
    write_tree(&summary.tree, &mut writer).map_err(sink_error)?;
    writer.flush().map_err(sink_error)?;
    info!("tree persisted");
    Ok(())
}
