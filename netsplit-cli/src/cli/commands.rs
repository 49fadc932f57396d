//! Argument parsing and command execution for the netsplit CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use netsplit_core::{AdjacencySource, NetsplitError, SplitOutcome, SplitterBuilder, StrategyKind};
use netsplit_providers_json::{JsonNetwork, JsonNetworkError};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "netsplit",
    about = "Split a network into its disconnected subnetworks."
)]
pub struct Cli {
    /// Path to a JSON document mapping edge ids to arrays of adjacent edge ids.
    pub path: PathBuf,

    /// Policy deciding which component absorbs the other on a merge.
    #[arg(long, value_enum, default_value_t = StrategyArg::SizeAware)]
    pub strategy: StrategyArg,

    /// Entries processed between progress reports.
    #[arg(
        long = "batch-size",
        default_value_t = netsplit_core::DEFAULT_BATCH_SIZE,
        value_parser = clap::value_parser!(usize),
    )]
    pub batch_size: usize,

    /// Also print the edges of every subnetwork.
    #[arg(long)]
    pub members: bool,

    /// Override name for the input (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Merge strategies selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Always fold the entry's component into the neighbour's.
    Naive,
    /// Fold the smaller component into the larger one.
    SizeAware,
}

impl From<StrategyArg> for StrategyKind {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Naive => Self::Naive,
            StrategyArg::SizeAware => Self::SizeAware,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input document could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input document was not a valid network.
    #[error("invalid network document: {0}")]
    Json(#[from] JsonNetworkError),
    /// Configuring or running the splitter failed.
    #[error(transparent)]
    Core(#[from] NetsplitError),
}

/// Summarises the outcome of executing the CLI.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the input network.
    pub source: String,
    /// Strategy the splitter ran with.
    pub strategy: StrategyKind,
    /// Partition and counters produced by the run.
    pub outcome: SplitOutcome,
}

/// Loads the network named by `cli` and splits it.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or parsed, or when the
/// configuration is rejected.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use netsplit_cli::cli::{Cli, StrategyArg, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), r#"{"1": [2], "3": [4]}"#)?;
/// let cli = Cli {
///     path: file.path().to_path_buf(),
///     strategy: StrategyArg::SizeAware,
///     batch_size: 25_000,
///     members: false,
///     name: None,
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.outcome.partition.len(), 2);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(
        path = %cli.path.display(),
        strategy = %StrategyKind::from(cli.strategy),
        source = field::Empty,
    ),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let Cli {
        path,
        strategy,
        batch_size,
        name,
        ..
    } = cli;
    let splitter = SplitterBuilder::new()
        .with_strategy(strategy.into())
        .with_batch_size(batch_size)
        .build()?;

    let chosen_name = derive_source_name(&path, name.as_deref());
    Span::current().record("source", field::display(&chosen_name));

    info!("parsing json input");
    let network = JsonNetwork::try_from_reader(chosen_name, open_reader(&path)?)?;
    let outcome = splitter.run(&network)?;

    Ok(ExecutionSummary {
        source: network.name().to_owned(),
        strategy: splitter.strategy(),
        outcome,
    })
}

fn open_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "network".to_owned())
}

/// Renders the headline counts of `summary` to `writer`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let stats = &summary.outcome.stats;
    writeln!(writer, "source: {}", summary.source)?;
    writeln!(writer, "strategy: {}", summary.strategy)?;
    writeln!(writer, "entries: {}", stats.entries)?;
    writeln!(writer, "edges: {}", stats.edges)?;
    writeln!(writer, "merges: {}", stats.merges)?;
    writeln!(writer, "rehomed edges: {}", stats.rehomed_edges)?;
    writeln!(writer, "subnetworks: {}", summary.outcome.partition.len())?;
    Ok(())
}

/// Renders one line per subnetwork: its index, size, and space-separated
/// edges in ascending order.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_members(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    for (index, edges) in summary.outcome.partition.canonical().iter().enumerate() {
        let joined = edges
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{index}\t{}\t{joined}", edges.len())?;
    }
    Ok(())
}
