//! CLI entry point for splitting a network into disconnected subnetworks.
//!
//! Parses command-line arguments with clap, runs the splitter over the JSON
//! document, renders the result to stdout, and maps failures to a non-zero
//! exit code. Logging is initialised first so every later step can emit
//! structured diagnostics to stderr.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use netsplit_cli::{
    cli::{Cli, CliError, render_members, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse arguments, split the network, render the result, and flush stdout.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let show_members = cli.members;
    let summary = run_cli(cli).context("failed to split network")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render summary")?;
    if show_members {
        render_members(&summary, &mut writer).context("failed to render subnetworks")?;
    }
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let (code, store_code) = err
            .downcast_ref::<CliError>()
            .and_then(|cli_error| match cli_error {
                CliError::Core(core) => Some((Some(core.code()), core.store_code())),
                _ => None,
            })
            .unwrap_or((None, None));

        let code_field = code.map(|code| field::display(code.as_str()));
        let store_code_field = store_code.map(|code| field::display(code.as_str()));

        error!(
            error = %err,
            code = code_field,
            store_code = store_code_field,
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialised"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialise logging: {err}");
}
