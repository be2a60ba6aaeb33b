mod check;

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use bbmark_core::convert;
use clap::Parser;
use thiserror::Error;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bbmark-cli")]
#[command(about = "Convert Markdown to BBCode")]
#[command(version)]
struct Cli {
    /// Markdown file to convert; reads stdin when omitted
    input: Option<PathBuf>,

    /// Write BBCode to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Run the built-in samples and report pass/fail for each
    #[arg(long, conflicts_with_all = ["input", "output"])]
    check: bool,

    /// Log conversion details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    ReadInput { path: PathBuf, source: io::Error },
    #[error("failed to read stdin: {0}")]
    ReadStdin(#[source] io::Error),
    #[error("failed to write {path}: {source}")]
    WriteOutput { path: PathBuf, source: io::Error },
    #[error("failed to write stdout: {0}")]
    WriteStdout(#[source] io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.check {
        let outcomes = check::run_samples();
        check::report(&outcomes);
        return if outcomes.iter().all(|outcome| outcome.passed) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let source = read_source(cli.input.as_ref())?;
    let bbcode = convert(&source);
    debug!(bytes = bbcode.len(), "converted");

    match &cli.output {
        Some(path) => fs::write(path, &bbcode).map_err(|source| CliError::WriteOutput {
            path: path.clone(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(bbcode.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(CliError::WriteStdout)
        }
    }
}

fn read_source(input: Option<&PathBuf>) -> Result<String, CliError> {
    match input {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::ReadInput {
            path: path.clone(),
            source,
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::ReadStdin)?;
            Ok(buffer)
        }
    }
}
