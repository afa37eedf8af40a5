//! spiral CLI - print a number range as a square spiral grid

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use spiral_grid::{Options, SpiralError, SpiralRange};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "spiral")]
#[command(about = "Draw a square spiral from the start number to the end number", long_about = None)]
#[command(version)]
struct Cli {
    /// First number, placed at the center
    start: Option<u64>,

    /// Last number, placed at the top-right corner
    end: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
    format: OutputFormat,

    /// Emit a tab after every cell, including the last one in a row
    #[arg(long)]
    trailing_tab: bool,

    /// Verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Tsv,
    Json,
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Spiral(#[from] SpiralError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            Self::Spiral(err) => err.exit_code(),
            Self::Io(_) | Self::Serialization(_) => 1,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            // clap reports usage errors with 2; bad arguments are 1 here
            let _ = err.print();
            return ExitCode::from(1);
        }
    };

    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(code = err.exit_code(), "exiting with error");
            eprintln!("spiral: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "spiral=debug,spiral_grid=debug"
    } else {
        "spiral=warn,spiral_grid=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let (Some(start), Some(end)) = (cli.start, cli.end) else {
        return Err(SpiralError::MissingArguments.into());
    };

    let range = SpiralRange::new(start, end)?;
    tracing::debug!(start, end, side = range.side(), format = ?cli.format, "range accepted");

    let mut stdout = io::stdout().lock();
    match cli.format {
        // A lone number is printed as is, whatever the separator options
        OutputFormat::Tsv if range.is_single() => writeln!(stdout, "{start}")?,
        OutputFormat::Tsv => {
            let options = Options {
                trailing_separator: cli.trailing_tab,
                ..Options::default()
            };
            let grid = spiral_grid::build_grid(&range);
            stdout.write_all(spiral_grid::render_with_options(&grid, &options).as_bytes())?;
        }
        OutputFormat::Json => {
            let grid = spiral_grid::build_grid(&range);
            serde_json::to_writer(&mut stdout, &grid)?;
            writeln!(stdout)?;
        }
    }
    stdout.flush()?;

    Ok(())
}
