//! fastjson CLI.
//!
//! Reads every value from a file (or stdin) and writes each back out in
//! fastjson's own layout, one per line.

use clap::Parser;
use fastjson::json::DEFAULT_MAX_NESTING_DEPTH;
use fastjson::{JsonResult, Limits, Reader, Writer};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fastjson")]
#[command(about = "Read JSON values and write them back out", long_about = None)]
#[command(version)]
struct Cli {
    /// Input file; stdin when omitted
    file: Option<PathBuf>,

    /// Reject comments, bare keys and numeric suffixes
    #[arg(long)]
    strict: bool,

    /// Maximum nesting depth of objects and arrays
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_NESTING_DEPTH)]
    max_depth: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn limits(&self) -> Limits {
        let limits = if self.strict {
            Limits::strict()
        } else {
            Limits::lenient()
        };
        limits.with_max_nesting_depth(self.max_depth)
    }

    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn run(cli: &Cli) -> JsonResult<usize> {
    let limits = cli.limits();
    let reader = match &cli.file {
        Some(path) => {
            tracing::info!(path = %path.display(), "reading file");
            Reader::from_reader_with_limits(File::open(path)?, limits)?
        }
        None => Reader::from_reader_with_limits(io::stdin().lock(), limits)?,
    };

    let stdout = io::stdout();
    let mut writer = Writer::with_limits(BufWriter::new(stdout.lock()), limits);
    let mut count = 0;
    for value in reader {
        writer.put_value(&value?)?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    match run(&cli) {
        Ok(count) => {
            tracing::info!(count, "values written");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
