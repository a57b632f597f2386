use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;
use scrambled_strings::input::{parse_dictionary, parse_targets};
use scrambled_strings::{case_lines, DistinctPermutations, Orchestrator, Result, Settings};

/// Take a set of words from a dictionary and find how many times they appear
/// in a list of long string inputs in their original or scrambled form.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the dictionary file.
    #[arg(long)]
    dictionary: PathBuf,

    /// Path to the input string file.
    #[arg(long)]
    input: PathBuf,

    /// JSON settings file; built-in defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of parallel workers (overrides the settings file).
    #[arg(long)]
    workers: Option<usize>,

    /// Candidates buffered per word before matching (overrides the settings file).
    #[arg(long)]
    batch_capacity: Option<usize>,

    /// Generate each distinct scramble once instead of every ordering.
    #[arg(long)]
    distinct: bool,
}

fn run(args: &Args) -> Result<Vec<String>> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(n) = args.workers {
        settings.matching.worker_count = n;
    }
    if let Some(n) = args.batch_capacity {
        settings.matching.batch_capacity = n;
    }

    let words = parse_dictionary(&args.dictionary, &settings.dictionary)?;
    let targets = parse_targets(&args.input, &settings.targets)?;

    let totals = if args.distinct {
        Orchestrator::with_engine(DistinctPermutations, settings.matching)?.run(&words, &targets)?
    } else {
        Orchestrator::new(settings.matching)?.run(&words, &targets)?
    };
    Ok(case_lines(&totals))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("run aborted: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
