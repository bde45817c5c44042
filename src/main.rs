//! Wordle Next Guess - CLI
//!
//! Reads the words that are still possible from stdin, ranks every dictionary
//! word as a next guess and prints the best ones.

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};
use std::io;
use std::path::PathBuf;
use wordle_next_guess::{
    analysis::DEFAULT_TOP,
    commands::{BestGuessConfig, find_best_guess},
    output::print_best_guess_result,
    selfcheck,
    wordlists::{DEFAULT_DICTIONARY, load_from_file, read_words},
};

#[derive(Parser)]
#[command(
    name = "wordle_next_guess",
    about = "Rank Wordle guesses against the words still possible (read from stdin)",
    version,
    author
)]
struct Cli {
    /// Dictionary of allowed guesses, one word per line
    #[arg(short, long, default_value = DEFAULT_DICTIONARY)]
    dict: PathBuf,

    /// Entries shown per ranked list
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP)]
    top: usize,

    /// Print every guess's partition before the rankings
    #[arg(long)]
    dump: bool,

    /// Recompute every hint instead of memoizing
    #[arg(long)]
    no_cache: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    selfcheck::run().context("refusing to rank guesses")?;

    let targets = read_words(io::stdin().lock()).context("failed to read targets from stdin")?;
    let guesses = load_from_file(&cli.dict)?;
    info!(
        "Loaded {} targets and {} guesses from {}",
        targets.len(),
        guesses.len(),
        cli.dict.display()
    );

    let config = BestGuessConfig {
        top: cli.top,
        use_cache: !cli.no_cache,
        show_progress: true,
        keep_partitions: cli.dump,
    };
    let result = find_best_guess(&guesses, &targets, &config);
    print_best_guess_result(&result);

    Ok(())
}
