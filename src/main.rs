//! Distle Solver - CLI
//!
//! Automated Distle player: suggests guesses interactively, solves known
//! secrets, benchmarks strategies and inspects edit-distance feedback.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use distle_solver::{
    commands::{
        DEFAULT_MAX_GUESSES, SolveConfig, compare_words, run_benchmark, run_simple,
        sample_secrets, solve_word,
    },
    core::Word,
    output::{print_benchmark_result, print_compare_result, print_solve_result},
    solver::{DistlePlayer, StrategyType},
    wordlists::loader::{embedded_dictionary, load_from_file},
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "distle_solver",
    about = "Distle solver using edit-distance feedback and information theory",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: adaptive (default), entropy, minimax, frequency
    #[arg(
        short,
        long,
        global = true,
        default_value = "adaptive",
        value_parser = ["adaptive", "entropy", "minimax", "frequency"]
    )]
    strategy: String,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Simple CLI mode (default): suggests guesses, you report the feedback
    Simple {
        /// Maximum guesses per game
        #[arg(short, long, default_value_t = DEFAULT_MAX_GUESSES)]
        max_guesses: usize,
    },

    /// Solve a specific secret word
    Solve {
        /// The secret word to solve
        word: String,

        /// Show candidate counts and entropy for each turn
        #[arg(short, long)]
        details: bool,

        /// Maximum guesses before giving up
        #[arg(short, long, default_value_t = DEFAULT_MAX_GUESSES)]
        max_guesses: usize,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for picking the secrets (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Maximum guesses per game
        #[arg(short, long, default_value_t = DEFAULT_MAX_GUESSES)]
        max_guesses: usize,
    },

    /// Show the distance and operations between two strings
    Compare {
        /// Guessed string
        source: String,

        /// Secret string
        target: String,

        /// Also print the full distance table
        #[arg(short, long)]
        table: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Vec<Word>> {
    let words = match wordlist {
        "embedded" => embedded_dictionary(),
        path => load_from_file(path)
            .with_context(|| format!("Failed to read word list '{path}'"))?,
    };

    anyhow::ensure!(!words.is_empty(), "Word list '{wordlist}' has no valid words");
    info!(source = wordlist, words = words.len(), "dictionary ready");
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Simple {
        max_guesses: DEFAULT_MAX_GUESSES,
    });

    match command {
        Commands::Simple { max_guesses } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            run_simple(&mut new_player(&cli.strategy), &dictionary, max_guesses)
        }
        Commands::Solve {
            word,
            details,
            max_guesses,
        } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            run_solve_command(&cli.strategy, &dictionary, &word, details, max_guesses)
        }
        Commands::Benchmark {
            count,
            seed,
            max_guesses,
        } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            run_benchmark_command(&cli.strategy, &dictionary, count, seed, max_guesses)
        }
        Commands::Compare {
            source,
            target,
            table,
        } => run_compare_command(&source, &target, table),
    }
}

fn new_player(strategy_name: &str) -> DistlePlayer {
    let player = DistlePlayer::new(StrategyType::from_name(strategy_name));
    debug!(strategy = player.strategy().name(), "player ready");
    player
}

fn run_solve_command(
    strategy_name: &str,
    dictionary: &[Word],
    word: &str,
    details: bool,
    max_guesses: usize,
) -> Result<()> {
    let mut config = SolveConfig::new(word.to_string());
    config.max_guesses = max_guesses;

    let result = solve_word(config, dictionary, &mut new_player(strategy_name))?;
    print_solve_result(&result, details);
    Ok(())
}

fn run_benchmark_command(
    strategy_name: &str,
    dictionary: &[Word],
    count: usize,
    seed: Option<u64>,
    max_guesses: usize,
) -> Result<()> {
    let mut player = new_player(strategy_name);
    let seed = seed.unwrap_or_else(rand::random);
    println!(
        "Running benchmark on {count} random words with the {} strategy (seed {seed})...",
        player.strategy().name()
    );

    let secrets = sample_secrets(dictionary, count, seed);
    let result = run_benchmark(&mut player, dictionary, &secrets, max_guesses, true)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_compare_command(source: &str, target: &str, table: bool) -> Result<()> {
    let result = compare_words(source, target)?;
    print_compare_result(&result, table);
    Ok(())
}
