//! Five Letters - CLI
//!
//! Helper for the Russian five-letter word game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use five_letters::{
    commands::{BenchmarkConfig, SearchArgs, run_benchmark, run_search, run_simple},
    dictionary::Dictionary,
    logging::{ActionLog, FileActionLog, NullActionLog},
    output::{print_benchmark_result, print_search_result},
    session::SessionStore,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "five_letters",
    about = "Find Russian five-letter words from game clues",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(
        short = 'w',
        long,
        global = true,
        env = "FIVE_LETTERS_WORDLIST",
        default_value = "embedded"
    )]
    wordlist: String,

    /// Directory for user_actions.log; actions are not logged without it
    #[arg(long, global = true, env = "LOG_DIR")]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based conversation without TUI)
    Simple,

    /// Answer all four questions at once and print the matches
    Search {
        /// Letters that are in the word (yellow and green)
        #[arg(short, long, default_value = "-")]
        required: String,

        /// Letters that are not in the word (grey)
        #[arg(short, long, default_value = "-")]
        excluded: String,

        /// Known positions, e.g. "1а 3р"
        #[arg(short, long, default_value = "-")]
        positions: String,

        /// Positions where letters are not, e.g. "2ае 4е"
        #[arg(long, default_value = "-")]
        not_at: String,
    },

    /// Play random games and check every search finds the secret
    Benchmark {
        /// Number of random secrets
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Random guesses scored against each secret
        #[arg(short, long, default_value = "2")]
        guesses: usize,

        /// RNG seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    let dictionary = match wordlist {
        "embedded" => Dictionary::embedded()?,
        path => Dictionary::load(path)?,
    };
    Ok(dictionary)
}

/// Action log sink based on --log-dir
fn open_action_log(log_dir: Option<&PathBuf>) -> Result<Box<dyn ActionLog>> {
    match log_dir {
        Some(dir) => {
            let log = FileActionLog::open_in(dir)
                .with_context(|| format!("cannot open action log in {}", dir.display()))?;
            Ok(Box::new(log))
        }
        None => Ok(Box::new(NullActionLog)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // A dictionary that cannot be loaded aborts startup
    let dictionary = load_dictionary(&cli.wordlist)?;
    let log = open_action_log(cli.log_dir.as_ref())?;
    let mut store = SessionStore::new(&dictionary, log);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(store),
        Commands::Simple => {
            run_simple(&mut store)?;
            Ok(())
        }
        Commands::Search {
            required,
            excluded,
            positions,
            not_at,
        } => {
            let args = SearchArgs {
                required,
                excluded,
                positions,
                not_at,
            };
            run_search_command(&mut store, &args)
        }
        Commands::Benchmark {
            count,
            guesses,
            seed,
        } => {
            run_benchmark_command(&dictionary, count, guesses, seed);
            Ok(())
        }
    }
}

fn run_play_command(store: SessionStore<'_, Box<dyn ActionLog>>) -> Result<()> {
    use five_letters::interactive::{App, run_tui};

    let app = App::new(store);
    run_tui(app)
}

fn run_search_command(
    store: &mut SessionStore<'_, Box<dyn ActionLog>>,
    args: &SearchArgs,
) -> Result<()> {
    match run_search(store, args) {
        Ok(reply) => {
            print_search_result(&reply);
            Ok(())
        }
        Err(rejected) => {
            eprintln!("{}", rejected.explanation);
            Err(anyhow::anyhow!(rejected))
        }
    }
}

fn run_benchmark_command(dictionary: &Dictionary, count: usize, guesses: usize, seed: Option<u64>) {
    println!(
        "Running benchmark on {count} random secrets ({guesses} guesses each, {} words)...",
        dictionary.len()
    );

    let result = run_benchmark(
        dictionary,
        BenchmarkConfig {
            trials: count,
            guesses,
            seed,
            show_progress: true,
        },
    );
    print_benchmark_result(&result);
}
