//! Word Advisor - CLI
//!
//! Entropy-ranked guessing advisor for word puzzles, with interactive,
//! batch, and JSON-emitting commands over the same engine.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use word_advisor::{
    commands::{
        SimulateConfig, SolveConfig, run_assist, run_dist, run_options, run_play, run_simulation,
        solve_word,
    },
    engine::Strategy,
    lexicon::{Lexicon, loader::load_words},
    output::{print_simulation_stats, print_solve_report},
};

#[derive(Parser)]
#[command(
    name = "word_advisor",
    about = "Word-guessing advisor ranking guesses by expected information gain",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: entropy (default), viable-entropy, min-expected, random
    #[arg(short, long, global = true, default_value = "entropy")]
    strategy: String,

    /// Answer list file (default: built-in list)
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Extra allowed-guess file merged with the answers
    #[arg(long, global = true)]
    allowed: Option<PathBuf>,

    /// Entries per ranking list
    #[arg(short = 'k', long, global = true, default_value = "10")]
    top_k: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against a randomly chosen secret (default)
    Play,

    /// Advise on a game running somewhere else (you relay the feedback)
    Assist,

    /// Rank next guesses for a history of guess:FEEDBACK entries
    Options {
        /// History entries like crane:BYBBG
        #[arg(value_name = "GUESS:FEEDBACK")]
        history: Vec<String>,

        /// Emit the complete unfiltered score lists
        #[arg(long)]
        full: bool,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show how a guess would split the remaining candidates
    Dist {
        /// The guess to analyze
        guess: String,

        /// History entries like crane:BYBBG
        #[arg(value_name = "GUESS:FEEDBACK")]
        history: Vec<String>,

        /// Show raw feedback-pattern buckets instead of the histogram
        #[arg(long)]
        patterns: bool,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Auto-solve a known target word and print the path
    Solve {
        /// The target word
        word: String,

        /// Show per-turn candidate counts and metrics
        #[arg(short, long)]
        verbose: bool,

        /// Force the opening guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },

    /// Run the solver across the answer list and report statistics
    Simulate {
        /// Limit the number of answers simulated
        #[arg(short, long)]
        limit: Option<usize>,

        /// Force the opening guess for every game
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },
}

fn load_lexicon(cli: &Cli) -> Result<Lexicon> {
    let answers = match &cli.answers {
        Some(path) => load_words(path)
            .with_context(|| format!("failed to load answers from {}", path.display()))?,
        None => {
            let builtin = Lexicon::builtin().context("built-in word lists are invalid")?;
            if cli.allowed.is_none() {
                return Ok(builtin);
            }
            // Custom extras over the built-in answers
            builtin.answers().to_vec()
        }
    };

    let extras = match &cli.allowed {
        Some(path) => load_words(path)
            .with_context(|| format!("failed to load extras from {}", path.display()))?,
        None => Vec::new(),
    };

    Lexicon::new(answers, extras).context("word lists failed validation")
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let lexicon = load_lexicon(&cli)?;
    let strategy = Strategy::from_name(&cli.strategy);
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play(&lexicon, cli.top_k),
        Commands::Assist => run_assist(&lexicon, cli.top_k),
        Commands::Options {
            history,
            full,
            json,
        } => run_options(&lexicon, &history, full, json, cli.top_k),
        Commands::Dist {
            guess,
            history,
            patterns,
            json,
        } => run_dist(&lexicon, &guess, &history, patterns, json),
        Commands::Solve {
            word,
            verbose,
            first_word,
        } => {
            let mut config = SolveConfig::new(word);
            config.strategy = strategy;
            config.first_guess = first_word;

            let report = solve_word(&lexicon, &config)?;
            print_solve_report(&report, verbose);
            Ok(())
        }
        Commands::Simulate { limit, first_word } => {
            let config = SimulateConfig {
                strategy,
                limit,
                first_guess: first_word,
                max_guesses: word_advisor::session::DEFAULT_MAX_GUESSES,
            };

            let stats = run_simulation(&lexicon, &config);
            print_simulation_stats(&stats);
            Ok(())
        }
    }
}
