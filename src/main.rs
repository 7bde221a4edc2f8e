//! Boggle board generator and solver - CLI
//!
//! Generates seeded 4x4 boards, solves them, checks word validity, and
//! benchmarks board generation throughput.

use anyhow::{Result, bail};
use boggle_solver::{
    commands::{check_word, generate_board, run_benchmark},
    dictionary::{Dictionary, DictionarySource, OverrideLists},
    generator::generate_seed_code,
    output::{print_benchmark_report, print_board_report, print_check_report},
    solver::SearchEngine,
};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "boggle_solver",
    about = "Seeded Boggle board generator with a trie-pruned exhaustive solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a Hunspell-style .aff file (requires --dic)
    #[arg(long, global = true)]
    aff: Option<PathBuf>,

    /// Path to a .dic lexicon file (requires --aff)
    #[arg(long, global = true)]
    dic: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a validated board (default - random seed if none given)
    Generate {
        /// Seed code; omit for a random one
        seed: Option<String>,

        /// List every findable word
        #[arg(short, long)]
        words: bool,
    },

    /// Solve the board for a seed without re-validating it
    Solve {
        /// Seed code naming the board
        seed: String,

        /// Minimum word length to count
        #[arg(short, long, default_value = "3")]
        min_length: usize,
    },

    /// Check whether a word counts for scoring
    Check {
        /// Word to check
        word: String,

        /// JSON file with {"additions": [], "blocklist": []}
        #[arg(short, long)]
        overrides: Option<PathBuf>,
    },

    /// Benchmark board generation throughput
    Benchmark {
        /// Number of boards to generate
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seeds are derived as {prefix}-0, {prefix}-1, ...
        #[arg(short, long, default_value = "bench")]
        seed_prefix: String,
    },
}

/// Resolve the dictionary source from the --aff/--dic flags
fn dictionary_source(aff: Option<PathBuf>, dic: Option<PathBuf>) -> Result<DictionarySource> {
    match (aff, dic) {
        (None, None) => Ok(DictionarySource::Embedded),
        (Some(aff), Some(dic)) => Ok(DictionarySource::Files { aff, dic }),
        _ => bail!("--aff and --dic must be given together"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let source = dictionary_source(cli.aff, cli.dic)?;
    let dictionary = Dictionary::new();
    let words = dictionary.load(&source).map_err(|e| anyhow::anyhow!(e))?;

    let command = cli.command.unwrap_or(Commands::Generate {
        seed: None,
        words: false,
    });

    match command {
        Commands::Generate { seed, words: show } => {
            let engine = SearchEngine::new(words);
            let seed = seed.unwrap_or_else(generate_seed_code);
            let report = generate_board(&seed, &engine);
            print_board_report(&report, show);
        }
        Commands::Solve { seed, min_length } => {
            let engine = SearchEngine::with_min_word_length(words, min_length);
            let report = generate_board(&seed, &engine);
            print_board_report(&report, true);
        }
        Commands::Check { word, overrides } => {
            let lists = load_overrides(overrides.as_deref())?;
            let report = check_word(&word, &lists, &dictionary);
            print_check_report(&report);
        }
        Commands::Benchmark { count, seed_prefix } => {
            let engine = SearchEngine::new(words);
            println!("Generating {count} boards with seed prefix {seed_prefix:?}...");
            let report = run_benchmark(&seed_prefix, count, &engine);
            print_benchmark_report(&report);
        }
    }

    Ok(())
}

fn load_overrides(path: Option<&std::path::Path>) -> Result<OverrideLists> {
    match path {
        None => Ok(OverrideLists::default()),
        Some(path) => {
            let json = fs::read_to_string(path)?;
            OverrideLists::from_json(&json)
                .map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))
        }
    }
}
