//! Semantix - CLI
//!
//! Daily word game over word2vec embeddings: exposes the daily word,
//! guess scoring, and neighbor inspection from the command line. The
//! model artifact is loaded once at startup; any load failure is fatal.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use semantix::{
    game::{
        DEFAULT_TOP_N, DailyWordResponse, ErrorResponse, GameError, GameService, GuessResponse,
    },
    model::{ModelFormat, load_model},
    output::{print_daily_word, print_guess_result, print_model_info, print_neighbors},
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "semantix",
    about = "Cemantix-style daily word game over word2vec embeddings",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the word2vec model artifact (.bin = binary, else text)
    #[arg(short, long, global = true, default_value = "model.bin")]
    model: PathBuf,

    /// Size of the frequent-word pool the daily word is drawn from
    #[arg(long, global = true, default_value_t = DEFAULT_TOP_N)]
    top_n: usize,

    /// Play a specific date (YYYY-MM-DD) instead of today
    #[arg(short, long, global = true)]
    date: Option<NaiveDate>,

    /// Emit JSON instead of formatted output
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the daily word
    Daily,

    /// Score a guess against the daily word
    Guess {
        /// The word to guess
        word: String,
    },

    /// List the vocabulary tokens nearest to a word
    Neighbors {
        /// Word to inspect
        word: String,

        /// Number of neighbors to show
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Show model statistics
    Info,
}

fn main() -> Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();

    let format = ModelFormat::from_path(&cli.model);
    let store = load_model(&cli.model, format)
        .with_context(|| format!("failed to load model from {}", cli.model.display()))?;

    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let service = GameService::new(store, cli.top_n);

    match cli.command {
        Commands::Daily => {
            let word = service.daily_word(date);
            if cli.json {
                let response = DailyWordResponse { daily_word: word };
                println!("{}", serde_json::to_string(&response)?);
            } else {
                print_daily_word(&word);
            }
        }
        Commands::Guess { word } => match service.submit_guess(&word, date) {
            Ok(result) => {
                if cli.json {
                    println!("{}", serde_json::to_string(&GuessResponse::from(&result))?);
                } else {
                    print_guess_result(&result);
                }
            }
            Err(err) => return report_game_error(&err, cli.json),
        },
        Commands::Neighbors { word, count } => match service.nearest(&word, count) {
            Ok(neighbors) => {
                if cli.json {
                    println!("{}", serde_json::to_string(&neighbors)?);
                } else {
                    print_neighbors(&word, &neighbors);
                }
            }
            Err(err) => return report_game_error(&err, cli.json),
        },
        Commands::Info => {
            print_model_info(service.store(), cli.top_n);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Report a user-visible request error without a backtrace.
///
/// These are the 400-equivalents of the transport layer; in JSON mode the
/// body matches what a server would return.
fn report_game_error(err: &GameError, json: bool) -> Result<ExitCode> {
    if json {
        println!("{}", serde_json::to_string(&ErrorResponse::from(err))?);
    } else {
        eprintln!("error: {err}");
    }
    Ok(ExitCode::FAILURE)
}
