//! Display functions for command results

use super::formatters::closeness_bar;
use crate::game::GuessResult;
use crate::model::VectorStore;
use colored::Colorize;

/// Print the daily word
pub fn print_daily_word(word: &str) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Today's word: {}",
        word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Print a scored guess
pub fn print_guess_result(result: &GuessResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Guess: {}",
        result.guess.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("  Distance:   {:.4}", result.distance);
    println!(
        "  Closer:     {} of {} words ({}%)",
        result.closer_count,
        result.total,
        result.percentile_string()
    );
    println!(
        "  Warmth:     {}",
        closeness_bar(result.percentile(), 30).green()
    );

    println!();
    if result.closer_count == 0 {
        println!("{}", "🎯 Found it!".green().bold());
    } else if result.percentile() < 1.0 {
        println!("{}", "🔥 Burning hot!".bright_red().bold());
    } else if result.percentile() < 10.0 {
        println!("{}", "♨️  Warm".yellow());
    } else {
        println!("{}", "🧊 Cold".blue());
    }
}

/// Print a nearest-neighbor listing
pub fn print_neighbors(word: &str, neighbors: &[(String, f32)]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "NEAREST TO:".bright_cyan().bold(),
        word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    for (rank, (token, distance)) in neighbors.iter().enumerate() {
        println!("  {:>3}. {token:<24} {distance:.4}", rank + 1);
    }
}

/// Print model statistics
pub fn print_model_info(store: &VectorStore, top_n: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "MODEL".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("  Vocabulary:  {} tokens", store.len());
    println!("  Dimension:   {}", store.dim());
    println!("  Daily pool:  top {} tokens", top_n.min(store.len()));

    let sample: Vec<&str> = store
        .tokens()
        .iter()
        .take(10)
        .map(String::as_str)
        .collect();
    println!("  Most frequent: {}", sample.join(", "));
}
