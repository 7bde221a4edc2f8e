//! Display functions for command results

use super::formatters::{distribution_bar, grid_rows};
use crate::commands::{BenchmarkReport, BoardReport, CheckReason, CheckReport};
use colored::Colorize;

/// Print a generated board and its solve statistics
pub fn print_board_report(report: &BoardReport, show_words: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BOARD:".bright_cyan().bold(),
        report.seed.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!();
    for row in grid_rows(&report.grid) {
        println!("   {}", row.bright_white().bold());
    }

    let result = &report.result;
    println!("\n📊 {}", "Words:".bright_cyan().bold());
    println!("   Findable words:   {}", result.all_words.len());
    println!(
        "   Longest length:   {}",
        format!("{}", result.longest_length).bright_yellow().bold()
    );
    println!(
        "   Longest words:    {}",
        result.longest_words.join(", ").green()
    );

    if show_words {
        println!("\n📖 {}", "All words:".bright_cyan().bold());
        for word in &result.all_words {
            println!("   {word}");
        }
    }
}

/// Print the outcome of a word validity check
pub fn print_check_report(report: &CheckReport) {
    let verdict = if report.valid {
        format!("✅ {} is a valid word", report.word.to_uppercase())
            .green()
            .bold()
    } else {
        format!("❌ {} is not a valid word", report.word.to_uppercase())
            .red()
            .bold()
    };
    println!("{verdict}");

    let reason = match report.reason {
        CheckReason::TooShort => "words must be at least 3 letters",
        CheckReason::Blocklisted => "removed by the administrator blocklist",
        CheckReason::AdminAddition => "added by the administrator",
        CheckReason::InDictionary => "found in the dictionary",
        CheckReason::NotInDictionary => "not found in the dictionary",
    };
    println!("   {}", reason.bright_black());
}

/// Print aggregate benchmark statistics
pub fn print_benchmark_report(report: &BenchmarkReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Boards generated: {}", report.boards);
    println!(
        "   Accepted:         {}",
        format!("{} ({:.1}%)", report.accepted, report.acceptance_rate())
            .green()
            .bold()
    );
    println!(
        "   Fallbacks:        {}",
        format!("{}", report.fallbacks).yellow()
    );
    println!("   Time taken:       {:.2}s", report.elapsed.as_secs_f64());
    println!("   Boards/second:    {:.1}", report.boards_per_second());

    println!("\n📈 {}", "Longest word length:".bright_cyan().bold());
    for &(length, count) in &report.longest_distribution {
        let pct = (count as f64 / report.boards as f64) * 100.0;
        let bar = distribution_bar(count, report.boards, 40);
        println!("   {length:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
