//! Display functions for command results

use super::formatters::{badged_word, length_badge, spaced_letters, word_count};
use crate::commands::{CheckResult, SolutionsResult};
use crate::core::ValidationOutcome;
use colored::Colorize;

/// Print the result of checking a word
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        spaced_letters(result.root_word.text()).bright_yellow().bold()
    );
    if !result.used_words.is_empty() {
        println!("Already used: {}", result.used_words.join(", "));
    }
    println!("{}", "─".repeat(60).cyan());

    println!("\nCandidate: {:?}", result.candidate);

    match &result.outcome {
        ValidationOutcome::Accepted(word) => {
            println!(
                "{}",
                format!("✅ Accepted: {}", badged_word(word)).green().bold()
            );
        }
        ValidationOutcome::Rejected(reason) => {
            println!("{}", format!("❌ {}", reason.title()).red().bold());
            println!("   {}", reason.message(&result.root_word));
        }
    }
}

/// Print every playable word for a root, grouped by length
pub fn print_solutions_result(result: &SolutionsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SOLUTIONS FOR:".bright_cyan().bold(),
        spaced_letters(result.root_word.text()).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\nNo dictionary words can be made from these letters.");
        return;
    }

    for (length, words) in result.by_length() {
        println!(
            "\n{} {}",
            length_badge(length).bright_cyan().bold(),
            format!("({})", word_count(words.len())).bright_black()
        );
        for line in words.chunks(8) {
            println!("   {}", line.join("  "));
        }
    }

    println!("\n📊 {}", "Totals:".bright_cyan().bold());
    println!("   Words:      {}", result.words.len());
    println!(
        "   Max score:  {}",
        result.max_score().to_string().bright_yellow().bold()
    );
}
