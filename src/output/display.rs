//! Display functions for command results

use super::formatters::{create_progress_bar, format_table, transform_name};
use crate::commands::{BenchmarkResult, Comparison, SolveResult};
use crate::core::format_transforms;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        let feedback = if step.is_correct() {
            "correct".green().bold().to_string()
        } else {
            format!("{} {}", step.distance, format_transforms(&step.transforms))
        };
        println!("\nTurn {}: {} {}", turn, step.word.to_uppercase(), feedback);

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
                if let Some(expected) = step.expected_remaining {
                    println!("  Expected:   {expected:.1} candidates");
                }

                if step.candidates_after > 0 {
                    let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({:.1}x reduction)",
                        ratio.log2(),
                        ratio
                    );
                }
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of comparing two strings
pub fn print_compare_result(result: &Comparison, show_table: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} → {} ",
        "COMPARE:".bright_cyan().bold(),
        result.source.bright_yellow().bold(),
        result.target.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Distance:    {}",
        result.distance.to_string().bright_yellow().bold()
    );
    println!("   Operations:  {}", format_transforms(&result.transforms));
    for (i, &transform) in result.transforms.iter().enumerate() {
        println!("     {}. {}", i + 1, transform_name(transform));
    }

    if show_table {
        println!("\n{}", "Distance table:".bright_cyan().bold());
        print!("{}", format_table(&result.table, &result.source, &result.target));
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        result.solved.to_string().green()
    );
    if result.failed > 0 {
        println!(
            "   Failed:           {}",
            result.failed.to_string().red().bold()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count:2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.worst_words.is_empty() {
        println!("\n🐢 {}", "Hardest words:".bright_cyan().bold());
        for (word, guesses) in &result.worst_words {
            println!("   {} ({guesses})", word.to_uppercase());
        }
    }
}
