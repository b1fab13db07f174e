//! Display functions for command results

use super::formatters::{create_progress_bar, word_columns};
use crate::commands::BenchmarkResult;
use crate::commands::benchmark::HIT_BUCKETS;
use crate::session::{Reply, messages};
use colored::Colorize;

/// Print the outcome of a one-shot search
pub fn print_search_result(reply: &Reply) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ПОИСК СЛОВ".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let (Some(outcome), Some(constraints)) = (&reply.outcome, &reply.constraints) else {
        println!("\n{}", reply.text);
        return;
    };

    if outcome.is_empty() {
        println!("\n{}", "😔 Слова не найдены. Попробуйте другие критерии.".red());
    } else {
        println!(
            "\n🎯 Найдено слов: {}\n",
            outcome.len().to_string().bright_yellow().bold()
        );
        for line in word_columns(outcome.shown(), 8) {
            println!("   {}", line.green());
        }
        if outcome.remaining() > 0 {
            println!(
                "\n   {}",
                format!("...и ещё {} слов", outcome.remaining()).bright_black()
            );
        }
    }

    println!("\n{}", messages::criteria(constraints));
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Searches:".bright_cyan().bold());
    println!("   Seed:             {}", result.seed);
    println!("   Trials:           {}", result.trials);
    println!("   Guesses/trial:    {}", result.guesses_per_trial);
    println!(
        "   Average hits:     {}",
        format!("{:.2}", result.average_hits).bright_yellow().bold()
    );
    println!("   Fewest hits:      {}", result.min_hits.to_string().green());
    println!("   Most hits:        {}", result.max_hits.to_string().yellow());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Searches/second:  {:.1}", result.searches_per_second);

    println!("\n✅ {}", "Checks:".bright_cyan().bold());
    print_check("Secret found", result.missed);
    print_check("Parallel = sequential", result.inconsistent);
    print_check("Clues accepted", result.conflicts);

    println!("\n📈 {}", "Hits per search:".bright_cyan().bold());
    let total: usize = result.distribution.values().sum();
    for (idx, (_, label)) in HIT_BUCKETS.iter().enumerate() {
        let count = result.distribution.get(&idx).copied().unwrap_or(0);
        let pct = if total == 0 {
            0.0
        } else {
            count as f64 / total as f64 * 100.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {label:>5}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    println!();
    if result.passed() {
        println!("{}", "All searches consistent".green().bold());
    } else {
        println!("{}", "Benchmark found inconsistent searches".red().bold());
    }
}

fn print_check(label: &str, failures: usize) {
    if failures == 0 {
        println!("   {label:<22} {}", "ok".green());
    } else {
        println!("   {label:<22} {}", format!("{failures} failed").red().bold());
    }
}
