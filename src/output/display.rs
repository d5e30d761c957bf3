//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, feedback_tiles};
use crate::api::{PatternCountsResponse, RemainingDistributionResponse};
use crate::commands::simulate::SimulationStats;
use crate::commands::solve::SolveReport;
use crate::engine::{Rankings, WordScore};
use colored::Colorize;

fn print_score_section(title: &str, scores: &[WordScore]) {
    if scores.is_empty() {
        return;
    }

    println!("\n{}", title.bright_cyan().bold());
    for score in scores {
        println!(
            "  {}  {}  {}",
            score.word.to_uppercase().bright_white(),
            format!("{:>6.3} bits", score.entropy).bright_yellow(),
            format!("{:>7.2} expected", score.expected_remaining).bright_black(),
        );
    }
}

/// Print the best-options report for a history
pub fn print_rankings(rankings: &Rankings) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}",
        "Remaining candidates:".bright_cyan().bold(),
        rankings.total_remaining.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if rankings.total_remaining == 0 {
        println!(
            "\n{}",
            "No word fits this history. Check the entered feedback.".red()
        );
        return;
    }

    print_score_section("Best information (top entropy)", &rankings.top_entropy);
    print_score_section("Fewest expected remaining", &rankings.top_remaining);
    print_score_section("Viable answers", &rankings.viable_answers);
    print_score_section("Least information (bottom entropy)", &rankings.bot_entropy);
    print_score_section("Most expected remaining", &rankings.bot_remaining);
}

/// Print the unfiltered full score lists
pub fn print_full_options(options: &crate::engine::FullOptions) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} viable answers, {} scored guesses",
        "Full options:".bright_cyan().bold(),
        options.viable_answers.len().to_string().bright_yellow(),
        options.viable_guesses.len().to_string().bright_yellow(),
    );
    println!("{}", "═".repeat(60).cyan());

    print_score_section("Viable answers", &options.viable_answers);
    print_score_section("All guesses", &options.viable_guesses);
}

/// Print the remaining-count histogram for one guess
pub fn print_remaining_distribution(response: &RemainingDistributionResponse) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}",
        "Distribution for".bright_cyan().bold(),
        response.guess.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if response.total_remaining == 0 {
        println!("\n{}", "No candidates remain for this history.".red());
        return;
    }

    println!(
        "\n  Candidates now:     {}",
        response.total_remaining.to_string().bright_white()
    );
    println!(
        "  Expected remaining: {}",
        format!("{:.2}", response.expected_remaining).bright_yellow()
    );

    let max_occurrences = response.distribution.values().copied().max().unwrap_or(1);
    println!("\n  remaining → candidates");
    for (&remaining, &occurrences) in &response.distribution {
        let bar = create_progress_bar(occurrences as f64, max_occurrences as f64, 30);
        println!("  {remaining:>9} │ {} {occurrences}", bar.green());
    }
}

/// Print pattern buckets for one guess, largest first
pub fn print_pattern_counts(response: &PatternCountsResponse, limit: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}",
        "Feedback patterns for".bright_cyan().bold(),
        response.guess.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if response.total_remaining == 0 {
        println!("\n{}", "No candidates remain for this history.".red());
        return;
    }

    let mut buckets: Vec<(&String, &usize)> = response.pattern_counts.iter().collect();
    buckets.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    println!(
        "\n  {} patterns over {} candidates",
        buckets.len(),
        response.total_remaining
    );
    for (pattern, count) in buckets.into_iter().take(limit) {
        let tiles = crate::core::Feedback::parse(pattern)
            .map(feedback_tiles)
            .unwrap_or_else(|_| pattern.to_string());
        println!("  {tiles}  {pattern}  {count}");
    }
}

/// Print the per-turn trace of an automated solve
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        report.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in report.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&step.word, step.feedback),
            feedback_tiles(step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Entropy:    {:.3} bits", step.entropy);
            println!("  Expected:   {:.1} candidates", step.expected_remaining);
        }
    }

    println!();
    if report.success {
        println!(
            "{}",
            format!("Solved in {} guesses!", report.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Failed to solve in {} guesses", report.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print aggregate simulation statistics
pub fn print_simulation_stats(stats: &SimulationStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n  Games played:     {}", stats.games);
    println!(
        "  Wins:             {} {}",
        stats.wins,
        format!("({:.1}%)", stats.win_rate * 100.0).green()
    );
    if stats.fails > 0 {
        println!("  Fails:            {}", stats.fails.to_string().red());
    }
    println!(
        "  Mean rounds:      {}",
        format!("{:.3}", stats.mean_rounds_win_only)
            .bright_yellow()
            .bold()
    );
    println!("  Median rounds:    {:.1}", stats.median_rounds_win_only);
    println!(
        "  Mean incl. fails: {:.3}",
        stats.mean_rounds_including_fails
    );
    println!("  Elapsed:          {:.2}s", stats.elapsed.as_secs_f64());

    println!("\n  {}", "Rounds distribution".bright_cyan().bold());
    let max_count = stats.rounds.values().copied().max().unwrap_or(1);
    for (&rounds, &count) in &stats.rounds {
        let bar = create_progress_bar(count as f64, max_count as f64, 30);
        let pct = count as f64 / stats.games as f64 * 100.0;
        println!("  {rounds} guesses: {} {count:4} ({pct:4.1}%)", bar.green());
    }
}
