//! Interactive manual-feedback helper
//!
//! For solving a game running somewhere else: the advisor suggests a
//! guess, the user plays whatever word they like in the real game and
//! relays its feedback, and the candidate set narrows accordingly.

use super::prompt;
use crate::engine::{RankConfig, rank};
use crate::lexicon::Lexicon;
use crate::output::formatters::feedback_tiles;
use crate::session::{Session, Status};
use anyhow::Result;
use colored::Colorize;

/// Run the interactive assist loop
///
/// # Errors
/// Fails only on terminal I/O errors; invalid entries are reported and
/// retried.
pub fn run_assist(lexicon: &Lexicon, top_k: usize) -> Result<()> {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD ADVISOR / ASSIST".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("\nAfter each guess in your game, enter its feedback:");
    println!("  G = right letter, right spot");
    println!("  Y = right letter, wrong spot");
    println!("  B = letter not in the word");
    println!("\nCommands: 'undo' drops the last row, 'new' restarts, 'quit' exits.\n");

    let mut session = Session::manual_feedback(lexicon);

    loop {
        let candidates = session.candidates();

        if candidates.is_empty() && !session.history().is_empty() {
            println!(
                "\n{}",
                "No word fits this feedback. One of the rows is wrong.".red()
            );
            match prompt("Command (undo/new/quit)")?.to_lowercase().as_str() {
                "undo" | "u" => {
                    if session.undo().is_some() {
                        println!("Dropped the last row.\n");
                    }
                    continue;
                }
                "new" | "n" => {
                    session = Session::manual_feedback(lexicon);
                    println!("\nStarting over.\n");
                    continue;
                }
                _ => return Ok(()),
            }
        }

        let turn = session.history().len() + 1;
        let rankings = rank(
            lexicon.guesses(),
            &candidates,
            &RankConfig {
                top_k,
                viable_k: top_k,
            },
        );

        println!("{}", "─".repeat(60));
        println!(
            "Turn {turn}: {} candidates remain",
            rankings.total_remaining.to_string().bright_yellow()
        );

        let suggestion = rankings.top_entropy.first().map(|s| s.word.clone());
        if let Some(best) = rankings.top_entropy.first() {
            println!(
                "Suggested guess: {}  ({:.3} bits, {:.1} expected remaining)",
                best.word.to_uppercase().bright_white().bold(),
                best.entropy,
                best.expected_remaining
            );
        }

        if candidates.len() <= 10 {
            println!("Remaining candidates:");
            for candidate in &candidates {
                println!("  • {}", candidate.text().to_uppercase());
            }
        }

        let input = prompt("\nWord you played (enter = suggestion, or command)")?;
        let word = match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(()),
            "new" | "n" => {
                session = Session::manual_feedback(lexicon);
                println!("\nStarting over.\n");
                continue;
            }
            "undo" | "u" => {
                if session.undo().is_some() {
                    println!("Dropped the last row.\n");
                } else {
                    println!("Nothing to undo.\n");
                }
                continue;
            }
            "" => match suggestion {
                Some(word) => word,
                None => continue,
            },
            other => other.to_string(),
        };

        let feedback_input = prompt("Feedback (B/Y/G, or 'win')")?;
        let feedback = if feedback_input.eq_ignore_ascii_case("win") {
            "G".repeat(lexicon.word_len())
        } else {
            feedback_input
        };

        match session.submit(&word, Some(&feedback)) {
            Ok(outcome) => {
                println!(
                    "  {} {}\n",
                    outcome.record.guess.text().to_uppercase(),
                    feedback_tiles(outcome.record.feedback)
                );

                if session.status() != Status::InProgress {
                    if outcome.win {
                        println!(
                            "{}",
                            format!("Solved in {turn} {}!", if turn == 1 { "guess" } else { "guesses" })
                                .green()
                                .bold()
                        );
                        println!("\nHistory:");
                        for (i, record) in session.history().iter().enumerate() {
                            println!(
                                "  {}. {} {}",
                                i + 1,
                                record.guess.text().to_uppercase(),
                                feedback_tiles(record.feedback)
                            );
                        }
                    } else {
                        println!("{}", "That was the last row, game over.".yellow());
                    }

                    match prompt("\nNew game? (yes/no)")?.to_lowercase().as_str() {
                        "yes" | "y" => {
                            session = Session::manual_feedback(lexicon);
                            println!("\nStarting over.\n");
                        }
                        _ => return Ok(()),
                    }
                }
            }
            Err(err) => println!("  {}\n", err.to_string().red()),
        }
    }
}
