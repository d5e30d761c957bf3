//! Interactive auto-mode game
//!
//! The engine picks a secret and the user plays against it in the
//! terminal, with ranked hints on demand.

use super::prompt;
use crate::engine::{RankConfig, rank};
use crate::lexicon::Lexicon;
use crate::output::formatters::{colored_guess, feedback_tiles};
use crate::session::{Session, Status};
use anyhow::Result;
use colored::Colorize;

/// Run the interactive game loop
///
/// # Errors
/// Fails only on terminal I/O errors; bad guesses are reported and retried.
pub fn run_play(lexicon: &Lexicon, top_k: usize) -> Result<()> {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD ADVISOR / PLAY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("\nType a guess, 'hint' for suggestions, or 'quit' to leave.\n");

    loop {
        let mut session = Session::auto(lexicon);
        println!(
            "I picked a {}-letter word. You have {} guesses.\n",
            session.word_len(),
            session.max_guesses()
        );

        while session.status() == Status::InProgress {
            let turn = session.history().len() + 1;
            let input = prompt(&format!("[{turn}/{}] Your guess", session.max_guesses()))?;

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    if let Some(secret) = session.secret() {
                        println!("\nThe word was {}.\n", secret.text().to_uppercase().bold());
                    }
                    return Ok(());
                }
                "hint" | "h" => {
                    show_hints(&session, top_k);
                    continue;
                }
                guess => match session.submit(guess, None) {
                    Ok(outcome) => {
                        println!(
                            "  {}  {}   {} candidates remain\n",
                            colored_guess(outcome.record.guess.text(), outcome.record.feedback),
                            feedback_tiles(outcome.record.feedback),
                            session.candidates().len()
                        );
                    }
                    Err(err) => println!("  {}\n", err.to_string().red()),
                },
            }
        }

        match session.status() {
            Status::Won => {
                let turns = session.history().len();
                println!(
                    "{}",
                    format!("You got it in {turns} {}!", plural(turns))
                        .green()
                        .bold()
                );
            }
            _ => {
                if let Some(secret) = session.secret() {
                    println!(
                        "{}",
                        format!("Out of guesses. The word was {}.", secret.text().to_uppercase())
                            .red()
                            .bold()
                    );
                }
            }
        }

        if prompt("\nPlay again? (yes/no)")?.to_lowercase() != "yes" {
            println!("\nThanks for playing!\n");
            return Ok(());
        }
        println!();
    }
}

fn show_hints(session: &Session<'_>, top_k: usize) {
    let candidates = session.candidates();
    let rankings = rank(
        session.lexicon().guesses(),
        &candidates,
        &RankConfig {
            top_k,
            viable_k: top_k,
        },
    );

    println!("\n  {} candidates remain", rankings.total_remaining);
    for score in rankings.top_entropy.iter().take(5) {
        println!(
            "  {}  {:.3} bits, {:.1} expected",
            score.word.to_uppercase().bright_white(),
            score.entropy,
            score.expected_remaining
        );
    }
    println!();
}

fn plural(turns: usize) -> &'static str {
    if turns == 1 { "guess" } else { "guesses" }
}
