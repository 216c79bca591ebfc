//! Simple interactive CLI mode
//!
//! The player suggests a guess, the user plays it in the real game and types
//! back the distance and operation list the game reported.

use crate::core::{Transform, Word, format_transforms, parse_transforms};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{DistlePlayer, PlayerError, Strategy};
use anyhow::{Context, Result, bail};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the user typed at the feedback prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum Reply {
    Quit,
    NewGame,
    Solved,
    Feedback(usize, Vec<Transform>),
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// output.
pub fn run_simple<S: Strategy>(
    player: &mut DistlePlayer<S>,
    dictionary: &[Word],
    max_guesses: usize,
) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(player, dictionary, max_guesses, stdin.lock(), stdout.lock())
}

/// Interactive loop over arbitrary input and output streams
///
/// Ends on `quit` or end of input.
///
/// # Errors
///
/// Returns an error on I/O failure.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_session<S: Strategy>(
    player: &mut DistlePlayer<S>,
    dictionary: &[Word],
    max_guesses: usize,
    mut input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    writeln!(out, "\n{}", "═".repeat(62).cyan())?;
    writeln!(out, "{}", "              Distle Solver - Interactive Mode".bold())?;
    writeln!(out, "{}\n", "═".repeat(62).cyan())?;
    writeln!(out, "After each guess, enter what the game reported:")?;
    writeln!(out, "  - the distance followed by the operations, e.g. '3 TRD'")?;
    writeln!(out, "  - or just the operations, e.g. 'R, I'")?;
    writeln!(out, "  - or 'win' if the guess was right")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for new game\n")?;

    player.start_new_game(dictionary.iter().cloned(), max_guesses);
    let mut turn = 1;

    loop {
        let guess = match player.make_guess() {
            Ok(guess) => guess,
            Err(e) => {
                writeln!(out, "\n{} {e}", "No guess available:".red().bold())?;
                writeln!(out, "Your feedback may be incorrect. Type 'new' to start over.\n")?;
                match prompt(&mut input, &mut out, "Command")?.as_deref() {
                    Some("new" | "n") => {
                        player.start_new_game(dictionary.iter().cloned(), max_guesses);
                        turn = 1;
                        writeln!(out, "\nNew game started!\n")?;
                        continue;
                    }
                    _ => return Ok(()),
                }
            }
        };

        let candidates: Vec<&Word> = player.session().candidates().iter().collect();
        writeln!(out, "{}", "─".repeat(60).cyan())?;
        writeln!(out, "Turn {turn}: {} candidates remaining", candidates.len())?;
        writeln!(out, "{}", "─".repeat(60).cyan())?;

        writeln!(out, "\nSuggested guess: {}", guess.text().to_uppercase().bright_yellow().bold())?;
        if candidates.len() > 1 {
            let metrics = calculate_metrics(&guess, &candidates);
            writeln!(out, "   Entropy:          {:.3} bits", metrics.entropy)?;
            writeln!(out, "   Expected remain:  {:.1} candidates", metrics.expected_remaining)?;
            writeln!(out, "   Worst case:       {} candidates", metrics.max_partition)?;
        }
        writeln!(out)?;

        if candidates.len() <= 10 {
            writeln!(out, "Remaining candidates:")?;
            for candidate in &candidates {
                writeln!(out, "  • {}", candidate.text().to_uppercase())?;
            }
            writeln!(out)?;
        }

        let reply = loop {
            let Some(line) = prompt(&mut input, &mut out, "Enter feedback (distance and ops, 'win', or command)")? else {
                return Ok(());
            };
            match parse_reply(&line) {
                Ok(reply) => break reply,
                Err(e) => writeln!(out, "{} {e}\n", "Invalid feedback!".red())?,
            }
        };

        match reply {
            Reply::Quit => {
                writeln!(out, "\nThanks for playing!\n")?;
                return Ok(());
            }
            Reply::NewGame => {
                player.start_new_game(dictionary.iter().cloned(), max_guesses);
                turn = 1;
                writeln!(out, "\nNew game started!\n")?;
            }
            Reply::Solved => {
                writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
                writeln!(
                    out,
                    "  {} {} in {} {}",
                    "Solved:".bright_green().bold(),
                    guess.text().to_uppercase().bright_white().bold(),
                    turn.to_string().bright_cyan().bold(),
                    if turn == 1 { "guess" } else { "guesses" }
                )?;
                writeln!(out, "{}\n", "═".repeat(60).bright_cyan())?;

                match prompt(&mut input, &mut out, "Play again? (yes/no)")?.as_deref() {
                    Some("yes" | "y") => {
                        player.start_new_game(dictionary.iter().cloned(), max_guesses);
                        turn = 1;
                        writeln!(out, "\nNew game started!\n")?;
                    }
                    _ => {
                        writeln!(out, "\nThanks for playing!\n")?;
                        return Ok(());
                    }
                }
            }
            Reply::Feedback(distance, transforms) => {
                match player.get_feedback(&guess, distance, &transforms) {
                    Ok(summary) => {
                        writeln!(
                            out,
                            "{} {} → {} candidates\n",
                            format_transforms(&transforms).bright_white(),
                            summary.candidates_before,
                            summary.candidates_after
                        )?;
                    }
                    Err(e @ PlayerError::MalformedFeedback { .. }) => {
                        // The round was ignored; the same guess is not offered again
                        writeln!(out, "{} {e}\n", "Feedback ignored:".yellow())?;
                    }
                    Err(e) => writeln!(out, "{} {e}\n", "Feedback rejected:".red())?,
                }
                turn += 1;
            }
        }
    }
}

/// Parse one line of feedback
///
/// Accepts `"<distance> <ops>"`, just `"<ops>"`, the commands `quit`/`new`,
/// and `win` (also a bare `0`).
fn parse_reply(line: &str) -> Result<Reply> {
    let line = line.trim().to_lowercase();

    match line.as_str() {
        "quit" | "q" | "exit" => return Ok(Reply::Quit),
        "new" | "n" => return Ok(Reply::NewGame),
        "win" | "correct" | "yes" | "solved" => return Ok(Reply::Solved),
        "" => bail!("empty input"),
        _ => {}
    }

    let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line.as_str(), ""));
    let (distance, transforms) = if let Ok(distance) = head.parse::<usize>() {
        let transforms = parse_transforms(rest).context("could not parse operations")?;
        (distance, transforms)
    } else {
        let transforms = parse_transforms(&line).context("could not parse operations")?;
        (transforms.len(), transforms)
    };

    if distance == 0 && transforms.is_empty() {
        return Ok(Reply::Solved);
    }
    Ok(Reply::Feedback(distance, transforms))
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt(input: &mut impl BufRead, out: &mut impl Write, text: &str) -> Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use Transform::{Delete, Replace, Transpose};

    fn play(dictionary: &[&str], script: &str) -> String {
        colored::control::set_override(false);
        let dictionary = words_from_slice(dictionary);
        let mut player = DistlePlayer::default();
        let mut out = Vec::new();
        run_session(&mut player, &dictionary, 10, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_reply_forms() {
        assert_eq!(
            parse_reply("3 TRD").unwrap(),
            Reply::Feedback(3, vec![Transpose, Replace, Delete])
        );
        assert_eq!(
            parse_reply("T, R, D").unwrap(),
            Reply::Feedback(3, vec![Transpose, Replace, Delete])
        );
        assert_eq!(parse_reply("1 [R]").unwrap(), Reply::Feedback(1, vec![Replace]));
        assert_eq!(parse_reply("2 R").unwrap(), Reply::Feedback(2, vec![Replace]));
        assert_eq!(parse_reply("WIN").unwrap(), Reply::Solved);
        assert_eq!(parse_reply("0").unwrap(), Reply::Solved);
        assert_eq!(parse_reply("quit").unwrap(), Reply::Quit);
        assert_eq!(parse_reply("new").unwrap(), Reply::NewGame);
    }

    #[test]
    fn parse_reply_rejects_garbage() {
        assert!(parse_reply("").is_err());
        assert!(parse_reply("3 XYZ").is_err());
        assert!(parse_reply("hello").is_err());
    }

    #[test]
    fn session_quits_immediately() {
        let output = play(&["cat", "bat"], "quit\n");
        assert!(output.contains("Suggested guess: CAT"));
        assert!(output.contains("Thanks for playing!"));
    }

    #[test]
    fn session_follows_feedback_to_the_secret() {
        // Secret is "bat": guessing "cat" reports a single replacement
        let output = play(&["cat", "bat"], "1 R\nwin\nno\n");

        assert!(output.contains("Suggested guess: CAT"));
        assert!(output.contains("Suggested guess: BAT"));
        assert!(output.contains("Solved: BAT in 2 guesses"));
    }

    #[test]
    fn session_reports_malformed_feedback() {
        let output = play(&["cat", "bat", "hat"], "2 R\nquit\n");
        assert!(output.contains("Feedback ignored:"));
    }

    #[test]
    fn session_ends_at_end_of_input() {
        let output = play(&["cat", "bat"], "");
        assert!(output.contains("Suggested guess: CAT"));
    }
}
