//! Simple interactive CLI mode
//!
//! Text-based flashcard loop without TUI

use crate::output::formatters::{describe_transition, familiarity_dots, status_line};
use crate::selection::{Mode, Session};
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};

/// Outcome of one drill inside the simple loop
enum DrillExit {
    Menu,
    Quit,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: Rng>(session: &mut Session<R>) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_simple_with(session, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the simple loop against arbitrary input and output
///
/// End of input behaves like `quit`.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<R: Rng, I: BufRead, W: Write>(
    session: &mut Session<R>,
    input: &mut I,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Vocabulary Trainer - Simple Mode             ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Commands: 'learn' for new words, 'review' to revise, 'status', 'quit'\n")?;
    writeln!(out, "{}", status_line(&session.status()))?;

    loop {
        let Some(command) = prompt(input, out, "\nCommand")? else {
            break;
        };

        match command.to_lowercase().as_str() {
            "learn" | "l" | "new" => {
                if matches!(drill(session, Mode::NewWord, input, out)?, DrillExit::Quit) {
                    break;
                }
            }
            "review" | "r" => {
                if matches!(drill(session, Mode::Review, input, out)?, DrillExit::Quit) {
                    break;
                }
            }
            "status" | "s" => writeln!(out, "{}", status_line(&session.status()))?,
            "quit" | "q" | "exit" => break,
            "" => {}
            other => writeln!(out, "❌ Unknown command '{other}'")?,
        }
    }

    writeln!(out, "\n👋 Bye! {}\n", status_line(&session.status()))?;
    Ok(())
}

fn drill<R: Rng, I: BufRead, W: Write>(
    session: &mut Session<R>,
    mode: Mode,
    input: &mut I,
    out: &mut W,
) -> Result<DrillExit> {
    writeln!(out, "\n── {} mode ── rate 0/1/2, 'next', 'back'", mode.label())?;

    let mut current = session.next_word(mode);
    loop {
        let Some(index) = current else {
            writeln!(out, "\n{}", mode.empty_message())?;
            return Ok(DrillExit::Menu);
        };

        let entry = session.entry(index)?;
        writeln!(
            out,
            "\n  {}  -  {}  [{}]",
            entry.term(),
            entry.meaning(),
            familiarity_dots(entry.familiarity())
        )?;

        // Ratings keep the same word on screen until 'next'
        loop {
            let Some(command) = prompt(input, out, "Rate")? else {
                return Ok(DrillExit::Quit);
            };

            match command.to_lowercase().as_str() {
                rating @ ("0" | "1" | "2") => {
                    let rating: u8 = rating.parse()?;
                    let transition = session.submit(index, rating)?;
                    let entry = session.entry(index)?;
                    writeln!(out, "✓ {}", describe_transition(entry, transition))?;
                }
                "next" | "n" | "" => {
                    current = session.next_word(mode);
                    break;
                }
                "back" | "b" => return Ok(DrillExit::Menu),
                "quit" | "q" => return Ok(DrillExit::Quit),
                other => writeln!(out, "❌ Unknown input '{other}' (0/1/2, next, back)")?,
            }
        }
    }
}

/// Print a prompt and read one trimmed line; `None` on end of input
fn prompt<I: BufRead, W: Write>(input: &mut I, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
