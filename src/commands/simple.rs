//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: one candidate per line.

use crate::core::{Rejection, ValidationOutcome, WordValidator};
use crate::dictionary::Dictionary;
use crate::output::formatters::{badged_word, spaced_letters, word_count};
use crate::session::Session;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<D: Dictionary + ?Sized, R: Rng + ?Sized>(
    session: &mut Session,
    validator: &WordValidator<'_, D>,
    rng: &mut R,
) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(stdin.lock(), stdout.lock(), session, validator, rng)
}

/// Run the simple game loop over arbitrary input and output
///
/// Returns when the player quits or the input ends.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<I, O, D, R>(
    mut input: I,
    mut output: O,
    session: &mut Session,
    validator: &WordValidator<'_, D>,
    rng: &mut R,
) -> Result<()>
where
    I: BufRead,
    O: Write,
    D: Dictionary + ?Sized,
    R: Rng + ?Sized,
{
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                 Word Scramble - Simple Mode                  ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;

    writeln!(output, "Make as many words as you can from the letters of the root word.")?;
    writeln!(output, "Each letter can be used as often as it appears in the root word.\n")?;
    writeln!(output, "Commands: /new for a new word, /words to list your words, /quit to exit\n")?;

    write_root(&mut output, session)?;

    loop {
        let Some(line) = read_input(&mut input, &mut output, "Word")? else {
            writeln!(output, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        };

        match line.trim() {
            "/quit" | "/q" | "/exit" => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "/new" | "/n" => {
                session.restart(rng);
                writeln!(output, "\n🔄 New game started!\n")?;
                write_root(&mut output, session)?;
            }
            "/words" | "/w" => write_used_words(&mut output, session)?,
            _ => {
                let outcome = session.submit(&line, validator);
                write_outcome(&mut output, session, &outcome)?;
            }
        }
    }
}

fn write_root<O: Write>(output: &mut O, session: &Session) -> io::Result<()> {
    writeln!(output, "────────────────────────────────────────────────────────────")?;
    writeln!(
        output,
        "Root word: {}",
        spaced_letters(session.root_word().text()).bright_yellow().bold()
    )?;
    writeln!(output, "────────────────────────────────────────────────────────────\n")
}

fn write_outcome<O: Write>(
    output: &mut O,
    session: &Session,
    outcome: &ValidationOutcome,
) -> io::Result<()> {
    match outcome {
        ValidationOutcome::Accepted(word) => {
            writeln!(output, "{} {}", "✓".green().bold(), badged_word(word).bright_white())?;
            writeln!(
                output,
                "  {} | score {}\n",
                word_count(session.used_words().len()),
                session.score().to_string().bright_cyan().bold()
            )
        }
        // Blank lines are simply skipped, like an empty submit
        ValidationOutcome::Rejected(Rejection::Empty) => Ok(()),
        ValidationOutcome::Rejected(reason) => writeln!(
            output,
            "{} {}: {}\n",
            "✗".red().bold(),
            reason.title().red().bold(),
            reason.message(session.root_word())
        ),
    }
}

fn write_used_words<O: Write>(output: &mut O, session: &Session) -> io::Result<()> {
    if session.used_words().is_empty() {
        return writeln!(output, "No words yet.\n");
    }

    writeln!(output, "\nYour words ({}):", session.used_words().len())?;
    for word in session.used_words() {
        writeln!(output, "  {}", badged_word(word))?;
    }
    writeln!(output, "Score: {}\n", session.score())
}

/// Prompt and read one line; `None` at end of input
fn read_input<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RootWord;
    use crate::dictionary::WordListDictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn play(lines: &str, session: &mut Session) -> String {
        let dict = WordListDictionary::from_content("silk\nworm\nmilk\nsilkworm\n");
        let validator = WordValidator::new(&dict);
        let mut rng = StdRng::seed_from_u64(5);
        let mut output = Vec::new();

        run_simple_with(
            Cursor::new(lines.to_string()),
            &mut output,
            session,
            &validator,
            &mut rng,
        )
        .unwrap();

        String::from_utf8(output).unwrap()
    }

    #[test]
    fn accepted_words_recorded() {
        let mut session = Session::with_root(RootWord::new("silkworm").unwrap());
        let output = play("silk\nWorm\n/quit\n", &mut session);

        assert_eq!(session.used_words(), ["worm", "silk"]);
        assert!(output.contains("④ silk"));
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn rejections_reported() {
        let mut session = Session::with_root(RootWord::new("silkworm").unwrap());
        let output = play("silk\nsilk\ncat\nwilk\n", &mut session);

        assert!(output.contains("Word used already"));
        assert!(output.contains("Word not possible"));
        assert!(output.contains("Word not recognized"));
        assert_eq!(session.used_words(), ["silk"]);
    }

    #[test]
    fn blank_line_ignored() {
        let mut session = Session::with_root(RootWord::new("silkworm").unwrap());
        let output = play("\n   \n", &mut session);

        assert!(!output.contains("Nothing entered"));
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn new_game_clears_words() {
        let mut session = Session::with_root(RootWord::new("silkworm").unwrap());
        let output = play("silk\n/new\n", &mut session);

        assert!(output.contains("New game started"));
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn words_command_lists_words() {
        let mut session = Session::with_root(RootWord::new("silkworm").unwrap());
        let output = play("silk\nmilk\n/words\n", &mut session);

        assert!(output.contains("Your words (2)"));
        assert!(output.contains("Score: 8"));
    }

    #[test]
    fn short_command_aliases() {
        let mut session = Session::with_root(RootWord::new("silkworm").unwrap());
        let output = play("silk\n/w\n/q\nmilk\n", &mut session);

        assert!(output.contains("Your words (1)"));
        assert!(output.contains("Thanks for playing"));
        assert_eq!(session.used_words(), ["silk"]);

        let mut session = Session::with_root(RootWord::new("silkworm").unwrap());
        play("silk\n/n\n/exit\n", &mut session);
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn end_of_input_exits() {
        let mut session = Session::with_root(RootWord::new("silkworm").unwrap());
        let output = play("", &mut session);
        assert!(output.contains("Root word"));
    }
}
