//! Word Scramble - CLI
//!
//! Word game with TUI and CLI modes: build words from the letters of a root word.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use word_scramble::{
    commands::{check_word, find_solutions, run_simple},
    core::{RootWord, WordValidator},
    dictionary::{Dictionary, WordListDictionary},
    output::{print_check_result, print_solutions_result},
    session::Session,
    wordlists::{START_WORDS, loader},
};

const LOG_FILE: &str = "word_scramble.log";

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start words: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 's', long, global = true, default_value = "embedded")]
    start_words: String,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Dictionary language
    #[arg(short = 'l', long, global = true, default_value = "en")]
    language: String,

    /// Seed for picking root words (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Check a single word against a root word
    Check {
        /// The word to check
        word: String,

        /// Root word to spell from
        #[arg(short, long)]
        root: String,

        /// Words already accepted (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        used: Vec<String>,
    },

    /// List every dictionary word that can be made from a root word
    Solutions {
        /// Root word to spell from
        root: String,

        /// Shortest word to list
        #[arg(short, long, default_value = "3")]
        min_length: usize,
    },
}

/// Load start words based on the -s flag
fn load_start_words(source: &str) -> Result<Vec<String>> {
    match source {
        "embedded" => Ok(loader::words_from_slice(START_WORDS)),
        path => loader::load_from_file(path)
            .with_context(|| format!("could not load start words from {path}")),
    }
}

/// Load the dictionary based on the -d and -l flags
fn load_dictionary(source: &str, language: &str) -> Result<WordListDictionary> {
    let dictionary = match source {
        "embedded" => WordListDictionary::embedded(),
        path => WordListDictionary::from_file(path)
            .with_context(|| format!("could not load dictionary from {path}"))?,
    };

    debug!(words = dictionary.len(), language, "Dictionary loaded");
    Ok(dictionary.with_language(language))
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Log to stderr, or to a file while the TUI owns the terminal
///
/// In TUI mode a log file is only written when `RUST_LOG` asks for logs.
fn init_logging(to_file: bool) -> Result<()> {
    let from_env = EnvFilter::try_from_default_env();
    let writer = match (to_file, from_env.is_ok()) {
        (false, _) => BoxMakeWriter::new(io::stderr),
        (true, true) => log_file_writer(Path::new(LOG_FILE)),
        (true, false) => BoxMakeWriter::new(io::sink),
    };
    let filter = from_env.unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(!to_file)
        .try_init()
        .map_err(|err| anyhow!("could not install logger: {err}"))
}

/// Writer for the log file, or a sink if the file cannot be created
fn log_file_writer(path: &Path) -> BoxMakeWriter {
    match File::create(path) {
        Ok(file) => BoxMakeWriter::new(Arc::new(file)),
        Err(err) => {
            // The real subscriber is not installed yet, report on stderr
            let stderr = tracing_subscriber::fmt().with_writer(io::stderr).finish();
            tracing::subscriber::with_default(stderr, || {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "Could not create log file, logs discarded"
                );
            });
            BoxMakeWriter::new(io::sink)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(matches!(command, Commands::Play))?;

    let dictionary = load_dictionary(&cli.dictionary, &cli.language)?;
    let validator = WordValidator::new(&dictionary).with_language(&cli.language);

    match command {
        Commands::Play => {
            let mut rng = make_rng(cli.seed);
            let session = start_session(&cli.start_words, &mut rng)?;
            run_play_command(session, &dictionary, &cli.language, rng)
        }
        Commands::Simple => {
            let mut rng = make_rng(cli.seed);
            let mut session = start_session(&cli.start_words, &mut rng)?;
            run_simple(&mut session, &validator, &mut rng)
        }
        Commands::Check { word, root, used } => {
            let result = check_word(&word, &root, &used, &validator)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Solutions { root, min_length } => {
            let root_word = RootWord::new(&root)?;
            let result = find_solutions(&root_word, &dictionary, min_length);
            info!(root = %root_word, found = result.words.len(), "Solutions listed");
            print_solutions_result(&result);
            Ok(())
        }
    }
}

fn start_session(start_words: &str, rng: &mut StdRng) -> Result<Session> {
    let words = load_start_words(start_words)?;
    Session::start(&words, rng).context("could not start a game")
}

fn run_play_command(
    session: Session,
    dictionary: &WordListDictionary,
    language: &str,
    rng: StdRng,
) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let validator = WordValidator::new(dictionary as &dyn Dictionary).with_language(language);
    let app = App::new(session, validator, rng);
    run_tui(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn log_file_writer_creates_file() {
        let path = std::env::temp_dir().join("word_scramble_log_writer_test.log");
        let writer = log_file_writer(&path);
        writer.make_writer().write_all(b"hello\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn unwritable_log_path_falls_back_to_sink() {
        let path = std::env::temp_dir()
            .join("word_scramble_no_such_dir")
            .join("nested")
            .join("word_scramble.log");
        let writer = log_file_writer(&path);

        assert!(writer.make_writer().write_all(b"dropped").is_ok());
        assert!(!path.exists());
    }
}
