//! TUI application state and logic

use crate::core::{Rejection, ValidationOutcome, WordValidator, letter_count};
use crate::dictionary::Dictionary;
use crate::session::Session;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

/// Application state
pub struct App<'a> {
    pub session: Session,
    pub validator: WordValidator<'a, dyn Dictionary + 'a>,
    pub rng: StdRng,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

/// A rejection shown as a popup until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(
        session: Session,
        validator: WordValidator<'a, dyn Dictionary + 'a>,
        rng: StdRng,
    ) -> Self {
        Self {
            session,
            validator,
            rng,
            input_buffer: String::new(),
            alert: None,
            messages: vec![
                Message {
                    text: "Welcome! Make words from the letters of the root word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a word and press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    /// Submit the current input as a candidate
    pub fn submit(&mut self) {
        let outcome = self.session.submit(&self.input_buffer, &self.validator);

        match outcome {
            ValidationOutcome::Accepted(word) => {
                self.add_message(
                    &format!("+{} for '{}'", letter_count(&word), word),
                    MessageStyle::Success,
                );
                self.input_buffer.clear();
            }
            // Nothing typed: nothing to report
            ValidationOutcome::Rejected(Rejection::Empty) => self.input_buffer.clear(),
            ValidationOutcome::Rejected(reason) => {
                self.add_message(reason.title(), MessageStyle::Error);
                self.alert = Some(Alert {
                    title: reason.title().to_string(),
                    message: reason.message(self.session.root_word()),
                });
            }
        }
    }

    pub fn new_game(&mut self) {
        self.session.restart(&mut self.rng);
        self.input_buffer.clear();
        self.alert = None;
        self.messages.clear();
        self.add_message(
            &format!(
                "New game started! Root word: {}",
                self.session.root_word().text().to_uppercase()
            ),
            MessageStyle::Info,
        );
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Any key closes an open alert and is otherwise ignored
        if self.alert.is_some() {
            self.dismiss_alert();
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_game();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input_buffer.push(c);
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                self.submit();
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    info!(root = %app.session.root_word(), "Starting TUI");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res.context("terminal session failed")
}

/// Draw and apply events from `next_event` until the app asks to quit
fn run_app<B, E>(terminal: &mut Terminal<B>, mut app: App, mut next_event: E) -> Result<()>
where
    B: ratatui::backend::Backend,
    E: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            debug!(code = ?key.code, "Key pressed");
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    info!(
        words = app.session.used_words().len(),
        score = app.session.score(),
        "TUI closed"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RootWord;
    use crate::dictionary::WordListDictionary;
    use rand::SeedableRng;
    use ratatui::backend::TestBackend;

    fn dictionary() -> WordListDictionary {
        WordListDictionary::from_content("silk\nworm\nmilk\nsilkworm\n")
    }

    fn app(dict: &WordListDictionary) -> App<'_> {
        App::new(
            Session::with_root(RootWord::new("silkworm").unwrap()),
            WordValidator::new(dict as &dyn Dictionary),
            StdRng::seed_from_u64(11),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_and_submitting_accepts_word() {
        let dict = dictionary();
        let mut app = app(&dict);

        type_word(&mut app, "Silk");

        assert_eq!(app.session.used_words(), ["silk"]);
        assert!(app.input_buffer.is_empty());
        assert!(app.alert.is_none());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn rejection_opens_alert_and_keeps_input() {
        let dict = dictionary();
        let mut app = app(&dict);

        type_word(&mut app, "cat");

        let alert = app.alert.clone().unwrap();
        assert_eq!(alert.title, "Word not possible");
        assert!(alert.message.contains("silkworm"));
        assert_eq!(app.input_buffer, "cat");
        assert!(app.session.used_words().is_empty());
    }

    #[test]
    fn any_key_dismisses_alert() {
        let dict = dictionary();
        let mut app = app(&dict);

        type_word(&mut app, "wilk");
        assert!(app.alert.is_some());

        press(&mut app, KeyCode::Char('x'));
        assert!(app.alert.is_none());
        assert_eq!(app.input_buffer, "wilk");
    }

    #[test]
    fn repeated_word_alerts() {
        let dict = dictionary();
        let mut app = app(&dict);

        type_word(&mut app, "silk");
        type_word(&mut app, "silk");

        assert_eq!(app.alert.unwrap().title, "Word used already");
    }

    #[test]
    fn empty_submit_is_silent() {
        let dict = dictionary();
        let mut app = app(&dict);

        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);

        assert!(app.alert.is_none());
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn backspace_edits_input() {
        let dict = dictionary();
        let mut app = app(&dict);

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Backspace);

        assert_eq!(app.input_buffer, "a");
    }

    #[test]
    fn ctrl_n_starts_new_game() {
        let dict = dictionary();
        let mut app = app(&dict);

        type_word(&mut app, "silk");
        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));

        assert!(app.session.used_words().is_empty());
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.messages.len(), 1);
    }

    #[test]
    fn quit_keys() {
        let dict = dictionary();
        let mut app = app(&dict);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = self::app(&dict);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    fn events(keys: Vec<io::Result<Event>>) -> impl FnMut() -> io::Result<Event> {
        let mut keys = keys.into_iter();
        move || {
            keys.next()
                .unwrap_or_else(|| Err(io::Error::other("no more events")))
        }
    }

    fn key(code: KeyCode) -> io::Result<Event> {
        Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn event_loop_stops_on_quit() {
        let dict = dictionary();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let source = events(vec![
            key(KeyCode::Char('s')),
            key(KeyCode::Enter),
            key(KeyCode::Esc),
        ]);

        assert!(run_app(&mut terminal, app(&dict), source).is_ok());
    }

    #[test]
    fn event_loop_returns_read_errors() {
        let dict = dictionary();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let source = events(vec![
            key(KeyCode::Char('s')),
            Err(io::Error::other("terminal went away")),
        ]);

        let err = run_app(&mut terminal, app(&dict), source).unwrap_err();
        assert!(err.to_string().contains("terminal went away"));
    }

    #[test]
    fn messages_capped() {
        let dict = dictionary();
        let mut app = app(&dict);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
