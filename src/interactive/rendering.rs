//! TUI rendering with ratatui
//!
//! Root word header, input box, accepted words with length badges, and a popup
//! for rejected words.

use super::app::{Alert, App, MessageStyle};
use crate::core::letter_count;
use crate::output::formatters::{length_badge, spaced_letters, word_count};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Input area
            Constraint::Min(8),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_input(f, app, chunks[1]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Used words
            Constraint::Percentage(40), // Score and messages
        ])
        .split(chunks[2]);

    render_used_words(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[3]);

    if let Some(alert) = &app.alert {
        render_alert(f, alert);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(spaced_letters(app.session.root_word().text()))
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" 🔤 WORD SCRAMBLE ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Enter your word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, area);

    // Place the cursor after the typed text while no popup is open
    if app.alert.is_none() {
        let typed = u16::try_from(letter_count(&app.input_buffer)).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(typed);
        f.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y.saturating_add(1)));
    }
}

fn render_used_words(f: &mut Frame, app: &App, area: Rect) {
    let used_words = app.session.used_words();

    let items: Vec<ListItem> = if used_words.is_empty() {
        vec![ListItem::new("No words yet").style(Style::default().fg(Color::DarkGray))]
    } else {
        used_words
            .iter()
            .map(|word| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        length_badge(letter_count(word)),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(" "),
                    Span::raw(word.clone()),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Your Words ({}) ", used_words.len()))
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Score
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                app.session.score().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Found: {}",
            word_count(app.session.used_words().len())
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.alert.is_some() {
        "Any key: Dismiss | Ctrl-C: Quit"
    } else {
        "Enter: Submit | Ctrl-N: New Word | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_alert(f: &mut Frame, alert: &Alert) {
    let area = centered_rect(f.area(), 50, 7);

    let content = vec![
        Line::from(""),
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", alert.title))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// A `width` x `height` rectangle centered in `area`
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RootWord, WordValidator};
    use crate::dictionary::{Dictionary, WordListDictionary};
    use crate::session::Session;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_root_and_words() {
        let dict = WordListDictionary::from_content("silk\nworm\n");
        let mut app = App::new(
            Session::with_root(RootWord::new("silkworm").unwrap()),
            WordValidator::new(&dict as &dyn Dictionary),
            StdRng::seed_from_u64(1),
        );
        app.input_buffer = "silk".to_string();
        app.submit();

        let text = screen_text(&app);
        assert!(text.contains("S I L K W O R M"));
        assert!(text.contains("Your Words (1)"));
        assert!(text.contains("silk"));
    }

    #[test]
    fn renders_alert_popup() {
        let dict = WordListDictionary::from_content("silk\n");
        let mut app = App::new(
            Session::with_root(RootWord::new("silkworm").unwrap()),
            WordValidator::new(&dict as &dyn Dictionary),
            StdRng::seed_from_u64(1),
        );
        app.input_buffer = "cat".to_string();
        app.submit();

        let text = screen_text(&app);
        assert!(text.contains("Word not possible"));
        assert!(text.contains("Press any key"));
    }

    #[test]
    fn very_long_input_keeps_cursor_in_box() {
        let dict = WordListDictionary::from_content("silk\n");
        let mut app = App::new(
            Session::with_root(RootWord::new("silkworm").unwrap()),
            WordValidator::new(&dict as &dyn Dictionary),
            StdRng::seed_from_u64(1),
        );
        app.input_buffer = "k".repeat(usize::from(u16::MAX) + 10);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let cursor = terminal.get_cursor_position().unwrap();
        assert_eq!(cursor.x, 78);
        assert_eq!(cursor.y, 4);
    }

    #[test]
    fn centered_rect_is_centered() {
        let outer = Rect::new(0, 0, 100, 41);
        let inner = centered_rect(outer, 50, 7);

        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 7);
        assert_eq!(inner.x, 25);
        assert_eq!(inner.y, 17);
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let outer = Rect::new(0, 0, 20, 5);
        let inner = centered_rect(outer, 50, 7);

        assert!(inner.width <= 20);
        assert!(inner.height <= 5);
    }
}
