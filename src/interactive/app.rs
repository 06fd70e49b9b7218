//! TUI application state and logic

use crate::output::formatters::describe_transition;
use crate::selection::{Mode, Session};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<R: Rng> {
    pub session: Session<R>,
    pub screen: Screen,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    /// Flashcard screen; `current` is `None` when the pool ran dry
    Drill { mode: Mode, current: Option<usize> },
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

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(session: Session<R>) -> Self {
        Self {
            session,
            screen: Screen::Menu,
            messages: vec![Message {
                text: "Press 'l' to learn new words or 'r' to review.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Open the flashcard screen for `mode` and draw its first word
    pub fn start(&mut self, mode: Mode) {
        let current = self.session.next_word(mode);
        if current.is_none() {
            self.add_message(mode.empty_message(), MessageStyle::Info);
        }
        self.screen = Screen::Drill { mode, current };
    }

    /// Show the next word in the current mode
    pub fn next_word(&mut self) {
        if let Screen::Drill { mode, .. } = self.screen {
            self.start(mode);
        }
    }

    /// Rate the word on screen; ignored when no word is showing
    pub fn rate(&mut self, rating: u8) {
        let Screen::Drill {
            current: Some(index),
            ..
        } = self.screen
        else {
            return;
        };

        match self.session.submit(index, rating) {
            Ok(transition) => {
                if let Ok(entry) = self.session.entry(index) {
                    let text = describe_transition(entry, transition);
                    self.add_message(&text, MessageStyle::Success);
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn back_to_menu(&mut self) {
        self.screen = Screen::Menu;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let KeyCode::Char('c') = key.code
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Menu => match key.code {
                KeyCode::Char('l') => self.start(Mode::NewWord),
                KeyCode::Char('r') => self.start(Mode::Review),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            Screen::Drill { .. } => match key.code {
                KeyCode::Char(c @ '0'..='2') => self.rate(c as u8 - b'0'),
                KeyCode::Char('n') | KeyCode::Enter => self.next_word(),
                KeyCode::Char('b') | KeyCode::Esc => self.back_to_menu(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// Hands the session back so progress can be saved.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(mut app: App<R>) -> Result<Session<R>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(app.session)
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    app: &mut App<R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
