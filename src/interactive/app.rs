//! TUI application state and logic

use crate::core::{Palette, Settings};
use crate::game::{CodeGenerator, GameSession, PlayerInput, Status};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub palette: Palette,
    pub settings: Settings,
    generator: CodeGenerator,
    pub session: GameSession,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Attempts summed over won games
    pub winning_attempts: usize,
}

impl Statistics {
    #[must_use]
    pub fn average_attempts(&self) -> Option<f64> {
        (self.games_won > 0).then(|| self.winning_attempts as f64 / self.games_won as f64)
    }
}

impl App {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot produce a code from the palette.
    pub fn new(palette: Palette, settings: Settings, seed: Option<u64>) -> Result<Self> {
        let mut generator = CodeGenerator::new(palette.clone(), seed);
        let session = GameSession::start(settings, &mut generator)?;

        let mut app = Self {
            palette,
            settings,
            generator,
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.add_message(
            &format!("Welcome! Break the {}-peg code.", settings.peg_count()),
            MessageStyle::Info,
        );
        app.add_message(
            "Type colors (e.g. 'pi or ye gr') and press Enter",
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Interpret the input buffer as a command or guess
    pub fn handle_input(&mut self) {
        let line = std::mem::take(&mut self.input_buffer);
        if line.trim().is_empty() {
            return;
        }

        match PlayerInput::parse(&line, &self.palette, &self.settings) {
            Ok(PlayerInput::Guess(guess)) => match self.session.submit(guess) {
                Ok(turn) if turn.won => {
                    let attempts = self.session.attempts();
                    self.stats.total_games += 1;
                    self.stats.games_won += 1;
                    self.stats.winning_attempts += attempts;
                    self.input_mode = InputMode::GameOver;

                    let celebration = match attempts {
                        1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                        2..=4 => "🔥 MAGNIFICENT! Code broken! 🔥",
                        5..=8 => "✨ SPLENDID! Code broken! ✨",
                        _ => "🎊 CODE BROKEN! 🎊",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    self.add_message(
                        &format!("Solved in {attempts} attempts. Press 'n' for new game or 'q' to quit."),
                        MessageStyle::Info,
                    );
                }
                Ok(turn) => {
                    self.add_message(&turn.feedback.to_string(), MessageStyle::Info);
                }
                Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
            },
            Ok(PlayerInput::Quit) => self.give_up(),
            Ok(PlayerInput::History) => {
                self.add_message("Your guesses are listed on the board", MessageStyle::Info);
            }
            Ok(PlayerInput::Help) => {
                self.add_message(
                    "Red = right color, right place. White = right color, wrong place.",
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Reveal the code and end the current game
    pub fn give_up(&mut self) {
        let code = match self.session.quit() {
            Ok(code) => code.to_string(),
            Err(_) => return,
        };

        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;
        self.input_buffer.clear();
        self.add_message(&format!("The code was: {code}"), MessageStyle::Error);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        match GameSession::start(self.settings, &mut self.generator) {
            Ok(session) => {
                self.session = session;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
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

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.session.status() != Status::InProgress
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.give_up();
                app.should_quit = true;
            } else {
                match app.input_mode {
                    InputMode::GameOver => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                        KeyCode::Char('n') => app.new_game(),
                        _ => {}
                    },
                    InputMode::Guessing => match key.code {
                        KeyCode::Esc => app.give_up(),
                        KeyCode::Char(c) => app.input_buffer.push(c),
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        KeyCode::Enter => app.handle_input(),
                        _ => {}
                    },
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
