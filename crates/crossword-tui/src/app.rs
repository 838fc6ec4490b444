use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossword_core::{Direction, GenerationOutcome, Move, Quiz, SessionState};
use std::time::{Duration, Instant};

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// Current screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// Solving, including the corrected-grid pause after finishing
    Playing,
    /// End-of-game summary
    Summary,
}

/// The main application state
pub struct App {
    /// Current quiz
    pub quiz: Quiz,
    /// Color theme
    pub theme: Theme,
    /// Direction used to pick the focused word
    pub direction: Direction,
    /// Current screen state
    pub screen_state: ScreenState,
    /// Message to display
    pub message: Option<String>,
    /// Message timer
    message_timer: u32,
    /// When the corrected grid gives way to the summary
    finish_deadline: Option<Instant>,
}

impl App {
    /// UI refresh rate; the session clock is driven separately once a second
    pub const TICK_RATE: Duration = Duration::from_millis(100);

    pub fn new(quiz: Quiz, theme: Theme) -> Self {
        let mut app = Self {
            quiz,
            theme,
            direction: Direction::Across,
            screen_state: ScreenState::Playing,
            message: None,
            message_timer: 0,
            finish_deadline: None,
        };
        app.announce_fallback();
        app
    }

    /// Update timers (called every tick)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }

        if let Some(deadline) = self.finish_deadline {
            if Instant::now() >= deadline {
                self.finish_deadline = None;
                if self.quiz.settle().is_some() {
                    self.screen_state = ScreenState::Summary;
                }
            }
        }
    }

    /// Advance the game clock by one second
    pub fn tick_clock(&mut self) {
        self.quiz.session_mut().tick();
    }

    /// Show a temporary message
    pub fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
        self.message_timer = 30; // ~3 seconds at 100ms poll
    }

    /// Index of the clue under the cursor, preferring the active direction
    pub fn active_clue(&self) -> Option<usize> {
        let session = self.quiz.session();
        let cursor = session.cursor();
        session
            .clue_at(cursor, self.direction)
            .or_else(|| session.clue_at(cursor, self.direction.opposite()))
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match self.screen_state {
            ScreenState::Summary => self.handle_summary_key(key),
            ScreenState::Playing => self.handle_game_key(key),
        }
    }

    fn handle_summary_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Enter | KeyCode::Char('r') => self.new_puzzle(),
            _ => {}
        }
        AppAction::Continue
    }

    fn handle_game_key(&mut self, key: KeyEvent) -> AppAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('q') if ctrl => return AppAction::Quit,
            KeyCode::Char('n') if ctrl => self.new_puzzle(),
            _ if self.quiz.session().state() != SessionState::Active => {}

            // Navigation
            KeyCode::Up => self.navigate(Move::Up),
            KeyCode::Down => self.navigate(Move::Down),
            KeyCode::Left => self.navigate(Move::Left),
            KeyCode::Right => self.navigate(Move::Right),
            KeyCode::Tab => self.direction = self.direction.opposite(),

            // Letters
            KeyCode::Char(c) if c.is_ascii_alphabetic() && !ctrl => {
                let cursor = self.quiz.session().cursor();
                self.quiz.session_mut().input(cursor, Some(c));
            }
            KeyCode::Backspace | KeyCode::Delete => {
                let cursor = self.quiz.session().cursor();
                self.quiz.session_mut().clear(cursor);
            }

            // Hints
            KeyCode::Char('1') => self.initial_letter_hint(),
            KeyCode::Char('2') => self.random_letter_hint(),
            KeyCode::Char('3') => self.extra_clue(),

            KeyCode::Enter => self.finish(),
            _ => {}
        }
        AppAction::Continue
    }

    fn navigate(&mut self, mv: Move) {
        self.quiz.session_mut().navigate(mv);
    }

    fn initial_letter_hint(&mut self) {
        if self.quiz.session().initial_hints_remaining() == 0 {
            self.show_message("No initial-letter hints left");
            return;
        }
        match self.quiz.reveal_initial_letter() {
            Some(_) => {
                let cost = self.quiz.session().config().initial_letter_cost;
                self.show_message(&format!("Initial letter revealed (-{} points)", cost));
            }
            None => self.show_message("Every word already has its first letter"),
        }
    }

    fn random_letter_hint(&mut self) {
        if self.quiz.session().random_hints_remaining() == 0 {
            self.show_message("No random-letter hints left");
            return;
        }
        match self.quiz.reveal_random_letter() {
            Some(_) => {
                let cost = self.quiz.session().config().random_letter_cost;
                self.show_message(&format!("Letter revealed (-{} points)", cost));
            }
            None => self.show_message("Nothing left to reveal"),
        }
    }

    fn extra_clue(&mut self) {
        let Some(index) = self.active_clue() else {
            return;
        };
        match self.quiz.request_extra_clue(index) {
            Some(text) => self.show_message(&text),
            None => self.show_message("No more clues for this word"),
        }
    }

    fn finish(&mut self) {
        let Some(report) = self.quiz.finish() else {
            return;
        };
        self.show_message(&format!(
            "{}/{} letters correct",
            report.correct_letters, report.total_letters
        ));
        self.finish_deadline = Some(Instant::now() + self.quiz.session().config().finish_delay);
    }

    fn new_puzzle(&mut self) {
        self.quiz.restart();
        self.screen_state = ScreenState::Playing;
        self.direction = Direction::Across;
        self.finish_deadline = None;
        self.message = None;
        self.message_timer = 0;
        self.announce_fallback();
    }

    fn announce_fallback(&mut self) {
        if self.quiz.outcome() == GenerationOutcome::Fallback {
            self.show_message("Could not fit many words this time; enjoy a smaller puzzle");
        }
    }
}
