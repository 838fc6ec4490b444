//! Interactive solving session.
//!
//! The session is a plain serializable record. Every operation is a
//! synchronous transition on it: typing, navigation, hints, the one-second
//! tick and finishing. Randomised choices take the random source as an
//! argument so tests can pin them with a seed.

use crate::grid::{Direction, Grid, Position};
use crate::layout::{Clue, Crossword};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Accepting input, timer running
    Active,
    /// Finish requested; the corrected grid is on display
    Finishing,
    /// Terminal; the summary is available
    Finished,
}

/// A letter in the player's grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCell {
    pub letter: char,
    /// Revealed by a hint; protected from typing
    pub is_hint: bool,
    /// Overwritten with the answer at finish time
    pub is_corrected: bool,
}

impl UserCell {
    pub fn typed(letter: char) -> Self {
        Self {
            letter,
            is_hint: false,
            is_corrected: false,
        }
    }

    pub fn hint(letter: char) -> Self {
        Self {
            letter,
            is_hint: true,
            is_corrected: false,
        }
    }

    pub fn corrected(letter: char) -> Self {
        Self {
            letter,
            is_hint: false,
            is_corrected: true,
        }
    }
}

/// Focus movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    fn step(self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }
}

/// Hint budgets, costs and timing for a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Initial-letter hints available per game
    pub initial_letter_hints: usize,
    /// Random-letter hints available per game
    pub random_letter_hints: usize,
    /// Penalty per initial-letter hint
    pub initial_letter_cost: u32,
    /// Penalty per random-letter hint
    pub random_letter_cost: u32,
    /// Penalty per extra clue
    pub extra_clue_cost: u32,
    /// How long the corrected grid stays up before the summary
    pub finish_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_letter_hints: 10,
            random_letter_hints: 10,
            initial_letter_cost: 5,
            random_letter_cost: 2,
            extra_clue_cost: 5,
            finish_delay: Duration::from_secs(3),
        }
    }
}

/// Letter tally taken when the player finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishReport {
    pub correct_letters: usize,
    pub total_letters: usize,
}

/// Everything that went into the final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub correct_letters: usize,
    pub total_letters: usize,
    pub initial_hints_used: usize,
    pub random_hints_used: usize,
    pub extra_clues_used: usize,
    pub penalty_points: u32,
    pub final_score: i64,
}

/// End-of-game summary handed to the host UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub score: String,
    /// Elapsed time as MM:SS
    pub time: String,
    pub details: ScoreBreakdown,
}

/// Format seconds as MM:SS
pub fn format_time(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// The solving session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    crossword: Crossword,
    config: SessionConfig,
    /// Player letters, row-major over the crossword grid
    user_grid: Vec<Option<UserCell>>,
    cursor: Position,
    elapsed_secs: u64,
    initial_hints_remaining: usize,
    random_hints_remaining: usize,
    extra_clues_used: usize,
    penalty_points: u32,
    /// Extra clue sentences revealed so far, per clue index
    revealed_clues: Vec<Vec<String>>,
    state: SessionState,
    report: Option<FinishReport>,
}

impl Session {
    /// Start a session on a freshly generated crossword
    pub fn new(crossword: Crossword, config: SessionConfig) -> Self {
        let cells = crossword.grid.rows() * crossword.grid.cols();
        let cursor = crossword
            .clues
            .iter()
            .map(Clue::start)
            .min()
            .unwrap_or(Position::new(0, 0));
        let clue_count = crossword.clues.len();

        Self {
            user_grid: vec![None; cells],
            cursor,
            elapsed_secs: 0,
            initial_hints_remaining: config.initial_letter_hints,
            random_hints_remaining: config.random_letter_hints,
            extra_clues_used: 0,
            penalty_points: 0,
            revealed_clues: vec![Vec::new(); clue_count],
            state: SessionState::Active,
            report: None,
            crossword,
            config,
        }
    }

    // ==================== Read access ====================

    pub fn crossword(&self) -> &Crossword {
        &self.crossword
    }

    pub fn grid(&self) -> &Grid {
        &self.crossword.grid
    }

    pub fn clues(&self) -> &[Clue] {
        &self.crossword.clues
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The player's cell at `pos`
    pub fn user_cell(&self, pos: Position) -> Option<UserCell> {
        self.index(pos).and_then(|i| self.user_grid[i])
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn elapsed_string(&self) -> String {
        format_time(self.elapsed_secs)
    }

    pub fn initial_hints_remaining(&self) -> usize {
        self.initial_hints_remaining
    }

    pub fn random_hints_remaining(&self) -> usize {
        self.random_hints_remaining
    }

    pub fn initial_hints_used(&self) -> usize {
        self.config.initial_letter_hints - self.initial_hints_remaining
    }

    pub fn random_hints_used(&self) -> usize {
        self.config.random_letter_hints - self.random_hints_remaining
    }

    pub fn extra_clues_used(&self) -> usize {
        self.extra_clues_used
    }

    pub fn penalty_points(&self) -> u32 {
        self.penalty_points
    }

    pub fn report(&self) -> Option<FinishReport> {
        self.report
    }

    /// Clue of the given direction whose answer covers `pos`
    pub fn clue_at(&self, pos: Position, direction: Direction) -> Option<usize> {
        self.crossword
            .clues
            .iter()
            .position(|c| c.direction == direction && c.covers(pos))
    }

    /// Number printed in a cell, if a word starts there
    pub fn clue_number_at(&self, pos: Position) -> Option<usize> {
        self.crossword.number_at(pos)
    }

    /// Extra clue sentences already revealed for a clue
    pub fn extra_clues(&self, clue_index: usize) -> &[String] {
        self.revealed_clues
            .get(clue_index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether another extra clue can be requested for this clue
    pub fn has_extra_clue(&self, clue_index: usize) -> bool {
        !self.available_extra_clues(clue_index).is_empty()
    }

    // ==================== Input & navigation ====================

    /// Advance the clock by one second. Does nothing unless active.
    pub fn tick(&mut self) -> bool {
        if self.state != SessionState::Active {
            return false;
        }
        self.elapsed_secs += 1;
        true
    }

    /// Type a letter (or clear with `None`) at `pos`.
    ///
    /// Ignored when the session is not active, the cell is not part of the
    /// grid or holds a hint. A typed letter moves focus to the next grid
    /// cell to the right, or below when there is none to the right.
    /// That cell may already hold a letter; focus does not skip filled cells.
    pub fn input(&mut self, pos: Position, letter: Option<char>) -> bool {
        if self.state != SessionState::Active || !self.grid().is_occupied(pos) {
            return false;
        }
        if self.user_cell(pos).is_some_and(|c| c.is_hint) {
            return false;
        }

        let letter = match letter {
            Some(ch) => {
                let upper = ch.to_ascii_uppercase();
                if !upper.is_ascii_uppercase() {
                    return false;
                }
                Some(upper)
            }
            None => None,
        };

        self.set_cell(pos, letter.map(UserCell::typed));
        self.cursor = if letter.is_some() {
            self.advance_from(pos)
        } else {
            pos
        };
        true
    }

    /// Clear a cell (backspace)
    pub fn clear(&mut self, pos: Position) -> bool {
        self.input(pos, None)
    }

    /// Focus a grid cell directly
    pub fn set_cursor(&mut self, pos: Position) -> bool {
        if self.grid().is_occupied(pos) {
            self.cursor = pos;
            true
        } else {
            false
        }
    }

    /// Move focus to the nearest grid cell in a direction, skipping blanks.
    /// Stays put when there is none before the edge.
    pub fn navigate(&mut self, mv: Move) -> Position {
        let (dr, dc) = mv.step();
        let mut row = self.cursor.row as isize;
        let mut col = self.cursor.col as isize;
        loop {
            row += dr;
            col += dc;
            if row < 0 || col < 0 {
                break;
            }
            let pos = Position::new(row as usize, col as usize);
            if !self.grid().contains(pos) {
                break;
            }
            if self.grid().is_occupied(pos) {
                self.cursor = pos;
                break;
            }
        }
        self.cursor
    }

    fn advance_from(&self, pos: Position) -> Position {
        let right = Position::new(pos.row, pos.col + 1);
        let below = Position::new(pos.row + 1, pos.col);
        if self.grid().is_occupied(right) {
            right
        } else if self.grid().is_occupied(below) {
            below
        } else {
            pos
        }
    }

    // ==================== Hints ====================

    /// Reveal the first letter of a random word as a protected hint.
    ///
    /// Candidates are word-start cells that are neither hints already nor
    /// filled correctly by the player. Returns the revealed cell, or `None`
    /// when the budget is spent, the session is over or nothing qualifies.
    pub fn reveal_initial_letter<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Position> {
        if self.state != SessionState::Active || self.initial_hints_remaining == 0 {
            return None;
        }

        let mut starts: Vec<Position> = self.crossword.clues.iter().map(Clue::start).collect();
        starts.sort();
        starts.dedup();
        starts.retain(|&p| !self.is_settled(p));

        let pos = *starts.choose(rng)?;
        self.apply_hint(pos)?;
        self.initial_hints_remaining -= 1;
        self.penalty_points += self.config.initial_letter_cost;
        debug!("initial-letter hint at {:?}", pos);
        Some(pos)
    }

    /// Reveal the answer in a random empty or wrong cell as a protected hint
    pub fn reveal_random_letter<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Position> {
        if self.state != SessionState::Active || self.random_hints_remaining == 0 {
            return None;
        }

        let open: Vec<Position> = self
            .grid()
            .occupied_positions()
            .filter(|&p| !self.is_settled(p))
            .collect();

        let pos = *open.choose(rng)?;
        self.apply_hint(pos)?;
        self.random_hints_remaining -= 1;
        self.penalty_points += self.config.random_letter_cost;
        debug!("random-letter hint at {:?}", pos);
        Some(pos)
    }

    /// Reveal one more clue sentence for an entry.
    ///
    /// Returns `None` once every sentence for that entry has been shown.
    pub fn request_extra_clue<R: Rng + ?Sized>(
        &mut self,
        clue_index: usize,
        rng: &mut R,
    ) -> Option<String> {
        if self.state != SessionState::Active {
            return None;
        }

        let text = self.available_extra_clues(clue_index).choose(rng)?.clone();
        self.revealed_clues[clue_index].push(text.clone());
        self.extra_clues_used += 1;
        self.penalty_points += self.config.extra_clue_cost;
        debug!("extra clue for entry {}", clue_index);
        Some(text)
    }

    fn available_extra_clues(&self, clue_index: usize) -> Vec<String> {
        let Some(clue) = self.crossword.clues.get(clue_index) else {
            return Vec::new();
        };
        let shown = self.extra_clues(clue_index);
        let mut available: Vec<String> = Vec::new();
        for fact in &clue.facts {
            if *fact != clue.text && !shown.contains(fact) && !available.contains(fact) {
                available.push(fact.clone());
            }
        }
        available
    }

    /// Hint cells and correctly filled cells need no help
    fn is_settled(&self, pos: Position) -> bool {
        match self.user_cell(pos) {
            Some(cell) => cell.is_hint || Some(cell.letter) == self.grid().get(pos),
            None => false,
        }
    }

    fn apply_hint(&mut self, pos: Position) -> Option<()> {
        let letter = self.grid().get(pos)?;
        self.set_cell(pos, Some(UserCell::hint(letter)));
        Some(())
    }

    // ==================== Finishing ====================

    /// Stop the clock, tally the letters and correct the grid.
    ///
    /// Matching cells are kept as they are (hint flag included); every other
    /// grid cell is overwritten with the answer and flagged as corrected.
    pub fn finish(&mut self) -> Option<FinishReport> {
        if self.state != SessionState::Active {
            return None;
        }
        self.state = SessionState::Finishing;

        let positions: Vec<Position> = self.grid().occupied_positions().collect();
        let mut correct_letters = 0;
        for &pos in &positions {
            let Some(answer) = self.grid().get(pos) else {
                continue;
            };
            match self.user_cell(pos) {
                Some(cell) if cell.letter == answer => correct_letters += 1,
                _ => self.set_cell(pos, Some(UserCell::corrected(answer))),
            }
        }

        let report = FinishReport {
            correct_letters,
            total_letters: positions.len(),
        };
        debug!(
            "finished with {}/{} letters",
            report.correct_letters, report.total_letters
        );
        self.report = Some(report);
        Some(report)
    }

    /// Leave the finishing display and produce the summary (once)
    pub fn settle(&mut self) -> Option<Summary> {
        if self.state != SessionState::Finishing {
            return None;
        }
        self.state = SessionState::Finished;
        self.summary()
    }

    /// The summary of a finished session
    pub fn summary(&self) -> Option<Summary> {
        if self.state != SessionState::Finished {
            return None;
        }
        let details = self.breakdown();
        Some(Summary {
            score: format!(
                "{} points ({}/{} letters)",
                details.final_score, details.correct_letters, details.total_letters
            ),
            time: self.elapsed_string(),
            details,
        })
    }

    /// Score so far: correct letters minus penalty points
    pub fn breakdown(&self) -> ScoreBreakdown {
        let report = self.report.unwrap_or(FinishReport {
            correct_letters: 0,
            total_letters: self.grid().letter_count(),
        });
        ScoreBreakdown {
            correct_letters: report.correct_letters,
            total_letters: report.total_letters,
            initial_hints_used: self.initial_hints_used(),
            random_hints_used: self.random_hints_used(),
            extra_clues_used: self.extra_clues_used,
            penalty_points: self.penalty_points,
            final_score: report.correct_letters as i64 - self.penalty_points as i64,
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.grid()
            .contains(pos)
            .then(|| pos.row * self.grid().cols() + pos.col)
    }

    fn set_cell(&mut self, pos: Position, cell: Option<UserCell>) {
        if let Some(i) = self.index(pos) {
            self.user_grid[i] = cell;
        }
    }
}
