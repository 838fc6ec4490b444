use crate::grid::{Direction, Grid, Position};
use crate::normalize::Candidate;
use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A word committed to the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub word: String,
    pub clue: String,
    pub facts: Vec<String>,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl Placement {
    pub fn start(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Positions covered by this word, first letter first
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        let (dr, dc) = self.direction.step();
        (0..self.word.len()).map(move |i| {
            Position::new(self.row + dr as usize * i, self.col + dc as usize * i)
        })
    }

    fn from_candidate(candidate: Candidate, row: usize, col: usize, direction: Direction) -> Self {
        Self {
            word: candidate.word,
            clue: candidate.clue,
            facts: candidate.facts,
            row,
            col,
            direction,
        }
    }
}

/// The working grid and everything placed on it
#[derive(Debug, Clone)]
pub struct Layout {
    pub grid: Grid,
    pub placements: Vec<Placement>,
}

/// Greedy intersection placement on a `size x size` working grid.
///
/// The first candidate goes across through the middle. Each following
/// candidate is tried against the placed words in random order, through
/// every pair of equal letters, crossing in the opposite direction; the
/// first feasible spot wins. Candidates with no feasible crossing are dropped.
pub fn place_words<R: Rng + ?Sized>(candidates: Vec<Candidate>, size: usize, rng: &mut R) -> Layout {
    let mut grid = Grid::new(size, size);
    let mut placements: Vec<Placement> = Vec::new();

    let mut remaining = candidates.into_iter();
    let Some(first) = remaining.next() else {
        return Layout { grid, placements };
    };

    let row = size / 2;
    let col = size.saturating_sub(first.word.len()) / 2;
    if !grid.can_place(&first.word, row as isize, col as isize, Direction::Across) {
        return Layout { grid, placements };
    }
    grid.write(&first.word, Position::new(row, col), Direction::Across);
    placements.push(Placement::from_candidate(first, row, col, Direction::Across));

    for candidate in remaining {
        match find_crossing(&grid, &placements, &candidate.word, rng) {
            Some((row, col, direction)) => {
                grid.write(&candidate.word, Position::new(row, col), direction);
                placements.push(Placement::from_candidate(candidate, row, col, direction));
            }
            None => trace!("dropping {}: no legal crossing", candidate.word),
        }
    }

    Layout { grid, placements }
}

/// First feasible crossing of `word` with any placed word
fn find_crossing<R: Rng + ?Sized>(
    grid: &Grid,
    placements: &[Placement],
    word: &str,
    rng: &mut R,
) -> Option<(usize, usize, Direction)> {
    let mut order: Vec<&Placement> = placements.iter().collect();
    order.shuffle(rng);

    let letters: Vec<char> = word.chars().collect();
    for existing in order {
        let direction = existing.direction.opposite();
        for (i, placed_letter) in existing.word.chars().enumerate() {
            for (j, &letter) in letters.iter().enumerate() {
                if placed_letter != letter {
                    continue;
                }
                let (row, col) = match direction {
                    Direction::Down => (
                        existing.row as isize - j as isize,
                        (existing.col + i) as isize,
                    ),
                    Direction::Across => (
                        (existing.row + i) as isize,
                        existing.col as isize - j as isize,
                    ),
                };
                if grid.can_place(word, row, col, direction) {
                    return Some((row as usize, col as usize, direction));
                }
            }
        }
    }
    None
}
