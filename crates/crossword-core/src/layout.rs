use crate::grid::{Direction, Grid, Position};
use crate::placement::Placement;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A numbered clue as shown to the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub number: usize,
    pub direction: Direction,
    pub text: String,
    pub answer: String,
    pub row: usize,
    pub col: usize,
    /// All clue sentences for this answer, used for extra-clue hints
    pub facts: Vec<String>,
}

impl Clue {
    pub fn start(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Positions covered by the answer, first letter first
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        let (dr, dc) = self.direction.step();
        (0..self.answer.len()).map(move |i| {
            Position::new(self.row + dr as usize * i, self.col + dc as usize * i)
        })
    }

    pub fn covers(&self, pos: Position) -> bool {
        self.cells().any(|p| p == pos)
    }
}

/// A finished puzzle: the solution grid and its clues
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crossword {
    pub grid: Grid,
    pub clues: Vec<Clue>,
}

impl Crossword {
    /// Number of placed words
    pub fn word_count(&self) -> usize {
        self.clues.len()
    }

    /// Across clues ordered by number
    pub fn across(&self) -> Vec<&Clue> {
        self.by_direction(Direction::Across)
    }

    /// Down clues ordered by number
    pub fn down(&self) -> Vec<&Clue> {
        self.by_direction(Direction::Down)
    }

    fn by_direction(&self, direction: Direction) -> Vec<&Clue> {
        let mut clues: Vec<&Clue> = self
            .clues
            .iter()
            .filter(|c| c.direction == direction)
            .collect();
        clues.sort_by_key(|c| c.number);
        clues
    }

    /// The number printed in a cell, if a word starts there
    pub fn number_at(&self, pos: Position) -> Option<usize> {
        self.clues
            .iter()
            .find(|c| c.start() == pos)
            .map(|c| c.number)
    }
}

/// Trim the grid to the bounding box of its letters and shift placements to
/// match. An empty grid crops to `0 x 0`.
pub fn crop(grid: &Grid, placements: &[Placement]) -> (Grid, Vec<Placement>) {
    let mut bounds: Option<(usize, usize, usize, usize)> = None;
    for pos in grid.occupied_positions() {
        bounds = Some(match bounds {
            None => (pos.row, pos.row, pos.col, pos.col),
            Some((min_r, max_r, min_c, max_c)) => (
                min_r.min(pos.row),
                max_r.max(pos.row),
                min_c.min(pos.col),
                max_c.max(pos.col),
            ),
        });
    }

    let Some((min_r, max_r, min_c, max_c)) = bounds else {
        return (Grid::new(0, 0), Vec::new());
    };

    let cropped = grid.slice(
        Position::new(min_r, min_c),
        max_r - min_r + 1,
        max_c - min_c + 1,
    );
    let shifted = placements
        .iter()
        .map(|p| Placement {
            row: p.row - min_r,
            col: p.col - min_c,
            ..p.clone()
        })
        .collect();
    (cropped, shifted)
}

/// Assign clue numbers in reading order.
///
/// Placements are visited sorted by `(row, col)`; each new start cell takes
/// the next number, and a start cell shared by an across and a down word
/// gives both clues the same number.
pub fn number_clues(placements: &[Placement]) -> Vec<Clue> {
    let mut ordered: Vec<&Placement> = placements.iter().collect();
    ordered.sort_by_key(|p| (p.row, p.col));

    let mut numbers: HashMap<Position, usize> = HashMap::new();
    let mut next = 1;
    ordered
        .into_iter()
        .map(|p| {
            let number = *numbers.entry(p.start()).or_insert_with(|| {
                let n = next;
                next += 1;
                n
            });
            Clue {
                number,
                direction: p.direction,
                text: p.clue.clone(),
                answer: p.word.clone(),
                row: p.row,
                col: p.col,
                facts: p.facts.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(word: &str, row: usize, col: usize, direction: Direction) -> Placement {
        Placement {
            word: word.to_string(),
            clue: format!("{} clue", word),
            facts: Vec::new(),
            row,
            col,
            direction,
        }
    }

    #[test]
    fn test_crop_to_bounding_box() {
        let mut grid = Grid::new(25, 25);
        let across = placement("CARBON", 12, 9, Direction::Across);
        let down = placement("ZINC", 9, 9, Direction::Down);
        grid.write(&across.word, across.start(), across.direction);
        grid.write(&down.word, down.start(), down.direction);

        let (cropped, moved) = crop(&grid, &[across, down]);
        assert_eq!(cropped.rows(), 4);
        assert_eq!(cropped.cols(), 6);
        assert_eq!(cropped.to_string(), "Z.....\nI.....\nN.....\nCARBON\n");
        assert_eq!(moved[0].start(), Position::new(3, 0));
        assert_eq!(moved[1].start(), Position::new(0, 0));
    }

    #[test]
    fn test_crop_empty_grid() {
        let (cropped, moved) = crop(&Grid::new(25, 25), &[]);
        assert_eq!((cropped.rows(), cropped.cols()), (0, 0));
        assert!(moved.is_empty());
    }

    #[test]
    fn test_shared_start_shares_number() {
        // Row 0: SODIUM across and SILVER down both start at (0, 0)
        let placements = vec![
            placement("SILVER", 0, 0, Direction::Down),
            placement("NEON", 2, 2, Direction::Across),
            placement("SODIUM", 0, 0, Direction::Across),
            placement("IODINE", 0, 4, Direction::Down),
        ];
        let clues = number_clues(&placements);
        let numbers: Vec<(usize, &str)> =
            clues.iter().map(|c| (c.number, c.answer.as_str())).collect();
        assert_eq!(
            numbers,
            vec![(1, "SILVER"), (1, "SODIUM"), (2, "IODINE"), (3, "NEON")]
        );
    }

    #[test]
    fn test_numbers_increase_in_reading_order() {
        let placements = vec![
            placement("GOLD", 5, 1, Direction::Across),
            placement("LEAD", 1, 7, Direction::Down),
            placement("TIN", 1, 3, Direction::Down),
            placement("IRON", 0, 6, Direction::Across),
        ];
        let clues = number_clues(&placements);
        let starts: Vec<(usize, usize, usize)> =
            clues.iter().map(|c| (c.number, c.row, c.col)).collect();
        assert_eq!(starts, vec![(1, 0, 6), (2, 1, 3), (3, 1, 7), (4, 5, 1)]);

        let crossword = Crossword {
            grid: Grid::new(0, 0),
            clues,
        };
        assert_eq!(crossword.number_at(Position::new(1, 7)), Some(3));
        assert_eq!(crossword.number_at(Position::new(2, 7)), None);
        assert_eq!(crossword.across().len(), 2);
        assert_eq!(crossword.down()[0].answer, "TIN");
    }
}
