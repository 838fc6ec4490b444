use serde::{Deserialize, Serialize};

/// A cell position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Orientation of a placed word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }

    /// Row/column step for one letter along this direction
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Across => write!(f, "Across"),
            Direction::Down => write!(f, "Down"),
        }
    }
}

/// Rectangular letter grid. Empty cells are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Build a grid from text rows, `.` or space marking an empty cell
    pub fn from_rows(rows: &[&str]) -> Self {
        let cols = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut grid = Self::new(rows.len(), cols);
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                if ch != '.' && ch != ' ' {
                    grid.set(Position::new(r, c), Some(ch));
                }
            }
        }
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Letter at a position; out-of-range positions read as empty
    pub fn get(&self, pos: Position) -> Option<char> {
        if self.contains(pos) {
            self.cells[pos.row * self.cols + pos.col]
        } else {
            None
        }
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    pub fn set(&mut self, pos: Position, letter: Option<char>) {
        if self.contains(pos) {
            self.cells[pos.row * self.cols + pos.col] = letter;
        }
    }

    /// Signed lookup used while probing around a placement
    fn get_signed(&self, row: isize, col: isize) -> Option<char> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(Position::new(row as usize, col as usize))
    }

    /// All occupied positions in row-major order
    pub fn occupied_positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows)
            .flat_map(move |r| (0..self.cols).map(move |c| Position::new(r, c)))
            .filter(move |&p| self.is_occupied(p))
    }

    /// Number of occupied cells
    pub fn letter_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Check whether `word` can be written starting at `(row, col)`.
    ///
    /// Crossing an existing letter is allowed only when the letters agree.
    /// A letter landing on an empty cell must not have an occupied neighbour
    /// on either side perpendicular to the word, and the cells just before
    /// the first letter and just after the last letter must be empty.
    pub fn can_place(&self, word: &str, row: isize, col: isize, direction: Direction) -> bool {
        if row < 0 || col < 0 {
            return false;
        }

        let len = word.chars().count() as isize;
        let (dr, dc) = direction.step();
        let end_row = row + dr * (len - 1);
        let end_col = col + dc * (len - 1);
        if len == 0 || end_row >= self.rows as isize || end_col >= self.cols as isize {
            return false;
        }

        // Perpendicular offsets (side neighbours)
        let (pr, pc) = (dc, dr);

        for (i, letter) in word.chars().enumerate() {
            let r = row + dr * i as isize;
            let c = col + dc * i as isize;
            match self.get_signed(r, c) {
                Some(existing) if existing != letter => return false,
                Some(_) => {}
                None => {
                    if self.get_signed(r - pr, c - pc).is_some()
                        || self.get_signed(r + pr, c + pc).is_some()
                    {
                        return false;
                    }
                }
            }
        }

        let before = self.get_signed(row - dr, col - dc);
        let after = self.get_signed(end_row + dr, end_col + dc);
        before.is_none() && after.is_none()
    }

    /// Write `word` starting at `start`, clipping anything past the edge
    pub fn write(&mut self, word: &str, start: Position, direction: Direction) {
        let (dr, dc) = direction.step();
        for (i, letter) in word.chars().enumerate() {
            let pos = Position::new(
                start.row + dr as usize * i,
                start.col + dc as usize * i,
            );
            self.set(pos, Some(letter));
        }
    }

    /// Copy of the rectangle `rows x cols` whose top-left corner is `origin`
    pub fn slice(&self, origin: Position, rows: usize, cols: usize) -> Grid {
        let mut out = Grid::new(rows, cols);
        for r in 0..rows {
            for c in 0..cols {
                let letter = self.get(Position::new(origin.row + r, origin.col + c));
                out.set(Position::new(r, c), letter);
            }
        }
        out
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                match self.get(Position::new(r, c)) {
                    Some(ch) => write!(f, "{}", ch)?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Grid {
        // Row 2 holds CARBON across
        let mut grid = Grid::new(7, 9);
        grid.write("CARBON", Position::new(2, 1), Direction::Across);
        grid
    }

    #[test]
    fn test_rejects_negative_and_overflowing_starts() {
        let grid = board();
        assert!(!grid.can_place("NEON", -1, 0, Direction::Down));
        assert!(!grid.can_place("NEON", 0, -2, Direction::Across));
        assert!(!grid.can_place("NEON", 0, 6, Direction::Across));
        assert!(!grid.can_place("NEON", 4, 0, Direction::Down));
        assert!(grid.can_place("NEON", 3, 0, Direction::Down));
    }

    #[test]
    fn test_crossing_requires_matching_letter() {
        let grid = board();
        // ARGON down through the A of CARBON at (2, 2)
        assert!(grid.can_place("ARGON", 2, 2, Direction::Down));
        // BORON down with its O on the R of CARBON
        assert!(!grid.can_place("BORON", 1, 3, Direction::Down));
        // BORON down with its first O on the O of CARBON at (2, 5)
        assert!(grid.can_place("BORON", 1, 5, Direction::Down));
    }

    #[test]
    fn test_rejects_side_by_side_contact() {
        let grid = board();
        // Parallel word directly below CARBON touches it on every letter
        assert!(!grid.can_place("IRON", 3, 1, Direction::Across));
        // A down word running beside the column of the N
        assert!(!grid.can_place("ZINC", 1, 7, Direction::Down));
        // Diagonal contact with the N is fine
        assert!(grid.can_place("ZINC", 3, 7, Direction::Down));
    }

    #[test]
    fn test_rejects_end_to_end_abutment() {
        let mut grid = Grid::new(5, 12);
        grid.write("CARBON", Position::new(2, 5), Direction::Across);
        // GOLD would end directly before the C
        assert!(!grid.can_place("GOLD", 2, 1, Direction::Across));
        // One blank in between is enough
        assert!(grid.can_place("GOLD", 2, 0, Direction::Across));
        // A down word whose last letter sits directly above the A
        assert!(!grid.can_place("TI", 0, 6, Direction::Down));
        // A down word starting directly under the R
        assert!(!grid.can_place("ZN", 3, 7, Direction::Down));
    }

    #[test]
    fn test_crop_slice_and_display() {
        let grid = board();
        let cropped = grid.slice(Position::new(2, 1), 1, 6);
        assert_eq!(cropped.to_string(), "CARBON\n");
        assert_eq!(cropped.letter_count(), 6);
        assert_eq!(
            grid.occupied_positions().next(),
            Some(Position::new(2, 1))
        );
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(&["NE.", ".O."]);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(Position::new(1, 1)), Some('O'));
        assert!(!grid.is_occupied(Position::new(0, 2)));
        assert_eq!(grid.get(Position::new(9, 9)), None);
    }
}
