use crossword_core::{Crossword, Direction, Element, Generator, GeneratorConfig, Position};
use rand::rngs::StdRng;
use rand::SeedableRng;

const NAMES: [&str; 20] = [
    "Hydrogen", "Helium", "Lithium", "Carbon", "Nitrogen", "Oxygen", "Fluorine", "Sodium",
    "Magnesium", "Aluminium", "Silicon", "Phosphorus", "Chlorine", "Argon", "Potassium",
    "Calcium", "Titanium", "Chromium", "Manganese", "Nickel",
];

fn dataset() -> Vec<Element> {
    NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Element {
            name: name.to_string(),
            atomic_number: i as u32 + 1,
            industrial_use: format!("Something useful made with {}", name.to_lowercase()),
            ..Default::default()
        })
        .collect()
}

fn covered_by(crossword: &Crossword, a: Position, b: Position, direction: Direction) -> bool {
    crossword
        .clues
        .iter()
        .any(|c| c.direction == direction && c.covers(a) && c.covers(b))
}

/// Every clue reads back from the grid, and every pair of adjacent letters
/// belongs to a word running through both.
fn assert_well_formed(crossword: &Crossword) {
    let grid = &crossword.grid;
    for clue in &crossword.clues {
        let read: String = clue.cells().filter_map(|p| grid.get(p)).collect();
        assert_eq!(read, clue.answer, "clue {} {}", clue.number, clue.direction);
    }

    for pos in grid.occupied_positions() {
        let right = Position::new(pos.row, pos.col + 1);
        if grid.is_occupied(right) {
            assert!(
                covered_by(crossword, pos, right, Direction::Across),
                "stray horizontal contact at {:?}\n{}",
                pos,
                grid
            );
        }
        let below = Position::new(pos.row + 1, pos.col);
        if grid.is_occupied(below) {
            assert!(
                covered_by(crossword, pos, below, Direction::Down),
                "stray vertical contact at {:?}\n{}",
                pos,
                grid
            );
        }
    }
}

#[test]
fn test_grids_are_well_formed_across_seeds() {
    let elements = dataset();
    for seed in 0..40 {
        let mut generator = Generator::with_seed(seed);
        let generation = generator.generate(&elements);
        assert_well_formed(&generation.crossword);
    }
}

#[test]
fn test_qualifying_dataset_succeeds() {
    let mut generator = Generator::with_seed(2024);
    let generation = generator.generate(&dataset());
    assert!(!generation.is_fallback());
    assert!(generation.crossword.word_count() >= 10);
    assert!(generation.crossword.grid.rows() <= 25);
    assert!(generation.crossword.grid.cols() <= 25);
}

#[test]
fn test_cropped_grid_touches_every_edge() {
    let mut generator = Generator::with_seed(77);
    let grid = generator.generate(&dataset()).crossword.grid;
    let last_row = grid.rows() - 1;
    let last_col = grid.cols() - 1;
    let positions: Vec<Position> = grid.occupied_positions().collect();
    assert!(positions.iter().any(|p| p.row == 0));
    assert!(positions.iter().any(|p| p.row == last_row));
    assert!(positions.iter().any(|p| p.col == 0));
    assert!(positions.iter().any(|p| p.col == last_col));
}

#[test]
fn test_numbering_follows_reading_order() {
    let mut generator = Generator::with_seed(5);
    let crossword = generator.generate(&dataset()).crossword;

    let mut starts: Vec<Position> = crossword.clues.iter().map(|c| c.start()).collect();
    starts.sort();
    starts.dedup();
    for (i, start) in starts.iter().enumerate() {
        assert_eq!(crossword.number_at(*start), Some(i + 1));
    }
    for clue in &crossword.clues {
        assert!(clue.facts.contains(&clue.text));
    }
}

#[test]
fn test_answers_respect_length_bounds() {
    let config = GeneratorConfig {
        min_word_len: 6,
        max_word_len: 8,
        min_words: 3,
        ..Default::default()
    };
    let mut generator = Generator::with_rng(config, StdRng::seed_from_u64(31));
    let generation = generator.generate(&dataset());
    for clue in &generation.crossword.clues {
        assert!((6..=8).contains(&clue.answer.len()), "{}", clue.answer);
    }
}
