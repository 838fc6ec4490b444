//! Generate a crossword from a small dataset and play it out

use crossword_core::{parse_elements, Generator, Quiz, SessionConfig};

const DATASET: &str = r#"[
    {"name": "Hydrogen", "atomic_number": 1, "symbol": "H", "discovery_year": 1766},
    {"name": "Helium", "atomic_number": 2, "symbol": "He", "name_origin": "Greek helios, the Sun"},
    {"name": "Lithium", "atomic_number": 3, "symbol": "Li", "industrial_use": "Rechargeable batteries"},
    {"name": "Carbon", "atomic_number": 6, "symbol": "C", "chemical_traits": "Forms diamond and graphite"},
    {"name": "Nitrogen", "atomic_number": 7, "symbol": "N"},
    {"name": "Oxygen", "atomic_number": 8, "symbol": "O", "discovery_year": 1774},
    {"name": "Fluorine", "atomic_number": 9, "symbol": "F"},
    {"name": "Neon", "atomic_number": 10, "symbol": "Ne", "industrial_use": "Advertising signs"},
    {"name": "Sodium", "atomic_number": 11, "symbol": "Na"},
    {"name": "Magnesium", "atomic_number": 12, "symbol": "Mg"},
    {"name": "Aluminium", "atomic_number": 13, "symbol": "Al"},
    {"name": "Silicon", "atomic_number": 14, "symbol": "Si", "industrial_use": "Computer chips"},
    {"name": "Phosphorus", "atomic_number": 15, "symbol": "P"},
    {"name": "Chlorine", "atomic_number": 17, "symbol": "Cl"},
    {"name": "Argon", "atomic_number": 18, "symbol": "Ar"},
    {"name": "Potassium", "atomic_number": 19, "symbol": "K"},
    {"name": "Calcium", "atomic_number": 20, "symbol": "Ca"},
    {"name": "Titanium", "atomic_number": 22, "symbol": "Ti"},
    {"name": "Chromium", "atomic_number": 24, "symbol": "Cr"},
    {"name": "Nickel", "atomic_number": 28, "symbol": "Ni"}
]"#;

fn main() {
    let elements = match parse_elements(DATASET) {
        Ok(elements) => elements,
        Err(e) => {
            eprintln!("Bad dataset: {}", e);
            return;
        }
    };

    // Generate a puzzle
    println!("Generating a crossword from {} elements...\n", elements.len());
    let mut quiz = Quiz::new(elements, Generator::with_seed(42), SessionConfig::default());
    println!("Outcome: {:?}\n", quiz.outcome());

    let crossword = quiz.session().crossword().clone();
    println!("Solution:");
    println!("{}", crossword.grid);

    println!("Across:");
    for clue in crossword.across() {
        println!("{:>3}. {} ({})", clue.number, clue.text, clue.answer.len());
    }
    println!("\nDown:");
    for clue in crossword.down() {
        println!("{:>3}. {} ({})", clue.number, clue.text, clue.answer.len());
    }

    // Use a few hints
    println!("\n--- Hints ---\n");
    if let Some(pos) = quiz.reveal_initial_letter() {
        println!("Initial letter revealed at row {}, col {}", pos.row, pos.col);
    }
    if let Some(pos) = quiz.reveal_random_letter() {
        println!("Random letter revealed at row {}, col {}", pos.row, pos.col);
    }
    if let Some(text) = quiz.request_extra_clue(0) {
        println!("Extra clue for {}: {}", crossword.clues[0].answer, text);
    }

    // Solve the across words only, then finish
    for clue in crossword.across() {
        for (pos, letter) in clue.cells().zip(clue.answer.chars()) {
            quiz.session_mut().input(pos, Some(letter));
        }
    }
    for _ in 0..95 {
        quiz.session_mut().tick();
    }

    if let Some(report) = quiz.finish() {
        println!(
            "\nFinished: {}/{} letters correct",
            report.correct_letters, report.total_letters
        );
    }
    if let Some(summary) = quiz.settle() {
        println!("Score: {}", summary.score);
        println!("Time: {}", summary.time);
        println!("Penalty points: {}", summary.details.penalty_points);
    }
}
