//! Crossword engine for the chemistry quiz.
//!
//! Builds a crossword from a list of chemical elements (normalise names,
//! place words by intersection, crop, number the clues) and runs a solving
//! session with a hint budget and a letter-based score.

mod element;
mod error;
mod generator;
mod grid;
mod layout;
mod normalize;
mod placement;
mod quiz;
mod session;

pub use element::{parse_elements, ClueTemplate, Element};
pub use error::{CrosswordError, Result};
pub use generator::{Generation, GenerationOutcome, Generator, GeneratorConfig};
pub use grid::{Direction, Grid, Position};
pub use layout::{crop, number_clues, Clue, Crossword};
pub use normalize::{build_pool, normalize_word, Candidate};
pub use placement::{place_words, Layout, Placement};
pub use quiz::Quiz;
pub use session::{
    format_time, FinishReport, Move, ScoreBreakdown, Session, SessionConfig, SessionState,
    Summary, UserCell,
};
