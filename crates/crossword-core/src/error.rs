use thiserror::Error;

/// Errors produced by the crossword engine
#[derive(Debug, Error)]
pub enum CrosswordError {
    /// A generation attempt produced fewer words than required
    #[error("not enough words to build a crossword: found {found}, need {required}")]
    NotEnoughWords { found: usize, required: usize },
    /// The element dataset could not be parsed
    #[error("invalid element dataset: {0}")]
    InvalidDataset(String),
}

pub type Result<T> = std::result::Result<T, CrosswordError>;
