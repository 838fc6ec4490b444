use crate::element::Element;
use crate::generator::{GenerationOutcome, Generator};
use crate::grid::Position;
use crate::session::{FinishReport, Session, SessionConfig, Summary};
use log::info;

/// A playable quiz: the dataset, the generator and the current session.
///
/// Restarting generates a brand new crossword from the same dataset.
pub struct Quiz {
    elements: Vec<Element>,
    generator: Generator,
    config: SessionConfig,
    session: Session,
    outcome: GenerationOutcome,
}

impl Quiz {
    /// Generate a first crossword and start solving it
    pub fn new(elements: Vec<Element>, mut generator: Generator, config: SessionConfig) -> Self {
        let generation = generator.generate(&elements);
        let session = Session::new(generation.crossword, config.clone());
        Self {
            elements,
            generator,
            config,
            session,
            outcome: generation.outcome,
        }
    }

    /// Throw the current session away and start over on a fresh crossword
    pub fn restart(&mut self) {
        let generation = self.generator.generate(&self.elements);
        info!("new crossword with {} words", generation.crossword.word_count());
        self.session = Session::new(generation.crossword, self.config.clone());
        self.outcome = generation.outcome;
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// How the current crossword was generated
    pub fn outcome(&self) -> GenerationOutcome {
        self.outcome
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn reveal_initial_letter(&mut self) -> Option<Position> {
        self.session.reveal_initial_letter(self.generator.rng_mut())
    }

    pub fn reveal_random_letter(&mut self) -> Option<Position> {
        self.session.reveal_random_letter(self.generator.rng_mut())
    }

    pub fn request_extra_clue(&mut self, clue_index: usize) -> Option<String> {
        self.session
            .request_extra_clue(clue_index, self.generator.rng_mut())
    }

    pub fn finish(&mut self) -> Option<FinishReport> {
        self.session.finish()
    }

    /// Move from the corrected grid to the summary
    pub fn settle(&mut self) -> Option<Summary> {
        let summary = self.session.settle()?;
        info!("quiz finished: {} in {}", summary.score, summary.time);
        Some(summary)
    }

    pub fn summary(&self) -> Option<Summary> {
        self.session.summary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionState;

    const NAMES: [&str; 12] = [
        "Carbon", "Neon", "Sodium", "Iron", "Nickel", "Silicon", "Argon", "Oxygen", "Nitrogen",
        "Chlorine", "Calcium", "Helium",
    ];

    fn elements() -> Vec<Element> {
        NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| Element {
                name: name.to_string(),
                atomic_number: i as u32 + 1,
                symbol: name[..2].to_string(),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_new_quiz_starts_active() {
        let quiz = Quiz::new(elements(), Generator::with_seed(7), SessionConfig::default());
        assert_eq!(quiz.session().state(), SessionState::Active);
        assert!(quiz.session().crossword().word_count() >= 1);
        assert_eq!(quiz.elements().len(), 12);
        assert!(quiz.summary().is_none());
    }

    #[test]
    fn test_hints_go_through_shared_rng() {
        let mut quiz = Quiz::new(elements(), Generator::with_seed(11), SessionConfig::default());
        let pos = quiz.reveal_initial_letter().unwrap();
        assert!(quiz.session().user_cell(pos).unwrap().is_hint);
        quiz.reveal_random_letter().unwrap();
        quiz.request_extra_clue(0).unwrap();
        assert_eq!(quiz.session().penalty_points(), 5 + 2 + 5);
    }

    #[test]
    fn test_finish_settle_restart() {
        let mut quiz = Quiz::new(elements(), Generator::with_seed(13), SessionConfig::default());
        let report = quiz.finish().unwrap();
        assert_eq!(report.correct_letters, 0);
        assert!(quiz.summary().is_none());

        let summary = quiz.settle().unwrap();
        assert_eq!(summary.details.total_letters, report.total_letters);
        assert_eq!(quiz.summary(), Some(summary));

        quiz.restart();
        assert_eq!(quiz.session().state(), SessionState::Active);
        assert_eq!(quiz.session().penalty_points(), 0);
        assert_eq!(quiz.session().initial_hints_remaining(), 10);
    }
}
