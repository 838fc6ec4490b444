use crate::element::Element;
use crate::error::{CrosswordError, Result};
use crate::layout::{crop, number_clues, Crossword};
use crate::normalize::{build_pool, Candidate};
use crate::placement::place_words;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Configuration for crossword generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Side of the square working grid
    pub grid_size: usize,
    /// Minimum number of placed words for an attempt to count
    pub min_words: usize,
    /// Maximum attempts before falling back
    pub max_attempts: usize,
    /// How many dataset records the fallback attempt uses
    pub fallback_pool: usize,
    /// Shortest accepted answer
    pub min_word_len: usize,
    /// Longest accepted answer
    pub max_word_len: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_size: 25,
            min_words: 10,
            max_attempts: 50,
            fallback_pool: 15,
            min_word_len: 4,
            max_word_len: 14,
        }
    }
}

/// How a crossword was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationOutcome {
    /// An attempt reached the minimum word count
    Success { attempts: usize },
    /// Every attempt fell short; the reduced-pool attempt was returned as is
    Fallback,
}

/// A generated crossword and how it was obtained
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    pub crossword: Crossword,
    pub outcome: GenerationOutcome,
}

impl Generation {
    pub fn is_fallback(&self) -> bool {
        self.outcome == GenerationOutcome::Fallback
    }
}

/// Crossword generator
pub struct Generator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a new generator with default configuration
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(GeneratorConfig::default(), StdRng::seed_from_u64(seed))
    }

    /// Create a generator with an explicit configuration and random source
    pub fn with_rng(config: GeneratorConfig, rng: StdRng) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Random source shared with the session's hint selection
    pub(crate) fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Generate a crossword, retrying up to `max_attempts` times.
    ///
    /// Never fails: when no attempt reaches `min_words`, one last attempt on
    /// the first `fallback_pool` records is returned whatever its size.
    pub fn generate(&mut self, elements: &[Element]) -> Generation {
        for attempt in 1..=self.config.max_attempts {
            match self.try_generate(elements) {
                Ok(crossword) => {
                    info!(
                        "crossword ready after {} attempt(s): {} words on {}x{}",
                        attempt,
                        crossword.word_count(),
                        crossword.grid.rows(),
                        crossword.grid.cols()
                    );
                    return Generation {
                        crossword,
                        outcome: GenerationOutcome::Success { attempts: attempt },
                    };
                }
                Err(e) => debug!("attempt {} rejected: {}", attempt, e),
            }
        }

        let reduced = &elements[..elements.len().min(self.config.fallback_pool)];
        let pool = build_pool(reduced, &self.config, &mut self.rng);
        let crossword = self.assemble(pool);
        warn!(
            "no attempt reached {} words; falling back to {} words",
            self.config.min_words,
            crossword.word_count()
        );
        Generation {
            crossword,
            outcome: GenerationOutcome::Fallback,
        }
    }

    /// Run a single attempt over the whole dataset
    pub fn try_generate(&mut self, elements: &[Element]) -> Result<Crossword> {
        let required = self.config.min_words;
        let pool = build_pool(elements, &self.config, &mut self.rng);
        if pool.len() < required {
            return Err(CrosswordError::NotEnoughWords {
                found: pool.len(),
                required,
            });
        }

        let crossword = self.assemble(pool);
        if crossword.word_count() < required {
            return Err(CrosswordError::NotEnoughWords {
                found: crossword.word_count(),
                required,
            });
        }
        Ok(crossword)
    }

    /// Place, crop and number a candidate pool
    fn assemble(&mut self, pool: Vec<Candidate>) -> Crossword {
        let layout = place_words(pool, self.config.grid_size, &mut self.rng);
        debug!("placed {} words", layout.placements.len());
        let (grid, placements) = crop(&layout.grid, &layout.placements);
        let clues = number_clues(&placements);
        Crossword { grid, clues }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(name: &str) -> Element {
        Element {
            name: name.to_string(),
            atomic_number: 1,
            symbol: "X".to_string(),
            ..Default::default()
        }
    }

    /// Fifteen words that share no letters with each other
    fn isolated() -> Vec<Element> {
        "ABCDEFGHIJKLMNO"
            .chars()
            .map(|c| element(&c.to_string().repeat(5)))
            .collect()
    }

    #[test]
    fn test_try_generate_rejects_small_pool() {
        let mut generator = Generator::with_seed(1);
        let elements: Vec<Element> = ["Neon", "Argon", "Xenon"].iter().map(|n| element(n)).collect();
        let err = generator.try_generate(&elements).unwrap_err();
        assert!(matches!(
            err,
            CrosswordError::NotEnoughWords { found: 3, required: 10 }
        ));
    }

    #[test]
    fn test_fallback_when_words_never_cross() {
        let mut generator = Generator::with_seed(2);
        let generation = generator.generate(&isolated());
        assert!(generation.is_fallback());
        // Only the first (longest) word can ever be placed
        assert_eq!(generation.crossword.word_count(), 1);
        assert_eq!(generation.crossword.grid.rows(), 1);
        assert_eq!(generation.crossword.grid.cols(), 5);
    }

    #[test]
    fn test_fallback_on_empty_dataset() {
        let mut generator = Generator::with_seed(3);
        let generation = generator.generate(&[]);
        assert!(generation.is_fallback());
        assert_eq!(generation.crossword.word_count(), 0);
        assert!(generation.crossword.grid.is_empty());
    }

    #[test]
    fn test_fallback_uses_reduced_prefix() {
        let config = GeneratorConfig {
            max_attempts: 3,
            fallback_pool: 2,
            ..Default::default()
        };
        let mut generator = Generator::with_rng(config, StdRng::seed_from_u64(4));
        let mut elements = isolated();
        elements.insert(0, element("Carbon"));
        elements.insert(1, element("Neon"));
        let generation = generator.generate(&elements);
        assert!(generation.is_fallback());
        let mut answers: Vec<&str> = generation
            .crossword
            .clues
            .iter()
            .map(|c| c.answer.as_str())
            .collect();
        answers.sort();
        assert_eq!(answers, vec!["CARBON", "NEON"]);
    }
}
