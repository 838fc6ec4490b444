use crate::element::Element;
use crate::generator::GeneratorConfig;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// A word ready for placement together with its clue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Uppercase A-Z answer
    pub word: String,
    /// The clue shown for this answer
    pub clue: String,
    /// Every clue sentence the source element offers (for extra clues)
    pub facts: Vec<String>,
}

/// Uppercase, strip diacritics and drop everything that is not A-Z.
///
/// `"Uranio-238 (U)"` becomes `"URANIOU"`.
pub fn normalize_word(name: &str) -> String {
    name.to_uppercase()
        .nfd()
        .filter(|c| c.is_ascii_uppercase())
        .collect()
}

/// Turn the dataset into placement candidates.
///
/// Elements are shuffled, paired with one random clue, filtered by word
/// length and finally sorted longest first. The sort is stable, so words of
/// equal length keep their shuffled order. Elements without any usable clue
/// are skipped.
pub fn build_pool<R: Rng + ?Sized>(
    elements: &[Element],
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<Candidate> {
    let mut shuffled: Vec<&Element> = elements.iter().collect();
    shuffled.shuffle(rng);

    let mut pool: Vec<Candidate> = shuffled
        .into_iter()
        .filter_map(|element| {
            let word = normalize_word(&element.name);
            let len = word.len();
            if len < config.min_word_len || len > config.max_word_len {
                return None;
            }
            let clue = element.random_clue(rng, &[])?;
            Some(Candidate {
                word,
                clue,
                facts: element.clue_sentences(),
            })
        })
        .collect();

    pool.sort_by(|a, b| b.word.len().cmp(&a.word.len()));
    pool
}
