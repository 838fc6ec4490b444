use crate::error::{CrosswordError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};

/// A chemical element record as supplied by the dataset.
///
/// Field names follow the English schema; the column names of the original
/// Italian spreadsheet export are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    #[serde(alias = "Elemento")]
    pub name: String,
    #[serde(alias = "Z", default)]
    pub atomic_number: u32,
    #[serde(alias = "Simbolo", default)]
    pub symbol: String,
    #[serde(
        alias = "Anno di scoperta",
        default,
        deserialize_with = "string_or_number"
    )]
    pub discovery_year: String,
    #[serde(alias = "Origine del nome", default)]
    pub name_origin: String,
    #[serde(alias = "Caratteristiche chimiche", default)]
    pub chemical_traits: String,
    /// Where the element is found; informational, never used as a clue
    #[serde(alias = "Dove si trova e diffusione in natura", default)]
    pub occurrence: String,
    #[serde(alias = "Utilizzo da parte dell'industria", default)]
    pub industrial_use: String,
    #[serde(
        alias = "Curiosità legate a come sono stati usati o considerati nel corso della storia",
        default
    )]
    pub historical_trivia: String,
}

/// Parse a JSON array of element records
pub fn parse_elements(json: &str) -> Result<Vec<Element>> {
    serde_json::from_str(json).map_err(|e| CrosswordError::InvalidDataset(e.to_string()))
}

/// Years show up both as strings ("1808", "Antichità") and bare numbers
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

/// One way of describing an element in a clue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClueTemplate {
    AtomicNumber,
    Symbol,
    DiscoveryYear,
    NameOrigin,
    ChemicalTrait,
    IndustrialUse,
    HistoricalTrivia,
}

impl ClueTemplate {
    pub const ALL: [ClueTemplate; 7] = [
        ClueTemplate::AtomicNumber,
        ClueTemplate::Symbol,
        ClueTemplate::DiscoveryYear,
        ClueTemplate::NameOrigin,
        ClueTemplate::ChemicalTrait,
        ClueTemplate::IndustrialUse,
        ClueTemplate::HistoricalTrivia,
    ];

    /// Render the clue sentence, or `None` when the backing attribute is empty
    pub fn render(&self, element: &Element) -> Option<String> {
        let (prefix, value) = match self {
            ClueTemplate::AtomicNumber => {
                if element.atomic_number == 0 {
                    return None;
                }
                return Some(format!("Element with atomic number {}", element.atomic_number));
            }
            ClueTemplate::Symbol => ("Its symbol is ", element.symbol.trim()),
            ClueTemplate::DiscoveryYear => ("Discovered in ", element.discovery_year.trim()),
            ClueTemplate::NameOrigin => ("Its name comes from: ", element.name_origin.trim()),
            ClueTemplate::ChemicalTrait => ("Characteristic: ", element.chemical_traits.trim()),
            ClueTemplate::IndustrialUse => ("Used for: ", element.industrial_use.trim()),
            ClueTemplate::HistoricalTrivia => ("Trivia: ", element.historical_trivia.trim()),
        };

        (!value.is_empty()).then(|| format!("{}{}", prefix, value))
    }
}

impl Element {
    /// Every clue sentence this element can produce, in template order
    pub fn clue_sentences(&self) -> Vec<String> {
        ClueTemplate::ALL
            .iter()
            .filter_map(|t| t.render(self))
            .collect()
    }

    /// Pick a random clue sentence that is not in `exclude`
    pub fn random_clue<R: Rng + ?Sized>(&self, rng: &mut R, exclude: &[String]) -> Option<String> {
        let available: Vec<String> = self
            .clue_sentences()
            .into_iter()
            .filter(|s| !exclude.contains(s))
            .collect();
        available.choose(rng).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn iron() -> Element {
        Element {
            name: "Iron".to_string(),
            atomic_number: 26,
            symbol: "Fe".to_string(),
            discovery_year: "Antiquity".to_string(),
            name_origin: String::new(),
            chemical_traits: "   ".to_string(),
            occurrence: "Earth's core".to_string(),
            industrial_use: "Steel production".to_string(),
            historical_trivia: String::new(),
        }
    }

    #[test]
    fn test_only_populated_templates_are_eligible() {
        let sentences = iron().clue_sentences();
        assert_eq!(
            sentences,
            vec![
                "Element with atomic number 26".to_string(),
                "Its symbol is Fe".to_string(),
                "Discovered in Antiquity".to_string(),
                "Used for: Steel production".to_string(),
            ]
        );
    }

    #[test]
    fn test_random_clue_respects_exclusions() {
        let mut rng = StdRng::seed_from_u64(7);
        let element = iron();
        let mut seen = Vec::new();
        while let Some(clue) = element.random_clue(&mut rng, &seen) {
            assert!(!seen.contains(&clue));
            seen.push(clue);
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_zero_atomic_number_is_not_a_clue() {
        let element = Element {
            name: "Mystery".to_string(),
            ..Default::default()
        };
        assert!(element.clue_sentences().is_empty());
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(element.random_clue(&mut rng, &[]), None);
    }

    #[test]
    fn test_parse_original_column_names() {
        let json = r#"[{
            "Elemento": "Sodio",
            "Z": 11,
            "Simbolo": "Na",
            "Anno di scoperta": 1807,
            "Origine del nome": "Dal latino sodanum",
            "Caratteristiche chimiche": "Metallo alcalino",
            "Dove si trova e diffusione in natura": "Sale marino",
            "Utilizzo da parte dell'industria": "Lampade stradali",
            "Curiosità legate a come sono stati usati o considerati nel corso della storia": "Isolato da Davy"
        }]"#;
        let elements = parse_elements(json).unwrap();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].name, "Sodio");
        assert_eq!(elements[0].atomic_number, 11);
        assert_eq!(elements[0].discovery_year, "1807");
        assert_eq!(elements[0].historical_trivia, "Isolato da Davy");
        assert_eq!(elements[0].occurrence, "Sale marino");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_elements("{not json").unwrap_err();
        assert!(matches!(err, CrosswordError::InvalidDataset(_)));
    }
}
