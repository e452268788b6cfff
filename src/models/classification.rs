use crate::types::{BrandFrequencyMap, Frequency, WordFrequencyMap};
use crate::Error;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// The two frequency tables produced for one text document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Brand (organization) names, keyed by their literal text.
    pub entities: BrandFrequencyMap,
    /// Lemmas, redaction labels and the `EMAIL` / `URL` categories.
    pub words: WordFrequencyMap,
}

// Key-ordered view used for deterministic output
#[derive(Serialize)]
struct SortedClassification<'a> {
    entities: BTreeMap<&'a str, Frequency>,
    words: BTreeMap<&'a str, Frequency>,
}

impl Classification {
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.words.is_empty()
    }

    /// Splits into `(brand_counts, word_counts)`.
    pub fn into_pair(self) -> (BrandFrequencyMap, WordFrequencyMap) {
        (self.entities, self.words)
    }

    /// Response body in the `{"entities": {...}, "words": {...}}` shape, keys sorted.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(&self.sorted())?)
    }

    /// The two tables on separate lines, entities first.
    pub fn to_plain(&self) -> Result<String, Error> {
        let sorted = self.sorted();
        Ok(format!(
            "{}\n{}",
            serde_json::to_string(&sorted.entities)?,
            serde_json::to_string(&sorted.words)?
        ))
    }

    fn sorted(&self) -> SortedClassification<'_> {
        SortedClassification {
            entities: Self::sorted_map(&self.entities),
            words: Self::sorted_map(&self.words),
        }
    }

    fn sorted_map(map: &HashMap<String, Frequency>) -> BTreeMap<&str, Frequency> {
        map.iter()
            .map(|(key, count)| (key.as_str(), *count))
            .collect()
    }
}
