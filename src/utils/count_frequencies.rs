use crate::types::Frequency;
use std::collections::HashMap;

/// Counts the frequency of each key in the given list.
///
/// # Arguments
/// * `keys` - A slice of keys (brand names or word categories) to analyze.
///
/// # Returns
/// * A `HashMap` where the keys are the distinct list entries and the values are their
///   respective frequencies.
pub fn count_frequencies(keys: &[String]) -> HashMap<String, Frequency> {
    let mut frequencies: HashMap<String, Frequency> = HashMap::new();

    for key in keys {
        *frequencies.entry(key.clone()).or_insert(0) += 1;
    }

    frequencies
}
