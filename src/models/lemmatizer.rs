use crate::types::{Token, TokenRef};
use std::collections::HashMap;

const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("am", "be"),
    ("are", "be"),
    ("is", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("went", "go"),
    ("gone", "go"),
    ("going", "go"),
    ("made", "make"),
    ("making", "make"),
    ("took", "take"),
    ("taken", "take"),
    ("taking", "take"),
    ("came", "come"),
    ("coming", "come"),
    ("got", "get"),
    ("gotten", "get"),
    ("gave", "give"),
    ("given", "give"),
    ("giving", "give"),
    ("bought", "buy"),
    ("sent", "send"),
    ("paid", "pay"),
    ("said", "say"),
    ("told", "tell"),
    ("thought", "think"),
    ("won", "win"),
    ("left", "leave"),
    ("saw", "see"),
    ("seen", "see"),
    ("knew", "know"),
    ("known", "know"),
    ("ran", "run"),
    ("better", "well"),
    ("best", "good"),
    ("children", "child"),
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("mice", "mouse"),
    ("news", "news"),
    ("series", "series"),
    ("species", "species"),
    ("business", "business"),
    ("address", "address"),
    ("morning", "morning"),
    ("evening", "evening"),
    ("nothing", "nothing"),
    ("something", "something"),
    ("anything", "anything"),
    ("everything", "everything"),
    ("thing", "thing"),
    ("during", "during"),
    ("spring", "spring"),
    ("string", "string"),
    ("wedding", "wedding"),
    ("shopping", "shopping"),
    ("pricing", "pricing"),
    ("red", "red"),
    ("bed", "bed"),
    ("need", "need"),
    ("speed", "speed"),
    ("seed", "seed"),
    ("feed", "feed"),
    ("hundred", "hundred"),
];

// Final consonants which are not undoubled (`call`, `miss`, `buzz`)
const KEEP_DOUBLED: &[char] = &['l', 's', 'z'];

// Stem endings which regain a silent `e` (`receiv` -> `receive`)
const SILENT_E_ENDINGS: &[char] = &['v', 'c', 'g', 'u'];

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Lookup lemmatizer with suffix rules for English inflections.
pub struct Lemmatizer {
    irregular_forms: HashMap<&'static str, &'static str>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer {
    pub fn new() -> Self {
        Self {
            irregular_forms: IRREGULAR_FORMS.iter().copied().collect(),
        }
    }

    /// Returns the base form of `text`.
    ///
    /// All-caps acronyms are returned verbatim; tokens containing non-alphabetic characters are
    /// only lowercased.
    pub fn lemmatize(&self, text: &TokenRef) -> Token {
        if text.chars().count() > 1 && text.chars().all(char::is_uppercase) {
            return text.to_string();
        }

        let lower = text.to_lowercase();
        if !lower.chars().all(char::is_alphabetic) {
            return lower;
        }

        if let Some(lemma) = self.irregular_forms.get(lower.as_str()) {
            return lemma.to_string();
        }

        if lower.chars().count() <= 3 {
            return lower;
        }

        Self::apply_suffix_rules(&lower)
    }

    fn apply_suffix_rules(lower: &str) -> Token {
        if let Some(stem) = lower.strip_suffix("ies") {
            if stem.chars().count() >= 2 {
                return format!("{}y", stem);
            }
        }

        if let Some(stem) = lower.strip_suffix("sses") {
            return format!("{}ss", stem);
        }

        for suffix in ["xes", "ches", "shes", "zzes"] {
            if lower.ends_with(suffix) {
                return lower[..lower.len() - 2].to_string();
            }
        }

        if lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is") {
            return lower.to_string();
        }

        if let Some(stem) = lower.strip_suffix('s') {
            return stem.to_string();
        }

        for suffix in ["ing", "ed"] {
            if let Some(stem) = lower.strip_suffix(suffix) {
                if stem.chars().count() >= 3 && stem.chars().any(|c| VOWELS.contains(&c)) {
                    return Self::restore_stem(stem);
                }
            }
        }

        lower.to_string()
    }

    /// Undouble a final consonant (`runn` -> `run`) or restore a silent `e` (`charg` -> `charge`).
    fn restore_stem(stem: &str) -> Token {
        let mut chars = stem.chars().rev();
        let last = chars.next();
        let second_last = chars.next();

        match (last, second_last) {
            (Some(a), Some(b)) if a == b && Self::can_undouble(a) => {
                stem[..stem.len() - a.len_utf8()].to_string()
            }
            (Some(a), _) if SILENT_E_ENDINGS.contains(&a) => format!("{}e", stem),
            _ if stem.ends_with("iz") => format!("{}e", stem),
            _ => stem.to_string(),
        }
    }

    fn can_undouble(c: char) -> bool {
        !VOWELS.contains(&c) && !KEEP_DOUBLED.contains(&c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(text: &str) -> String {
        Lemmatizer::new().lemmatize(text)
    }

    #[test]
    fn test_plural_nouns() {
        assert_eq!(lemma("offers"), "offer");
        assert_eq!(lemma("emails"), "email");
        assert_eq!(lemma("companies"), "company");
        assert_eq!(lemma("boxes"), "box");
        assert_eq!(lemma("matches"), "match");
        assert_eq!(lemma("classes"), "class");
        assert_eq!(lemma("prices"), "price");
        assert_eq!(lemma("buzzes"), "buzz");
        assert_eq!(lemma("prizes"), "prize");
    }

    #[test]
    fn test_verb_inflections() {
        assert_eq!(lemma("running"), "run");
        assert_eq!(lemma("stopped"), "stop");
        assert_eq!(lemma("called"), "call");
        assert_eq!(lemma("missed"), "miss");
        assert_eq!(lemma("offered"), "offer");
        assert_eq!(lemma("received"), "receive");
        assert_eq!(lemma("charging"), "charge");
        assert_eq!(lemma("continued"), "continue");
    }

    #[test]
    fn test_irregular_forms() {
        assert_eq!(lemma("went"), "go");
        assert_eq!(lemma("Children"), "child");
        assert_eq!(lemma("morning"), "morning");
        assert_eq!(lemma("news"), "news");
    }

    #[test]
    fn test_words_without_inflection_are_lowercased() {
        assert_eq!(lemma("Contact"), "contact");
        assert_eq!(lemma("email"), "email");
        assert_eq!(lemma("bus"), "bus");
        assert_eq!(lemma("status"), "status");
    }

    #[test]
    fn test_acronyms_and_mixed_tokens() {
        assert_eq!(lemma("ACME"), "ACME");
        assert_eq!(lemma("UPS"), "UPS");
        assert_eq!(lemma("T-Mobile"), "t-mobile");
        assert_eq!(lemma("Corp."), "corp.");
    }
}
