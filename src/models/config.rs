use crate::models::EntityLabel;
use crate::Error;

/// Filter policy applied by the `Classifier`.
///
/// Label and keyword sets are borrowed slices so a default configuration can live in a `const`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierConfig<'a> {
    /// Minimum length, in characters, of any reported text unit (inclusive).
    pub min_word_len: usize,
    /// Maximum length, in characters, of any reported text unit (inclusive).
    pub max_word_len: usize,
    /// Entity labels eligible for brand reporting.
    pub brand_labels: &'a [EntityLabel],
    /// Entity labels reported by label name instead of literal text.
    pub replacement_labels: &'a [EntityLabel],
    /// Control words which are never reported (compared case-insensitively).
    pub sms_keywords: &'a [&'a str],
}

impl ClassifierConfig<'_> {
    /// Reports bounds that admit no length. Classification itself accepts any bounds.
    pub fn validate(&self) -> Result<(), Error> {
        if self.max_word_len == 0 {
            return Err(Error::ConfigError(
                "max_word_len must be greater than zero".to_string(),
            ));
        }

        if self.min_word_len > self.max_word_len {
            return Err(Error::ConfigError(format!(
                "min_word_len ({}) exceeds max_word_len ({})",
                self.min_word_len, self.max_word_len
            )));
        }

        Ok(())
    }

    pub fn is_within_length_bounds(&self, char_len: usize) -> bool {
        (self.min_word_len..=self.max_word_len).contains(&char_len)
    }

    pub fn is_brand_label(&self, label: EntityLabel) -> bool {
        self.brand_labels.contains(&label)
    }

    pub fn is_replacement_label(&self, label: EntityLabel) -> bool {
        self.replacement_labels.contains(&label)
    }

    pub fn is_sms_keyword(&self, lowercased_text: &str) -> bool {
        self.sms_keywords
            .iter()
            .any(|keyword| keyword.to_lowercase() == lowercased_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_CLASSIFIER_CONFIG;

    #[test]
    fn test_default_config_is_valid() {
        assert!(DEFAULT_CLASSIFIER_CONFIG.validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let config = ClassifierConfig {
            min_word_len: 10,
            max_word_len: 5,
            ..*DEFAULT_CLASSIFIER_CONFIG
        };
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_rejects_zero_max_length() {
        let config = ClassifierConfig {
            min_word_len: 0,
            max_word_len: 0,
            ..*DEFAULT_CLASSIFIER_CONFIG
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        let config = DEFAULT_CLASSIFIER_CONFIG;
        assert!(!config.is_within_length_bounds(2));
        assert!(config.is_within_length_bounds(3));
        assert!(config.is_within_length_bounds(40));
        assert!(!config.is_within_length_bounds(41));
    }

    #[test]
    fn test_sms_keywords_are_case_insensitive() {
        let config = ClassifierConfig {
            sms_keywords: &["STOP"],
            ..*DEFAULT_CLASSIFIER_CONFIG
        };
        assert!(config.is_sms_keyword("stop"));
        assert!(!config.is_sms_keyword("stops"));
    }
}
