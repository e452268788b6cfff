use crate::constants::{EMAIL_CATEGORY, URL_CATEGORY};
use crate::models::{
    AnnotatedDocument, AnnotatedToken, Annotator, Classification, ClassifierConfig, EntitySpan,
};
use crate::types::{BrandName, WordCategory};
use crate::utils::{count_frequencies, is_plain_ascii};
use log::{debug, trace};

/// Splits a text document into brand and word frequency tables.
///
/// Holds only shared references, so one instance can serve any number of documents (and
/// threads, when the annotator is shared).
pub struct Classifier<'a, A: Annotator> {
    config: &'a ClassifierConfig<'a>,
    annotator: &'a A,
}

impl<'a, A: Annotator> Classifier<'a, A> {
    /// Any bounds are accepted. Bounds that admit no length leave only replacement labels
    /// in the output; see [`ClassifierConfig::validate`] for an explicit check.
    pub fn new(config: &'a ClassifierConfig<'a>, annotator: &'a A) -> Self {
        Self { config, annotator }
    }

    /// Classifies `text`. Absent or empty input yields two empty tables.
    pub fn classify(&self, text: Option<&str>) -> Classification {
        let text = match text {
            Some(text) if !text.is_empty() => text,
            _ => {
                debug!("Empty input; nothing to classify");
                return Classification::default();
            }
        };

        debug!("Annotating...");
        let document = self.annotator.annotate(text);

        let mut brands: Vec<BrandName> = Vec::new();
        let mut words: Vec<WordCategory> = Vec::new();

        debug!("Filtering entity spans...");
        self.collect_entities(&document, &mut brands, &mut words);

        debug!("Filtering tokens...");
        self.collect_words(&document, &mut words);

        Classification {
            entities: count_frequencies(&brands),
            words: count_frequencies(&words),
        }
    }

    pub fn classify_text(&self, text: &str) -> Classification {
        self.classify(Some(text))
    }

    fn collect_entities(
        &self,
        document: &AnnotatedDocument,
        brands: &mut Vec<BrandName>,
        words: &mut Vec<WordCategory>,
    ) {
        for entity in &document.entities {
            if self.is_brand_candidate(entity) {
                let lexeme = self.annotator.lexeme(&entity.text);
                if lexeme.like_url || lexeme.like_email {
                    trace!("Rejected brand candidate {:?}: url or email", entity.text);
                } else {
                    brands.push(entity.text.clone());
                }
            }

            // Not exclusive with the brand check above
            if self.config.is_replacement_label(entity.label) {
                words.push(entity.label.as_str().to_string());
            }
        }
    }

    fn collect_words(&self, document: &AnnotatedDocument, words: &mut Vec<WordCategory>) {
        for token in &document.tokens {
            if !self.is_eligible_token(token) {
                continue;
            }

            match Self::word_category(token) {
                Some(category) => words.push(category),
                None => trace!("Dropped non-Latin-1 token {:?}", token.text),
            }
        }
    }

    fn is_brand_candidate(&self, entity: &EntitySpan) -> bool {
        self.config.is_brand_label(entity.label)
            && self.config.is_within_length_bounds(entity.char_len())
            && is_plain_ascii(&entity.text)
            && !self.config.is_sms_keyword(&entity.lower)
    }

    fn is_eligible_token(&self, token: &AnnotatedToken) -> bool {
        self.config.is_within_length_bounds(token.char_len())
            && !(token.is_stop || token.is_punct || token.like_num || token.is_space)
            && !token
                .ent_type
                .is_some_and(|label| self.config.is_replacement_label(label))
            && !self.config.is_sms_keyword(&token.lower)
    }

    /// Email takes precedence over url.
    fn word_category(token: &AnnotatedToken) -> Option<WordCategory> {
        if token.like_email {
            Some(EMAIL_CATEGORY.to_string())
        } else if token.like_url {
            Some(URL_CATEGORY.to_string())
        } else if is_plain_ascii(&token.text) {
            Some(token.lemma.to_lowercase())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntityLabel, Lexeme};
    use crate::DEFAULT_CLASSIFIER_CONFIG;

    /// Returns a fixed document regardless of input.
    struct FixedAnnotator {
        document: AnnotatedDocument,
        url_like: Vec<&'static str>,
    }

    impl Annotator for FixedAnnotator {
        fn annotate(&self, _text: &str) -> AnnotatedDocument {
            self.document.clone()
        }

        fn lexeme(&self, text: &str) -> Lexeme {
            Lexeme {
                like_url: self.url_like.contains(&text),
                ..Lexeme::default()
            }
        }
    }

    fn token(text: &str) -> AnnotatedToken {
        AnnotatedToken {
            text: text.to_string(),
            lower: text.to_lowercase(),
            lemma: text.to_lowercase(),
            ent_type: None,
            is_stop: false,
            is_punct: false,
            like_num: false,
            is_space: false,
            like_url: false,
            like_email: false,
            start: 0,
            end: text.len(),
        }
    }

    fn span(text: &str, label: EntityLabel, token_start: usize, token_end: usize) -> EntitySpan {
        EntitySpan {
            text: text.to_string(),
            lower: text.to_lowercase(),
            label,
            token_start,
            token_end,
            start: 0,
            end: text.len(),
        }
    }

    fn classify(document: AnnotatedDocument) -> Classification {
        let annotator = FixedAnnotator {
            document,
            url_like: vec!["shop.acme.com"],
        };
        Classifier::new(DEFAULT_CLASSIFIER_CONFIG, &annotator).classify_text("ignored")
    }

    #[test]
    fn test_absent_and_empty_input_skip_annotation() {
        let annotator = FixedAnnotator {
            document: AnnotatedDocument {
                tokens: vec![token("content")],
                entities: vec![],
            },
            url_like: vec![],
        };
        let classifier = Classifier::new(DEFAULT_CLASSIFIER_CONFIG, &annotator);

        assert!(classifier.classify(None).is_empty());
        assert!(classifier.classify(Some("")).is_empty());
        assert!(!classifier.classify(Some("x")).is_empty());
    }

    #[test]
    fn test_email_takes_precedence_over_url() {
        let mut both = token("sales@acme.com");
        both.like_email = true;
        both.like_url = true;
        let mut url = token("acme.com");
        url.like_url = true;

        let classification = classify(AnnotatedDocument {
            tokens: vec![both, url],
            entities: vec![],
        });

        assert_eq!(classification.words.get("EMAIL"), Some(&1));
        assert_eq!(classification.words.get("URL"), Some(&1));
        assert_eq!(classification.words.len(), 2);
    }

    #[test]
    fn test_replacement_label_reported_once_per_span() {
        let mut day = token("5th");
        day.like_num = true;
        day.ent_type = Some(EntityLabel::Date);
        let mut month = token("January");
        month.ent_type = Some(EntityLabel::Date);

        let classification = classify(AnnotatedDocument {
            tokens: vec![day, month],
            entities: vec![span("5th January", EntityLabel::Date, 0, 2)],
        });

        assert_eq!(classification.words, [("DATE".to_string(), 1)].into());
        assert!(classification.entities.is_empty());
    }

    #[test]
    fn test_brand_label_can_also_be_a_replacement_label() {
        let mut globex = token("Globex");
        globex.ent_type = Some(EntityLabel::Org);

        let annotator = FixedAnnotator {
            document: AnnotatedDocument {
                tokens: vec![globex],
                entities: vec![span("Globex", EntityLabel::Org, 0, 1)],
            },
            url_like: vec![],
        };
        let config = ClassifierConfig {
            replacement_labels: &[EntityLabel::Org],
            ..*DEFAULT_CLASSIFIER_CONFIG
        };
        let classification = Classifier::new(&config, &annotator).classify_text("Globex");

        assert_eq!(classification.entities, [("Globex".to_string(), 1)].into());
        assert_eq!(classification.words, [("ORG".to_string(), 1)].into());
    }

    #[test]
    fn test_url_like_brand_is_rejected() {
        let classification = classify(AnnotatedDocument {
            tokens: vec![],
            entities: vec![
                span("shop.acme.com", EntityLabel::Org, 0, 1),
                span("Initech", EntityLabel::Org, 1, 2),
            ],
        });

        assert_eq!(classification.entities, [("Initech".to_string(), 1)].into());
    }

    #[test]
    fn test_brand_length_bounds_are_inclusive() {
        let classification = classify(AnnotatedDocument {
            tokens: vec![],
            entities: vec![
                span("AB", EntityLabel::Org, 0, 1),
                span("ABC", EntityLabel::Org, 1, 2),
                span(&"X".repeat(40), EntityLabel::Org, 2, 3),
                span(&"Y".repeat(41), EntityLabel::Org, 3, 4),
            ],
        });

        assert_eq!(classification.entities.len(), 2);
        assert!(classification.entities.contains_key("ABC"));
        assert!(classification.entities.contains_key(&"X".repeat(40)));
    }

    #[test]
    fn test_token_length_bounds_are_inclusive() {
        let classification = classify(AnnotatedDocument {
            tokens: vec![
                token("ab"),
                token("abc"),
                token(&"x".repeat(40)),
                token(&"y".repeat(41)),
            ],
            entities: vec![],
        });

        assert_eq!(classification.words.len(), 2);
        assert!(classification.words.contains_key("abc"));
        assert!(classification.words.contains_key(&"x".repeat(40)));
    }

    #[test]
    fn test_non_latin1_brand_and_token_are_dropped() {
        let classification = classify(AnnotatedDocument {
            tokens: vec![token("Škoda"), token("Café")],
            entities: vec![
                span("Škoda Auto", EntityLabel::Org, 0, 1),
                span("Café Rouge", EntityLabel::Org, 1, 2),
            ],
        });

        assert_eq!(
            classification.entities,
            [("Café Rouge".to_string(), 1)].into()
        );
        assert_eq!(classification.words, [("café".to_string(), 1)].into());
    }

    #[test]
    fn test_flagged_tokens_are_filtered() {
        let mut stop = token("about");
        stop.is_stop = true;
        let mut punct = token("...");
        punct.is_punct = true;
        let mut number = token("1,000");
        number.like_num = true;
        let mut space = token("\n\n\n");
        space.is_space = true;

        let classification = classify(AnnotatedDocument {
            tokens: vec![stop, punct, number, space, token("HELP"), token("Stop")],
            entities: vec![span("STOP", EntityLabel::Org, 5, 6)],
        });

        assert!(classification.is_empty());
    }

    #[test]
    fn test_lemma_is_lowercased() {
        let mut offers = token("OFFERS");
        offers.lemma = "Offer".to_string();

        let classification = classify(AnnotatedDocument {
            tokens: vec![offers, token("Offer")],
            entities: vec![],
        });

        assert_eq!(classification.words, [("offer".to_string(), 2)].into());
    }

    #[test]
    fn test_empty_length_range_keeps_replacement_labels() {
        let mut meet = token("Meet");
        meet.lemma = "meet".to_string();
        let mut tomorrow = token("tomorrow");
        tomorrow.ent_type = Some(EntityLabel::Date);

        let annotator = FixedAnnotator {
            document: AnnotatedDocument {
                tokens: vec![meet, tomorrow],
                entities: vec![
                    span("tomorrow", EntityLabel::Date, 1, 2),
                    span("Initech", EntityLabel::Org, 0, 1),
                ],
            },
            url_like: vec![],
        };

        for (min_word_len, max_word_len) in [(50, 40), (0, 0)] {
            let config = ClassifierConfig {
                min_word_len,
                max_word_len,
                ..*DEFAULT_CLASSIFIER_CONFIG
            };
            let classification = Classifier::new(&config, &annotator).classify_text("ignored");

            assert!(classification.entities.is_empty());
            assert_eq!(classification.words, [("DATE".to_string(), 1)].into());
        }
    }
}
