#[path = "../test_utils/lib.rs"]
mod test_utils;

use entity_sniffer::{
    count_named_entities, count_named_entities_with_custom_config, ClassifierConfig, EntityLabel,
    Error, DEFAULT_CLASSIFIER_CONFIG,
};
use test_utils::{entity_span, word_token, StubAnnotator};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_like_brand_is_rejected() {
        let mut annotator = StubAnnotator::new(
            vec![],
            vec![
                entity_span("support@globex.com", EntityLabel::Org, 0, 1),
                entity_span("Globex", EntityLabel::Org, 1, 2),
            ],
        );
        annotator.email_like = vec!["support@globex.com".to_string()];

        let classification = count_named_entities("ignored", &annotator).unwrap();

        assert_eq!(classification.entities.len(), 1);
        assert_eq!(classification.entities.get("Globex"), Some(&1));
    }

    #[test]
    fn test_custom_brand_labels() {
        let annotator = StubAnnotator::new(
            vec![],
            vec![
                entity_span("Globex", EntityLabel::Org, 0, 1),
                entity_span("Widget Pro", EntityLabel::Product, 1, 3),
            ],
        );
        let config = ClassifierConfig {
            brand_labels: &[EntityLabel::Org, EntityLabel::Product],
            ..*DEFAULT_CLASSIFIER_CONFIG
        };

        let classification =
            count_named_entities_with_custom_config(&config, "ignored", &annotator).unwrap();

        assert_eq!(classification.entities.get("Globex"), Some(&1));
        assert_eq!(classification.entities.get("Widget Pro"), Some(&1));
    }

    #[test]
    fn test_custom_replacement_labels() {
        let mut amount = word_token("$20");
        amount.ent_type = Some(EntityLabel::Money);
        let mut month = word_token("January");
        month.ent_type = Some(EntityLabel::Date);

        let annotator = StubAnnotator::new(
            vec![amount, month],
            vec![
                entity_span("$20", EntityLabel::Money, 0, 1),
                entity_span("January", EntityLabel::Date, 1, 2),
            ],
        );
        let config = ClassifierConfig {
            replacement_labels: &[EntityLabel::Money],
            ..*DEFAULT_CLASSIFIER_CONFIG
        };

        let classification =
            count_named_entities_with_custom_config(&config, "ignored", &annotator).unwrap();

        assert_eq!(classification.words.get("MONEY"), Some(&1));
        assert_eq!(classification.words.get("january"), Some(&1));
        assert_eq!(classification.words.get("DATE"), None);
        assert_eq!(classification.words.len(), 2);
    }

    #[test]
    fn test_custom_length_bounds() {
        let annotator = StubAnnotator::new(
            vec![word_token("ok"), word_token("deal"), word_token("discount")],
            vec![],
        );
        let config = ClassifierConfig {
            min_word_len: 2,
            max_word_len: 4,
            ..*DEFAULT_CLASSIFIER_CONFIG
        };

        let classification =
            count_named_entities_with_custom_config(&config, "ignored", &annotator).unwrap();

        assert_eq!(classification.words.len(), 2);
        assert!(classification.words.contains_key("ok"));
        assert!(classification.words.contains_key("deal"));
    }

    #[test]
    fn test_custom_sms_keywords() {
        let annotator = StubAnnotator::new(
            vec![word_token("UNSUBSCRIBE"), word_token("stop")],
            vec![],
        );
        let config = ClassifierConfig {
            sms_keywords: &["unsubscribe"],
            ..*DEFAULT_CLASSIFIER_CONFIG
        };

        let classification =
            count_named_entities_with_custom_config(&config, "ignored", &annotator).unwrap();

        assert_eq!(classification.words.len(), 1);
        assert_eq!(classification.words.get("stop"), Some(&1));
    }

    #[test]
    fn test_inverted_bounds_keep_replacement_labels() {
        let mut tomorrow = word_token("tomorrow");
        tomorrow.ent_type = Some(EntityLabel::Date);

        let annotator = StubAnnotator::new(
            vec![word_token("Meet"), tomorrow],
            vec![entity_span("tomorrow", EntityLabel::Date, 1, 2)],
        );
        let config = ClassifierConfig {
            min_word_len: 50,
            max_word_len: 40,
            ..*DEFAULT_CLASSIFIER_CONFIG
        };

        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));

        let classification =
            count_named_entities_with_custom_config(&config, "Meet tomorrow", &annotator).unwrap();

        assert!(classification.entities.is_empty());
        assert_eq!(classification.words.len(), 1);
        assert_eq!(classification.words.get("DATE"), Some(&1));
    }

    #[test]
    fn test_empty_text_is_never_annotated() {
        let annotator = StubAnnotator::new(vec![word_token("ghost")], vec![]);

        let classification = count_named_entities("", &annotator).unwrap();

        assert!(classification.is_empty());
    }
}
