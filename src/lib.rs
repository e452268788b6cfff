#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::DEFAULT_CLASSIFIER_CONFIG;
pub mod constants;
pub mod models;
pub use models::{
    AnnotatedDocument, AnnotatedToken, Annotator, AnnotatorConfig, Classification, Classifier,
    ClassifierConfig, ClassifyRequest, EntityLabel, EntitySpan, Error, Lexeme, RuleAnnotator,
    Tokenizer,
};
pub mod types;
pub mod utils;
pub use types::{BrandFrequencyMap, BrandName, OrganizationList, WordFrequencyMap};
pub use utils::{count_frequencies, is_plain_ascii, read_organization_list_from_string};

/// Counts brand entities and content words in `text` using the default configuration.
pub fn count_named_entities<A: Annotator>(
    text: &str,
    annotator: &A,
) -> Result<Classification, Error> {
    count_named_entities_with_custom_config(DEFAULT_CLASSIFIER_CONFIG, text, annotator)
}

pub fn count_named_entities_with_custom_config<A: Annotator>(
    classifier_config: &ClassifierConfig,
    text: &str,
    annotator: &A,
) -> Result<Classification, Error> {
    let classifier = Classifier::new(classifier_config, annotator);

    Ok(classifier.classify_text(text))
}
