pub mod annotated_document;
pub use annotated_document::AnnotatedDocument;

pub mod annotated_token;
pub use annotated_token::AnnotatedToken;

pub mod annotator;
pub use annotator::{Annotator, Lexeme};

pub mod classification;
pub use classification::Classification;

pub mod classifier;
pub use classifier::Classifier;

pub mod classify_request;
pub use classify_request::ClassifyRequest;

pub mod config;
pub use config::ClassifierConfig;

pub mod entity_label;
pub use entity_label::EntityLabel;

pub mod entity_recognizer;
pub use entity_recognizer::EntityRecognizer;

pub mod entity_span;
pub use entity_span::EntitySpan;

pub mod error;
pub use error::Error;

pub mod lemmatizer;
pub use lemmatizer::Lemmatizer;

pub mod organization_gazetteer;
pub use organization_gazetteer::OrganizationGazetteer;

pub mod rule_annotator;
pub use rule_annotator::{AnnotatorConfig, RuleAnnotator};

pub mod tokenizer;
pub use tokenizer::{RawToken, Tokenizer};
