use crate::models::{
    AnnotatedDocument, AnnotatedToken, Annotator, EntityRecognizer, Lemmatizer, Lexeme,
    OrganizationGazetteer, RawToken, Tokenizer,
};
use crate::types::{OrganizationList, TokenRef};
use crate::utils::lexical_attributes::{
    is_punct, is_space, is_stop, like_email, like_num, like_url,
};
use crate::Error;
use log::{debug, info};

/// Pipeline stages which can be switched off when the annotator is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotatorConfig {
    pub entity_recognition: bool,
    pub organization_gazetteer: bool,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            entity_recognition: true,
            organization_gazetteer: true,
        }
    }
}

/// Rule-based annotator: tokenizer, lexical attributes, lookup lemmatizer and entity recognizer.
///
/// Everything is loaded in the constructor; annotation never mutates the instance, so it can be
/// shared between threads.
pub struct RuleAnnotator {
    config: AnnotatorConfig,
    tokenizer: Tokenizer,
    lemmatizer: Lemmatizer,
    entity_recognizer: EntityRecognizer,
}

impl RuleAnnotator {
    /// Builds an annotator backed by the embedded organization list.
    pub fn new(config: AnnotatorConfig) -> Result<Self, Error> {
        let tokenizer = Tokenizer::message_parser();

        let gazetteer = if config.organization_gazetteer {
            info!("Loading organization gazetteer...");
            OrganizationGazetteer::embedded(&tokenizer)?
        } else {
            OrganizationGazetteer::empty()
        };

        Ok(Self::with_gazetteer(config, tokenizer, gazetteer))
    }

    /// Builds an annotator backed by a caller-supplied organization list.
    pub fn with_organization_list(
        config: AnnotatorConfig,
        organization_list: &OrganizationList,
    ) -> Self {
        let tokenizer = Tokenizer::message_parser();
        let gazetteer = if config.organization_gazetteer {
            OrganizationGazetteer::from_organization_list(organization_list, &tokenizer)
        } else {
            OrganizationGazetteer::empty()
        };

        Self::with_gazetteer(config, tokenizer, gazetteer)
    }

    fn with_gazetteer(
        config: AnnotatorConfig,
        tokenizer: Tokenizer,
        gazetteer: OrganizationGazetteer,
    ) -> Self {
        debug!(
            "Annotator ready (entity recognition: {}, gazetteer names: {})",
            config.entity_recognition,
            gazetteer.len()
        );

        Self {
            config,
            tokenizer,
            lemmatizer: Lemmatizer::new(),
            entity_recognizer: EntityRecognizer::new(gazetteer),
        }
    }

    fn annotate_token(&self, raw_token: RawToken) -> AnnotatedToken {
        let text: &TokenRef = &raw_token.text;

        AnnotatedToken {
            lower: text.to_lowercase(),
            lemma: self.lemmatizer.lemmatize(text),
            ent_type: None,
            is_stop: is_stop(text),
            is_punct: is_punct(text),
            like_num: like_num(text),
            is_space: is_space(text),
            like_url: like_url(text),
            like_email: like_email(text),
            start: raw_token.start,
            end: raw_token.end,
            text: raw_token.text,
        }
    }
}

impl Annotator for RuleAnnotator {
    fn annotate(&self, text: &str) -> AnnotatedDocument {
        let mut tokens: Vec<AnnotatedToken> = self
            .tokenizer
            .tokenize(text)
            .into_iter()
            .map(|raw_token| self.annotate_token(raw_token))
            .collect();

        let entities = if self.config.entity_recognition {
            self.entity_recognizer.recognize(text, &tokens)
        } else {
            Vec::new()
        };

        for entity in &entities {
            for token in &mut tokens[entity.token_start..entity.token_end] {
                token.ent_type = Some(entity.label);
            }
        }

        debug!(
            "Annotated {} token(s) and {} entity span(s)",
            tokens.len(),
            entities.len()
        );

        AnnotatedDocument { tokens, entities }
    }

    fn lexeme(&self, text: &str) -> Lexeme {
        Lexeme {
            like_url: like_url(text),
            like_email: like_email(text),
        }
    }
}
