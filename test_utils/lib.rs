#![allow(dead_code)]

use entity_sniffer::{
    count_named_entities_with_custom_config, AnnotatedDocument, AnnotatedToken, Annotator,
    Classification, ClassifierConfig, EntityLabel, EntitySpan, Error as LibError, Lexeme,
};
use std::{fs, path::Path};
pub mod constants;

const EXPECTED_ENTITY_PREFIX: &str = "EXPECTED_ENTITY:";
const EXPECTED_WORD_PREFIX: &str = "EXPECTED_WORD:";
const ABSENT_PREFIX: &str = "ABSENT:";
const COMMENT_PREFIX: &str = "COMMENT:";

/// Expected table entries declared in a test file.
#[derive(Debug, Default)]
pub struct Expectations {
    pub entities: Vec<(String, usize)>,
    pub words: Vec<(String, usize)>,
    pub absent: Vec<String>,
}

// Helper function to parse `key=count` (a bare key means a count of 1)
fn parse_expected_entry(entry: &str) -> (String, usize) {
    match entry.rsplit_once('=') {
        Some((key, count)) => (
            key.trim().to_string(),
            count.trim().parse().expect("Invalid expected count"),
        ),
        None => (entry.trim().to_string(), 1),
    }
}

// Helper function to get the expectations from the text file
pub fn get_expectations(file_path: &Path) -> Expectations {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    let mut expectations = Expectations::default();
    for line in content.lines().map(str::trim) {
        if let Some(entry) = line.strip_prefix(EXPECTED_ENTITY_PREFIX) {
            expectations.entities.push(parse_expected_entry(entry));
        } else if let Some(entry) = line.strip_prefix(EXPECTED_WORD_PREFIX) {
            expectations.words.push(parse_expected_entry(entry));
        } else if let Some(entry) = line.strip_prefix(ABSENT_PREFIX) {
            expectations.absent.push(entry.trim().to_string());
        }
    }

    expectations
}

// Helper function to strip expectation and comment lines, leaving the message text
pub fn get_message_text(file_path: &Path) -> String {
    let raw_text = fs::read_to_string(file_path).expect("Failed to read test file");

    raw_text
        .lines()
        .filter(|line| {
            let line = line.trim_start();
            !line.starts_with(EXPECTED_ENTITY_PREFIX)
                && !line.starts_with(EXPECTED_WORD_PREFIX)
                && !line.starts_with(ABSENT_PREFIX)
                && !line.starts_with(COMMENT_PREFIX)
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

// Helper function to run the test for a single file
pub fn run_test_for_file<A: Annotator>(
    test_file_path: &str,
    classifier_config: &ClassifierConfig,
    annotator: &A,
) -> Result<Classification, LibError> {
    let path = Path::new(test_file_path);
    let text = get_message_text(path);
    let expectations = get_expectations(path);

    let classification =
        count_named_entities_with_custom_config(classifier_config, &text, annotator)?;

    assert_eq!(
        classification.entities.len(),
        expectations.entities.len(),
        "{} - Expected entities {:?} but found {:?}",
        test_file_path,
        expectations.entities,
        classification.entities
    );

    for (brand, count) in &expectations.entities {
        assert_eq!(
            classification.entities.get(brand),
            Some(count),
            "{} - Entity {:?} count mismatch. Found: {:?}",
            test_file_path,
            brand,
            classification.entities
        );
    }

    assert_eq!(
        classification.words.len(),
        expectations.words.len(),
        "{} - Expected words {:?} but found {:?}",
        test_file_path,
        expectations.words,
        classification.words
    );

    for (word, count) in &expectations.words {
        assert_eq!(
            classification.words.get(word),
            Some(count),
            "{} - Word {:?} count mismatch. Found: {:?}",
            test_file_path,
            word,
            classification.words
        );
    }

    for key in &expectations.absent {
        assert!(
            !classification.entities.contains_key(key) && !classification.words.contains_key(key),
            "{} - Key {:?} should be absent. Found: {:?}",
            test_file_path,
            key,
            classification
        );
    }

    Ok(classification)
}

/// Annotator returning a canned document, for exercising the classifier in isolation.
pub struct StubAnnotator {
    pub document: AnnotatedDocument,
    pub url_like: Vec<String>,
    pub email_like: Vec<String>,
}

impl StubAnnotator {
    pub fn new(tokens: Vec<AnnotatedToken>, entities: Vec<EntitySpan>) -> Self {
        Self {
            document: AnnotatedDocument { tokens, entities },
            url_like: Vec::new(),
            email_like: Vec::new(),
        }
    }
}

impl Annotator for StubAnnotator {
    fn annotate(&self, _text: &str) -> AnnotatedDocument {
        self.document.clone()
    }

    fn lexeme(&self, text: &str) -> Lexeme {
        Lexeme {
            like_url: self.url_like.iter().any(|entry| entry == text),
            like_email: self.email_like.iter().any(|entry| entry == text),
            ..Lexeme::default()
        }
    }
}

/// Plain content token whose lemma is its lowercased text.
pub fn word_token(text: &str) -> AnnotatedToken {
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

pub fn entity_span(
    text: &str,
    label: EntityLabel,
    token_start: usize,
    token_end: usize,
) -> EntitySpan {
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
