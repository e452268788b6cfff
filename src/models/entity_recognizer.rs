use crate::constants::{HONORIFICS, ORGANIZATION_SUFFIXES};
use crate::models::{AnnotatedToken, EntityLabel, EntitySpan, OrganizationGazetteer};
use crate::types::TokenIndex;
use log::trace;
use regex::Regex;
use std::sync::LazyLock;

const MONTHS: &str = "January|February|March|April|May|June|July|August|September|October|November|December|Jan|Feb|Mar|Apr|Jun|Jul|Aug|Sep|Sept|Oct|Nov|Dec";

const MAX_PERSON_NAME_TOKENS: usize = 2;

// Static regex patterns - compiled once, reused for every document
static PATTERNS: LazyLock<Vec<(EntityLabel, Regex)>> = LazyLock::new(|| {
    let patterns = [
        (EntityLabel::Date, r"\b\d{4}-\d{2}-\d{2}\b".to_string()),
        (EntityLabel::Date, r"\b\d{1,2}/\d{1,2}/\d{2,4}\b".to_string()),
        (
            EntityLabel::Date,
            format!(
                r"(?i)\b(?:{})\b\.?\s+\d{{1,2}}(?:st|nd|rd|th)?(?:,?\s*\d{{4}})?\b",
                MONTHS
            ),
        ),
        (
            EntityLabel::Date,
            format!(
                r"(?i)\b\d{{1,2}}(?:st|nd|rd|th)?\s+(?:of\s+)?(?:{})\b\.?(?:\s+\d{{4}}\b)?",
                MONTHS
            ),
        ),
        (
            EntityLabel::Date,
            r"\b(?:January|February|March|April|June|July|August|September|October|November|December)(?:\s+\d{4})?\b".to_string(),
        ),
        (
            EntityLabel::Date,
            r"(?i)\b(?:today|tomorrow|yesterday|(?:(?:next|last|this)\s+)?(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)|(?:next|last|this)\s+(?:week|weekend|month|year))\b".to_string(),
        ),
        (
            EntityLabel::Time,
            r"(?i)\b\d{1,2}(?::\d{2})?\s*(?:a\.m\.|p\.m\.|am\b|pm\b)".to_string(),
        ),
        (
            EntityLabel::Time,
            r"\b(?:[01]?\d|2[0-3]):[0-5]\d\b".to_string(),
        ),
        (
            EntityLabel::Time,
            r"(?i)\b(?:tonight|noon|midnight|this\s+(?:morning|afternoon|evening))\b".to_string(),
        ),
        (
            EntityLabel::Money,
            r"[$£€¥]\s?\d[\d,]*(?:\.\d+)?\b".to_string(),
        ),
        (
            EntityLabel::Money,
            r"(?i)\b\d+(?:,\d{3})*(?:\.\d{1,2})?\s*(?:dollars?|usd|euros?|pounds?)\b".to_string(),
        ),
        (
            EntityLabel::Percent,
            r"(?i)\b\d+(?:\.\d+)?\s*(?:%|percent\b)".to_string(),
        ),
    ];

    patterns
        .into_iter()
        .map(|(label, pattern)| {
            (
                label,
                Regex::new(&pattern).expect("entity pattern should compile"),
            )
        })
        .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SpanCandidate {
    label: EntityLabel,
    token_start: TokenIndex,
    token_end: TokenIndex,
}

impl SpanCandidate {
    fn len(&self) -> usize {
        self.token_end - self.token_start
    }

    fn overlaps(&self, other: &SpanCandidate) -> bool {
        self.token_start < other.token_end && other.token_start < self.token_end
    }
}

/// Rule-based named-entity recognizer: regex patterns for dates, times, money and percentages,
/// a gazetteer plus corporate-suffix heuristic for organizations, and honorifics for persons.
pub struct EntityRecognizer {
    gazetteer: OrganizationGazetteer,
}

impl EntityRecognizer {
    pub fn new(gazetteer: OrganizationGazetteer) -> Self {
        Self { gazetteer }
    }

    /// Recognize entity spans over already tokenized `text`. Returned spans never overlap and are
    /// in document order.
    pub fn recognize(&self, text: &str, tokens: &[AnnotatedToken]) -> Vec<EntitySpan> {
        let mut candidates = Vec::new();

        self.collect_pattern_candidates(text, tokens, &mut candidates);
        self.collect_gazetteer_candidates(tokens, &mut candidates);
        self.collect_suffix_candidates(tokens, &mut candidates);
        self.collect_person_candidates(tokens, &mut candidates);

        trace!("Collected {} entity candidate(s)", candidates.len());

        Self::filter_candidates(candidates)
            .into_iter()
            .map(|candidate| Self::to_entity_span(text, tokens, candidate))
            .collect()
    }

    fn collect_pattern_candidates(
        &self,
        text: &str,
        tokens: &[AnnotatedToken],
        candidates: &mut Vec<SpanCandidate>,
    ) {
        for (label, pattern) in PATTERNS.iter() {
            for found in pattern.find_iter(text) {
                let mut covered = tokens.iter().enumerate().filter(|(_, token)| {
                    !token.is_space && token.start < found.end() && token.end > found.start()
                });

                let Some((token_start, _)) = covered.next() else {
                    continue;
                };
                let token_end = covered.last().map_or(token_start, |(index, _)| index) + 1;

                candidates.push(SpanCandidate {
                    label: *label,
                    token_start,
                    token_end,
                });
            }
        }
    }

    fn collect_gazetteer_candidates(
        &self,
        tokens: &[AnnotatedToken],
        candidates: &mut Vec<SpanCandidate>,
    ) {
        if self.gazetteer.is_empty() {
            return;
        }

        let lowered_tokens: Vec<&str> = tokens.iter().map(|token| token.lower.as_str()).collect();

        for (index, token) in tokens.iter().enumerate() {
            let starts_capitalized = token
                .text
                .chars()
                .next()
                .is_some_and(|c| c.is_uppercase() || c.is_ascii_digit());
            if !starts_capitalized {
                continue;
            }

            if let Some(length) = self.gazetteer.longest_match_at(&lowered_tokens, index) {
                candidates.push(SpanCandidate {
                    label: EntityLabel::Org,
                    token_start: index,
                    token_end: index + length,
                });
            }
        }
    }

    /// Runs of capitalized tokens ending in a corporate suffix (`ACME Corp`, `Globex Holdings`).
    fn collect_suffix_candidates(
        &self,
        tokens: &[AnnotatedToken],
        candidates: &mut Vec<SpanCandidate>,
    ) {
        for (suffix_index, suffix) in tokens.iter().enumerate() {
            if !starts_uppercase(&suffix.text)
                || !ORGANIZATION_SUFFIXES.contains(&suffix.lower.as_str())
            {
                continue;
            }

            let mut token_start = suffix_index;
            while token_start > 0 && is_name_like(&tokens[token_start - 1]) {
                token_start -= 1;
            }

            if token_start == suffix_index {
                continue;
            }

            // "Contact ACME Corp": a capitalized sentence opener is not part of the name
            if token_start + 1 < suffix_index
                && is_sentence_start(tokens, token_start)
                && is_title_case(&tokens[token_start].text)
            {
                token_start += 1;
            }

            candidates.push(SpanCandidate {
                label: EntityLabel::Org,
                token_start,
                token_end: suffix_index + 1,
            });
        }
    }

    fn collect_person_candidates(
        &self,
        tokens: &[AnnotatedToken],
        candidates: &mut Vec<SpanCandidate>,
    ) {
        for (index, token) in tokens.iter().enumerate() {
            if !HONORIFICS.contains(&token.text.as_str()) {
                continue;
            }

            let name_len = tokens[index + 1..]
                .iter()
                .take(MAX_PERSON_NAME_TOKENS)
                .take_while(|token| {
                    starts_uppercase(&token.text) && token.text.chars().all(char::is_alphabetic)
                })
                .count();

            if name_len > 0 {
                candidates.push(SpanCandidate {
                    label: EntityLabel::Person,
                    token_start: index + 1,
                    token_end: index + 1 + name_len,
                });
            }
        }
    }

    /// Keep the longest candidates, breaking ties by earliest start, then restore document order.
    fn filter_candidates(mut candidates: Vec<SpanCandidate>) -> Vec<SpanCandidate> {
        candidates.sort_by(|a, b| {
            b.len()
                .cmp(&a.len())
                .then_with(|| a.token_start.cmp(&b.token_start))
        });

        let mut accepted: Vec<SpanCandidate> = Vec::new();
        for candidate in candidates {
            if !accepted.iter().any(|kept| kept.overlaps(&candidate)) {
                accepted.push(candidate);
            }
        }

        accepted.sort_by_key(|candidate| candidate.token_start);
        accepted
    }

    fn to_entity_span(
        text: &str,
        tokens: &[AnnotatedToken],
        candidate: SpanCandidate,
    ) -> EntitySpan {
        let start = tokens[candidate.token_start].start;
        let end = tokens[candidate.token_end - 1].end;
        let span_text = text[start..end].to_string();

        EntitySpan {
            lower: span_text.to_lowercase(),
            text: span_text,
            label: candidate.label,
            token_start: candidate.token_start,
            token_end: candidate.token_end,
            start,
            end,
        }
    }
}

fn starts_uppercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase)
}

fn is_title_case(text: &str) -> bool {
    starts_uppercase(text) && text.chars().skip(1).any(char::is_lowercase)
}

fn is_name_like(token: &AnnotatedToken) -> bool {
    starts_uppercase(&token.text)
        && !token.is_stop
        && !token.is_punct
        && !token.is_space
        && !HONORIFICS.contains(&token.text.as_str())
}

fn is_sentence_start(tokens: &[AnnotatedToken], index: TokenIndex) -> bool {
    match index.checked_sub(1).map(|previous| &tokens[previous]) {
        None => true,
        Some(previous) => {
            matches!(previous.text.as_str(), "." | "!" | "?")
                || (previous.is_space && previous.text.contains('\n'))
        }
    }
}
