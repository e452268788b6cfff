use crate::constants::{NUMBER_WORDS, ORDINAL_WORDS, STOP_WORDS, TLD_LIST};
use crate::types::TokenRef;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?i)[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?",
    )
    .expect("email pattern should compile")
});

const SIGN_PREFIXES: &[char] = &['+', '-', '±', '~'];

const NON_ASCII_PUNCTUATION: &[char] = &[
    '“', '”', '‘', '’', '…', '–', '—', '«', '»', '¿', '¡', '‹', '›', '„', '·',
];

// ASCII symbols which are not punctuation
const ASCII_SYMBOLS: &[char] = &['$', '+', '<', '=', '>', '^', '`', '|', '~'];

pub fn is_stop(text: &TokenRef) -> bool {
    STOP_WORDS.contains(&text.to_lowercase().as_str())
}

pub fn is_space(text: &TokenRef) -> bool {
    !text.is_empty() && text.chars().all(char::is_whitespace)
}

pub fn is_punct_char(c: char) -> bool {
    (c.is_ascii_punctuation() && !ASCII_SYMBOLS.contains(&c)) || NON_ASCII_PUNCTUATION.contains(&c)
}

pub fn is_punct(text: &TokenRef) -> bool {
    !text.is_empty() && text.chars().all(is_punct_char)
}

/// Digits (with `,`/`.` separators and an optional sign), `a/b` fractions, number words,
/// ordinal words and digit ordinals such as `5th`.
pub fn like_num(text: &TokenRef) -> bool {
    let unsigned = text.strip_prefix(SIGN_PREFIXES).unwrap_or(text);

    let digits: String = unsigned.chars().filter(|c| *c != ',' && *c != '.').collect();
    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }

    if let Some((numerator, denominator)) = unsigned.split_once('/') {
        if is_digits(numerator) && is_digits(denominator) {
            return true;
        }
    }

    let lower = unsigned.to_lowercase();
    if NUMBER_WORDS.contains(&lower.as_str()) || ORDINAL_WORDS.contains(&lower.as_str()) {
        return true;
    }

    ["st", "nd", "rd", "th"]
        .iter()
        .any(|suffix| lower.strip_suffix(suffix).is_some_and(is_digits))
}

pub fn like_email(text: &TokenRef) -> bool {
    EMAIL.is_match(text)
}

pub fn like_url(text: &TokenRef) -> bool {
    if text.is_empty() {
        return false;
    }

    let lower = text.to_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return true;
    }
    if lower.starts_with("www.") && lower.len() >= 5 {
        return true;
    }
    if lower.starts_with('.') || lower.ends_with('.') || lower.contains('@') {
        return false;
    }

    let Some((_, tld)) = lower.rsplit_once('.') else {
        return false;
    };
    let tld = tld.split(':').next().unwrap_or(tld);

    if tld.ends_with('/') {
        return true;
    }

    let domain = tld.split('/').next().unwrap_or(tld);
    !domain.is_empty()
        && domain.chars().all(|c| c.is_ascii_alphabetic())
        && TLD_LIST.contains(&domain)
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}
