use crate::constants::ABBREVIATIONS;
use crate::types::{ByteOffset, Token, TokenRef};

const PREFIX_CHARS: &[char] = &[
    '(', '[', '{', '"', '\'', '“', '‘', '¿', '¡', '<', '$', '£', '€', '¥', '#', '«',
];

const SUFFIX_CHARS: &[char] = &[
    ')', ']', '}', '"', '\'', '”', '’', '.', ',', '!', '?', ';', ':', '…', '>', '%', '»',
];

const POSSESSIVE_SUFFIXES: &[&str] = &["'s", "’s", "'S", "’S"];

const NEGATION_SUFFIX: &str = "n't";

/// A token produced by the `Tokenizer`, prior to annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub text: Token,
    pub start: ByteOffset,
    pub end: ByteOffset,
}

pub struct Tokenizer {
    abbreviations: Vec<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::message_parser()
    }
}

impl Tokenizer {
    /// Configuration for short free-text messages
    pub fn message_parser() -> Self {
        Self {
            abbreviations: ABBREVIATIONS.iter().map(|a| a.to_lowercase()).collect(),
        }
    }

    /// Tokenizer function to split the text into individual tokens.
    ///
    /// Note: This explicitly does not modify the case of the text. A single space between
    /// tokens is dropped; any other whitespace run is kept as its own token.
    pub fn tokenize(&self, text: &TokenRef) -> Vec<RawToken> {
        let mut tokens = Vec::new();
        let mut run_start = 0;
        let mut run_is_space: Option<bool> = None;

        for (offset, c) in text.char_indices() {
            let is_space = c.is_whitespace();
            match run_is_space {
                Some(previous) if previous != is_space => {
                    self.push_run(text, run_start, offset, previous, &mut tokens);
                    run_start = offset;
                }
                _ => {}
            }
            run_is_space = Some(is_space);
        }

        if let Some(previous) = run_is_space {
            self.push_run(text, run_start, text.len(), previous, &mut tokens);
        }

        tokens
    }

    /// Convenience for callers which only need the token strings.
    pub fn tokenize_to_strings(&self, text: &TokenRef) -> Vec<Token> {
        self.tokenize(text)
            .into_iter()
            .map(|token| token.text)
            .collect()
    }

    fn push_run(
        &self,
        text: &str,
        start: ByteOffset,
        end: ByteOffset,
        is_space: bool,
        tokens: &mut Vec<RawToken>,
    ) {
        if is_space {
            let run = &text[start..end];
            if run == " " {
                return;
            }
            let start = if run.starts_with(' ') { start + 1 } else { start };
            tokens.push(RawToken {
                text: text[start..end].to_string(),
                start,
                end,
            });
        } else {
            self.split_chunk(text, start, end, tokens);
        }
    }

    /// Peel prefix and suffix punctuation off a whitespace-delimited chunk.
    fn split_chunk(
        &self,
        text: &str,
        mut start: ByteOffset,
        mut end: ByteOffset,
        tokens: &mut Vec<RawToken>,
    ) {
        // Prefixes
        while let Some(c) = text[start..end].chars().next() {
            if !PREFIX_CHARS.contains(&c) || start + c.len_utf8() == end {
                break;
            }
            tokens.push(Self::raw_token(text, start, start + c.len_utf8()));
            start += c.len_utf8();
        }

        // Suffixes, collected back to front
        let mut suffixes = Vec::new();
        loop {
            let chunk = &text[start..end];

            if let Some(possessive) = POSSESSIVE_SUFFIXES
                .iter()
                .find(|suffix| chunk.ends_with(*suffix) && chunk.len() > suffix.len())
            {
                suffixes.push(Self::raw_token(text, end - possessive.len(), end));
                end -= possessive.len();
                continue;
            }

            if chunk.to_lowercase().ends_with(NEGATION_SUFFIX)
                && chunk.len() > NEGATION_SUFFIX.len()
            {
                suffixes.push(Self::raw_token(text, end - NEGATION_SUFFIX.len(), end));
                end -= NEGATION_SUFFIX.len();
                continue;
            }

            let Some(c) = chunk.chars().next_back() else {
                break;
            };
            if !SUFFIX_CHARS.contains(&c) || chunk.len() == c.len_utf8() {
                break;
            }
            if c == '.' && self.keeps_trailing_period(chunk) {
                break;
            }

            suffixes.push(Self::raw_token(text, end - c.len_utf8(), end));
            end -= c.len_utf8();
        }

        if start < end {
            tokens.push(Self::raw_token(text, start, end));
        }
        tokens.extend(suffixes.into_iter().rev());
    }

    /// Abbreviations (`Corp.`), initials (`J.`) and dotted acronyms (`U.S.A.`) keep their period.
    fn keeps_trailing_period(&self, chunk: &str) -> bool {
        let lower = chunk.to_lowercase();
        if self.abbreviations.contains(&lower) {
            return true;
        }

        let segments: Vec<&str> = chunk[..chunk.len() - 1].split('.').collect();
        segments.iter().all(|segment| {
            segment.chars().count() == 1 && segment.chars().all(char::is_alphabetic)
        })
    }

    fn raw_token(text: &str, start: ByteOffset, end: ByteOffset) -> RawToken {
        RawToken {
            text: text[start..end].to_string(),
            start,
            end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(text: &str) -> Vec<String> {
        Tokenizer::message_parser().tokenize_to_strings(text)
    }

    #[test]
    fn test_tokenize_with_single_spaces() {
        assert_eq!(
            tokenize("Contact ACME Corp on 5th January"),
            vec!["Contact", "ACME", "Corp", "on", "5th", "January"]
        );
    }

    #[test]
    fn test_splits_surrounding_punctuation() {
        assert_eq!(
            tokenize("(Hello), world!"),
            vec!["(", "Hello", ")", ",", "world", "!"]
        );
    }

    #[test]
    fn test_keeps_urls_and_emails_intact() {
        assert_eq!(
            tokenize("Visit www.acme.com or mail a@b.com."),
            vec!["Visit", "www.acme.com", "or", "mail", "a@b.com", "."]
        );
    }

    #[test]
    fn test_keeps_abbreviation_periods() {
        assert_eq!(
            tokenize("Mr. Smith of Acme Inc. called"),
            vec!["Mr.", "Smith", "of", "Acme", "Inc.", "called"]
        );
        assert_eq!(tokenize("J. Doe"), vec!["J.", "Doe"]);
        assert_eq!(tokenize("the U.S. office"), vec!["the", "U.S.", "office"]);
    }

    #[test]
    fn test_splits_possessives_and_negations() {
        assert_eq!(tokenize("Domino's"), vec!["Domino", "'s"]);
        assert_eq!(tokenize("don't"), vec!["do", "n't"]);
    }

    #[test]
    fn test_splits_currency_and_percent() {
        assert_eq!(tokenize("$50 off 20%"), vec!["$", "50", "off", "20", "%"]);
    }

    #[test]
    fn test_keeps_extra_whitespace_as_tokens() {
        assert_eq!(tokenize("a  b"), vec!["a", " ", "b"]);
        assert_eq!(tokenize("a\nb"), vec!["a", "\n", "b"]);
        assert_eq!(tokenize("a \n b"), vec!["a", "\n ", "b"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" ").is_empty());
    }

    #[test]
    fn test_byte_offsets_follow_the_text() {
        let text = "Café, ok";
        for token in Tokenizer::message_parser().tokenize(text) {
            assert_eq!(&text[token.start..token.end], token.text);
        }
    }
}
