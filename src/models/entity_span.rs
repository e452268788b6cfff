use crate::models::EntityLabel;
use crate::types::{ByteOffset, TokenIndex};

/// A contiguous run of tokens recognized as a named entity.
///
/// `token_start..token_end` indexes into the owning document's tokens and always covers at least
/// one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    pub text: String,
    pub lower: String,
    pub label: EntityLabel,
    pub token_start: TokenIndex,
    pub token_end: TokenIndex,
    pub start: ByteOffset,
    pub end: ByteOffset,
}

impl EntitySpan {
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
