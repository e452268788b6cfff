use crate::models::EntityLabel;
use crate::types::{ByteOffset, Token};

/// A single annotated word unit. Populated once by an annotator and read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedToken {
    pub text: Token,
    pub lower: Token,
    pub lemma: Token,
    pub ent_type: Option<EntityLabel>,
    pub is_stop: bool,
    pub is_punct: bool,
    pub like_num: bool,
    pub is_space: bool,
    pub like_url: bool,
    pub like_email: bool,
    pub start: ByteOffset,
    pub end: ByteOffset,
}

impl AnnotatedToken {
    /// Length of the token's display form, in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
