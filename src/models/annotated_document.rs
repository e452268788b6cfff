use crate::models::{AnnotatedToken, EntitySpan};

/// Annotator output for one text document: tokens and entity spans, both in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedDocument {
    pub tokens: Vec<AnnotatedToken>,
    pub entities: Vec<EntitySpan>,
}

impl AnnotatedDocument {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
