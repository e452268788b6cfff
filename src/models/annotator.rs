use crate::models::AnnotatedDocument;

/// Vocabulary lookup result for arbitrary text, independent of any token in a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lexeme {
    pub like_url: bool,
    pub like_email: bool,
}

/// Capability contract over a linguistic engine.
///
/// Implementations must be fully initialized before the first call and must not mutate state
/// while annotating, so a single instance can be shared across threads.
pub trait Annotator: Send + Sync {
    /// Tokenize and annotate `text`, returning tokens and entity spans in document order.
    fn annotate(&self, text: &str) -> AnnotatedDocument;

    /// Look up lexical flags for `text` as a single vocabulary entry.
    fn lexeme(&self, text: &str) -> Lexeme;
}

impl<A: Annotator + ?Sized> Annotator for &A {
    fn annotate(&self, text: &str) -> AnnotatedDocument {
        (**self).annotate(text)
    }

    fn lexeme(&self, text: &str) -> Lexeme {
        (**self).lexeme(text)
    }
}
