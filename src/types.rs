use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token's surface text as an owned `String`.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Index of a token within an annotated document.
pub type TokenIndex = usize;

/// Byte offset into the original text document.
pub type ByteOffset = usize;

/// Represents the literal text of an organization (brand) entity as an owned `String`.
pub type BrandName = String;

/// Represents a word-table key: a lowercased lemma, a redaction label such as `DATE`, or one of
/// the `EMAIL` / `URL` categories.
pub type WordCategory = String;

/// Represents the total number of occurrences of a key within a text document.
pub type Frequency = usize;

/// Represents a map of brand names to their frequency counts within a text document.
pub type BrandFrequencyMap = HashMap<BrandName, Frequency>;

/// Represents a map of word categories to their frequency counts within a text document.
pub type WordFrequencyMap = HashMap<WordCategory, Frequency>;

/// A list of organizations, where each entry includes:
/// - `OrganizationName`: The organization's primary name.
/// - `Vec<AlternateOrganizationName>`: A list of alternate names or aliases.
pub type OrganizationList = Vec<(OrganizationName, Vec<AlternateOrganizationName>)>;

/// Represents the primary name of an organization as an owned `String`.
pub type OrganizationName = String;

/// Represents an alternate name for an organization as an owned `String`.
pub type AlternateOrganizationName = String;
