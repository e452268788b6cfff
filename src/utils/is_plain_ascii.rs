use crate::constants::PLAIN_ASCII_CODE_POINT_LIMIT;

/// Returns `true` if every character's code point is below 255.
///
/// Note: This is a Latin-1 style threshold, so characters such as `é` (U+00E9) pass while `€`
/// (U+20AC) does not. U+00FF itself is rejected.
pub fn is_plain_ascii(text: &str) -> bool {
    text.chars()
        .all(|c| (c as u32) < PLAIN_ASCII_CODE_POINT_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_is_plain() {
        assert!(is_plain_ascii(""));
    }

    #[test]
    fn test_latin1_characters_are_accepted() {
        assert!(is_plain_ascii("Café Noël"));
        assert!(is_plain_ascii("\u{00FE}"));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(!is_plain_ascii("\u{00FF}"));
        assert!(!is_plain_ascii("Škoda"));
        assert!(!is_plain_ascii("price in €"));
    }
}
