//! Artist-name normalization.
//!
//! Free-form user input ("  Bon Jovi ", "madonna123", "AC/DC") is reduced to a
//! best-guess first/last name pair that is then used as the search term
//! against the album provider.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::CoreError;
use crate::types::ArtistQuery;

/// First alphabetic run of 2-20 letters, any non-letters, then an optional
/// second run of up to 20 letters. Unanchored: leading junk is skipped.
static ARTIST_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Za-z]{2,20})[^A-Za-z]*([A-Za-z]{0,20})").expect("artist name pattern")
});

/// Normalizes raw user input into an [`ArtistQuery`].
///
/// The input is trimmed and lowercased before matching. Fails with
/// [`CoreError::InvalidInput`] carrying the original string when no run of at
/// least two ASCII letters exists.
pub fn normalize_artist_name(raw: &str) -> Result<ArtistQuery, CoreError> {
    let cleaned = raw.trim().to_lowercase();
    let captures = ARTIST_NAME_RE.captures(&cleaned).ok_or_else(|| {
        CoreError::invalid_input(raw, "expected an artist name with at least two letters")
    })?;

    let first = captures.get(1).map_or("", |m| m.as_str());
    let second = captures.get(2).map_or("", |m| m.as_str());
    Ok(ArtistQuery::new(first, second))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(raw: &str) -> String {
        normalize_artist_name(raw).unwrap().search_term()
    }

    #[test]
    fn trims_and_lowercases_two_word_names() {
        assert_eq!(term("  Bon Jovi "), "bon jovi");
    }

    #[test]
    fn single_word_drops_trailing_digits() {
        let query = normalize_artist_name("Madonna123").unwrap();
        assert_eq!(query.first(), "madonna");
        assert_eq!(query.second(), "");
        assert_eq!(query.search_term(), "madonna");
    }

    #[test]
    fn digits_only_is_rejected_with_original_input() {
        let err = normalize_artist_name("1234").unwrap_err();
        match err {
            CoreError::InvalidInput { input, .. } => assert_eq!(input, "1234"),
        }
    }

    #[test]
    fn leading_punctuation_and_digits_are_skipped() {
        assert_eq!(term("99 -- Red Hot"), "red hot");
    }

    #[test]
    fn punctuation_between_words_collapses_to_single_space() {
        assert_eq!(term("AC/DC"), "ac dc");
        assert_eq!(term("Guns N' Roses"), "guns n");
    }

    #[test]
    fn single_letters_cannot_start_a_name() {
        assert_eq!(term("a bc"), "bc");
        assert!(normalize_artist_name("a b c").is_err());
    }

    #[test]
    fn runs_are_capped_at_twenty_letters() {
        let long = "abcdefghijklmnopqrstuvwxyz";
        let query = normalize_artist_name(long).unwrap();
        assert_eq!(query.first(), "abcdefghijklmnopqrst");
        assert_eq!(query.second(), "uvwxyz");
    }

    #[test]
    fn empty_and_whitespace_input_is_rejected() {
        assert!(normalize_artist_name("").is_err());
        assert!(normalize_artist_name("   ").is_err());
    }
}
