//! Validation rules applied before a movie note is accepted.

use crate::defaults::{MSG_RATING_OUT_OF_RANGE, RATING_MAX, RATING_MIN, TAG_FILTER_SEPARATOR};
use crate::error::{Error, Result};

/// Validate a rating and narrow it to the stored column type.
///
/// Accepts the closed interval `RATING_MIN..=RATING_MAX`; anything else,
/// including values beyond `i32`, is `Error::InvalidInput`.
pub fn validate_rating(rating: i64) -> Result<i32> {
    if !(i64::from(RATING_MIN)..=i64::from(RATING_MAX)).contains(&rating) {
        return Err(Error::InvalidInput(MSG_RATING_OUT_OF_RANGE.to_string()));
    }
    i32::try_from(rating).map_err(|_| Error::InvalidInput(MSG_RATING_OUT_OF_RANGE.to_string()))
}

/// Parse a comma-separated tag filter into tag names.
///
/// Entries are trimmed and empty entries dropped, so `"action, drama,"`
/// yields `["action", "drama"]`.
pub fn parse_tag_filter(filter: &str) -> Vec<String> {
    filter
        .split(TAG_FILTER_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Trim tag names and drop the ones left empty. Order and duplicates are kept.
pub fn normalize_tag_names(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rating_accepts_bounds() {
        for rating in RATING_MIN..=RATING_MAX {
            assert_eq!(validate_rating(i64::from(rating)).unwrap(), rating);
        }
    }

    #[test]
    fn test_validate_rating_rejects_out_of_range() {
        for rating in [
            i64::MIN,
            -10_000_000_000,
            i64::from(i32::MIN),
            -1,
            0,
            6,
            10,
            i64::from(i32::MAX),
            10_000_000_000,
            i64::MAX,
        ] {
            match validate_rating(rating) {
                Err(Error::InvalidInput(msg)) => {
                    assert_eq!(msg, "Please insert a rating between 1 and 5.")
                }
                other => panic!("rating {} should be rejected, got {:?}", rating, other),
            }
        }
    }

    #[test]
    fn test_parse_tag_filter_trims_entries() {
        assert_eq!(parse_tag_filter("action, drama"), vec!["action", "drama"]);
        assert_eq!(parse_tag_filter("  scifi  "), vec!["scifi"]);
    }

    #[test]
    fn test_parse_tag_filter_drops_empty_entries() {
        assert_eq!(parse_tag_filter("action,, ,drama,"), vec!["action", "drama"]);
        assert!(parse_tag_filter("").is_empty());
        assert!(parse_tag_filter(" , ").is_empty());
    }

    #[test]
    fn test_parse_tag_filter_keeps_inner_spaces_and_case() {
        assert_eq!(
            parse_tag_filter("Film Noir,sci fi"),
            vec!["Film Noir", "sci fi"]
        );
    }

    #[test]
    fn test_normalize_tag_names() {
        let tags = vec![
            " scifi".to_string(),
            "".to_string(),
            "action ".to_string(),
            "   ".to_string(),
            "action".to_string(),
        ];
        assert_eq!(normalize_tag_names(tags), vec!["scifi", "action", "action"]);
    }
}
