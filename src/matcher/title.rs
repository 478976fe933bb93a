//! Two-line title matcher.
//!
//! Recognizes the AsciiDoc-style level-0 title: a title line followed by an
//! underline of two or more `=` characters.
//!
//! ```text
//! Section Title
//! =============
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Match, Matcher};
use crate::types::Construct;

/// Title line followed by an `=` underline on the next line.
///
/// Lazy `.+?` keeps the title capture to a single line; the underline needs
/// at least two `=` so a lone `=` line is plain text.
static TWO_LINE_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(.+?)\n(={2,})").unwrap());

/// Matcher for level-0 two-line titles.
#[derive(Debug, Default)]
pub struct TwoLineTitleMatcher;

impl TwoLineTitleMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl Matcher for TwoLineTitleMatcher {
    fn find_matches(&self, text: &str) -> Vec<Match> {
        TWO_LINE_TITLE
            .captures_iter(text)
            .map(|caps| {
                let title = caps.get(1).map_or("", |m| m.as_str());
                Match::new(
                    caps.get(0).map_or("", |m| m.as_str()),
                    Construct::TwoLineTitle {
                        title: title.to_string(),
                    },
                )
            })
            .collect()
    }

    fn kind_name(&self) -> &'static str {
        "title"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_title() {
        let matches = TwoLineTitleMatcher::new().find_matches("Coucou\n==");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].span, "Coucou\n==");
        assert_eq!(
            matches[0].construct,
            Construct::TwoLineTitle {
                title: "Coucou".to_string()
            }
        );
    }

    #[test]
    fn test_multiple_titles_in_source_order() {
        let text = "First\n==\n\nbody text\n\nSecond\n====\n";
        let matches = TwoLineTitleMatcher::new().find_matches(text);

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].span, "First\n==");
        assert_eq!(matches[1].span, "Second\n====");
    }

    #[test]
    fn test_underline_needs_two_characters() {
        let matches = TwoLineTitleMatcher::new().find_matches("Not a title\n=\n");
        assert!(matches.is_empty());
    }

    #[test]
    fn test_no_matches_in_plain_text() {
        let matches = TwoLineTitleMatcher::new().find_matches("just a paragraph\n");
        assert!(matches.is_empty());
    }

    #[test]
    fn test_span_appears_in_input() {
        let text = "abc\n\nTitle\n=====\n\ndef";
        for m in TwoLineTitleMatcher::new().find_matches(text) {
            assert!(text.contains(&m.span));
        }
    }
}
