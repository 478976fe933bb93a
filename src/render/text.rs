//! Normalized plain-text renderer.
//!
//! Re-emits constructs in canonical AsciiDoc-style form: a title's underline
//! is regenerated to exactly match the title's width, whatever the input
//! underline length was.

use super::Renderer;
use crate::error::Result;

/// Repeat character for level-0 title underlines.
const LEVEL0_UNDERLINE: char = '=';

/// Renders constructs as normalized plain text.
#[derive(Debug, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn name(&self) -> &'static str {
        "text"
    }

    fn render_two_line_title(&self, title: &str) -> Result<String> {
        let underline: String = std::iter::repeat(LEVEL0_UNDERLINE)
            .take(title.chars().count())
            .collect();
        Ok(format!("{title}\n{underline}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underline_matches_title_width() {
        let text = TextRenderer.render_two_line_title("Coucou").unwrap();
        assert_eq!(text, "Coucou\n======");
    }

    #[test]
    fn test_underline_counts_characters_not_bytes() {
        let text = TextRenderer.render_two_line_title("été").unwrap();
        assert_eq!(text, "été\n===");
    }

    #[test]
    fn test_empty_title_gets_empty_underline() {
        let text = TextRenderer.render_two_line_title("").unwrap();
        assert_eq!(text, "\n");
    }
}
