//! HTML renderer.

use super::Renderer;
use crate::error::Result;

/// Renders constructs as HTML fragments.
#[derive(Debug, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn name(&self) -> &'static str {
        "html"
    }

    fn render_two_line_title(&self, title: &str) -> Result<String> {
        Ok(format!("<h1>{title}</h1>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_becomes_h1() {
        let html = HtmlRenderer.render_two_line_title("Coucou").unwrap();
        assert_eq!(html, "<h1>Coucou</h1>");
    }
}
