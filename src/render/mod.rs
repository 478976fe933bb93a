//! Rendering module for mx.
//!
//! One renderer per output format. Renderers are stateless: they turn a
//! single [`Construct`] into a format-specific string, and the document
//! engine splices the results into the skeleton. Adding a construct kind
//! extends the trait, so every format is revisited at compile time.

mod html;
mod text;

pub use html::HtmlRenderer;
pub use text::TextRenderer;

use crate::error::Result;
use crate::types::Construct;

/// Per-format converter from constructs to output text.
///
/// `render` dispatches exhaustively over [`Construct`]; formats that
/// deliberately cover a subset of kinds override the kind method to return
/// [`MxError::UnsupportedConstruct`](crate::MxError::UnsupportedConstruct).
pub trait Renderer {
    /// Format name, used in diagnostics (e.g. "html").
    fn name(&self) -> &'static str;

    /// Render a two-line title.
    fn render_two_line_title(&self, title: &str) -> Result<String>;

    /// Dispatch a construct to the method for its kind.
    fn render(&self, construct: &Construct) -> Result<String> {
        match construct {
            Construct::TwoLineTitle { title } => self.render_two_line_title(title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MxError;

    /// A format that declines titles entirely.
    struct NoTitles;

    impl Renderer for NoTitles {
        fn name(&self) -> &'static str {
            "no-titles"
        }

        fn render_two_line_title(&self, _title: &str) -> Result<String> {
            Err(MxError::UnsupportedConstruct {
                renderer: self.name(),
                kind: "title",
            })
        }
    }

    #[test]
    fn test_unsupported_kind_surfaces_error() {
        let err = NoTitles
            .render(&Construct::TwoLineTitle {
                title: "x".to_string(),
            })
            .unwrap_err();

        assert!(matches!(
            err,
            MxError::UnsupportedConstruct {
                renderer: "no-titles",
                kind: "title"
            }
        ));
    }

    #[test]
    fn test_unsupported_kind_does_not_poison_document() {
        let doc = crate::Document::ascii("Still Here\n==\n");

        assert!(doc.render(&NoTitles).is_err());
        // Cached state survives; a capable renderer still works.
        assert_eq!(
            doc.render(&HtmlRenderer).unwrap(),
            "<h1>Still Here</h1>\n"
        );
    }
}
