//! Documents and the skeleton engine.
//!
//! A [`Document`] owns raw markup text and a fixed, ordered set of matchers.
//! On first access it computes a *skeleton*: the raw text with every matched
//! span replaced by a `{{kind:id}}` placeholder token, plus the ordered list
//! of [`Binding`]s those tokens resolve to. The skeleton is computed once and
//! memoized; rendering substitutes renderer output for each token without
//! touching the cached state, so one parse serves any number of output
//! formats.
//!
//! # Substitution semantics
//!
//! Matchers run in registration order over the *current* skeleton, so later
//! matchers never see text already claimed by an earlier one. Each discovered
//! match replaces the **first remaining literal occurrence** of its span, one
//! substitution per match. Matches are discovered positionally, so this keeps
//! each substitution aligned with its own instance even when two matches have
//! identical literal text. Rendering replaces tokens the same way, in binding
//! order. Spans and tokens are always treated as literal text, never as
//! patterns.
//!
//! Documents are single-owner: the lazy computation has no internal locking,
//! and the memoization cell keeps the type `!Sync`.

mod binding;

pub use binding::{placeholder_token, Binding};

use once_cell::unsync::OnceCell;

use crate::error::{MxError, Result};
use crate::matcher::Matcher;
use crate::render::Renderer;

/// Skeleton text plus the bindings its tokens resolve to.
///
/// Invariant: every token appears exactly once in `text`, and token `i` is
/// `bindings[i].token`.
#[derive(Debug)]
struct Skeleton {
    text: String,
    bindings: Vec<Binding>,
}

/// A markup document with lazily computed skeleton state.
pub struct Document {
    text: String,
    matchers: Vec<Box<dyn Matcher>>,
    skeleton: OnceCell<Skeleton>,
}

impl Document {
    /// Create a document from raw text and an ordered matcher set.
    ///
    /// The matcher set is fixed for the document's lifetime; registration
    /// order is scan order.
    pub fn new(text: impl Into<String>, matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self {
            text: text.into(),
            matchers,
            skeleton: OnceCell::new(),
        }
    }

    /// Create a document wired with the standard AsciiDoc-style matcher set.
    pub fn ascii(text: impl Into<String>) -> Self {
        Self::new(
            text,
            vec![Box::new(crate::matcher::TwoLineTitleMatcher::new())],
        )
    }

    /// The raw input text, as given at construction.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The skeleton text: raw text with matched spans replaced by tokens.
    ///
    /// Computed on first access and cached for the document's lifetime. A
    /// matcher contract breach fails the call and leaves nothing cached.
    pub fn skeleton(&self) -> Result<&str> {
        Ok(&self.force()?.text)
    }

    /// The bindings discovered during skeleton computation, in token order.
    pub fn bindings(&self) -> Result<&[Binding]> {
        Ok(&self.force()?.bindings)
    }

    /// Render the document by resolving every placeholder with `renderer`.
    ///
    /// Starts from a fresh copy of the cached skeleton each time, so a
    /// document can be rendered repeatedly with different renderers. A
    /// renderer refusing a construct kind fails this call only; the cached
    /// skeleton and bindings survive for the next attempt.
    pub fn render(&self, renderer: &dyn Renderer) -> Result<String> {
        let skeleton = self.force()?;

        let mut result = skeleton.text.clone();
        for binding in &skeleton.bindings {
            let rendered = renderer.render(&binding.construct)?;
            result = result.replacen(binding.token.as_str(), &rendered, 1);
        }
        Ok(result)
    }

    fn force(&self) -> Result<&Skeleton> {
        self.skeleton.get_or_try_init(|| self.compute_skeleton())
    }

    /// Run every matcher over the progressively substituted text.
    ///
    /// Runs at most once per document; see the module docs for the
    /// substitution semantics.
    fn compute_skeleton(&self) -> Result<Skeleton> {
        let mut text = self.text.clone();
        let mut bindings: Vec<Binding> = Vec::new();

        for matcher in &self.matchers {
            for found in matcher.find_matches(&text) {
                if !text.contains(&found.span) {
                    return Err(MxError::MatchContract {
                        kind: matcher.kind_name(),
                        span: found.span,
                    });
                }

                let token = placeholder_token(matcher.kind_name(), bindings.len());
                text = text.replacen(found.span.as_str(), &token, 1);
                bindings.push(Binding::new(token, found.construct));
            }
        }

        Ok(Skeleton { text, bindings })
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("text", &self.text)
            .field("matchers", &self.matchers.len())
            .field("computed", &self.skeleton.get().is_some())
            .finish()
    }
}
