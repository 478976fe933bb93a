//! mx - Lightweight markup converter
//!
//! A library for converting structured-text markup (AsciiDoc-style two-line
//! titles and friends) into multiple output formats from a single parse.
//!
//! The pipeline locates constructs once, replaces each matched span with a
//! `{{kind:id}}` placeholder token, and resolves the tokens per output format
//! on demand:
//!
//! ```
//! use mx::{Document, HtmlRenderer, TextRenderer};
//!
//! let doc = Document::ascii("Coucou\n==");
//! assert_eq!(doc.skeleton().unwrap(), "{{title:0}}");
//! assert_eq!(doc.render(&HtmlRenderer).unwrap(), "<h1>Coucou</h1>");
//! assert_eq!(doc.render(&TextRenderer).unwrap(), "Coucou\n======");
//! ```

pub mod cli;
pub mod document;
pub mod error;
pub mod matcher;
pub mod output;
pub mod render;
pub mod types;

pub use document::{placeholder_token, Binding, Document};
pub use error::{MxError, Result};
pub use matcher::{Match, Matcher, TwoLineTitleMatcher};
pub use render::{HtmlRenderer, Renderer, TextRenderer};
pub use types::Construct;
