use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mx operations
#[derive(Error, Diagnostic, Debug)]
pub enum MxError {
    #[error("IO error: {0}")]
    #[diagnostic(code(mx::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(mx::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    /// A matcher returned a span that is not present in the text it scanned.
    ///
    /// This is a bug in the matcher, not bad input; skeleton computation for
    /// the document is aborted.
    #[error("matcher '{kind}' returned a span not found in the scanned text: {span:?}")]
    #[diagnostic(code(mx::match_contract))]
    MatchContract { kind: &'static str, span: String },

    /// A renderer was asked for a construct kind it does not support.
    ///
    /// The document's cached skeleton and bindings are untouched; a different
    /// renderer can still be tried.
    #[error("renderer '{renderer}' does not support construct kind '{kind}'")]
    #[diagnostic(code(mx::unsupported_construct))]
    UnsupportedConstruct {
        renderer: &'static str,
        kind: &'static str,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(mx::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, MxError>;
