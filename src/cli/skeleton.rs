//! Skeleton command implementation.
//!
//! Prints the placeholder skeleton of a document, mostly useful for
//! inspecting what the matchers claimed. With `--json`, emits the skeleton
//! and the binding list as machine-readable JSON.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::document::Binding;
use crate::error::{MxError, Result};
use crate::Document;

/// Print the placeholder skeleton of a document
#[derive(Args, Debug)]
pub struct SkeletonArgs {
    /// Input file (use "-" for stdin)
    pub input: PathBuf,

    /// Emit skeleton and bindings as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON shape for `mx skeleton --json`.
#[derive(Serialize)]
struct SkeletonReport<'a> {
    skeleton: &'a str,
    bindings: &'a [Binding],
}

pub fn run(args: SkeletonArgs) -> Result<()> {
    let source = super::convert::read_input(&args.input)?;
    let doc = Document::ascii(source);

    if args.json {
        let report = SkeletonReport {
            skeleton: doc.skeleton()?,
            bindings: doc.bindings()?,
        };
        let json = serde_json::to_string_pretty(&report).map_err(|e| MxError::Build {
            message: format!("Failed to serialize report: {}", e),
            help: None,
        })?;
        println!("{json}");
    } else {
        print!("{}", doc.skeleton()?);
    }

    Ok(())
}
