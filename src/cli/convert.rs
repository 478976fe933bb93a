//! Convert command implementation.
//!
//! Reads a markup file (or stdin), renders it with the selected format, and
//! writes the result to stdout or a file. Status lines go to stderr; stdout
//! stays clean for the converted output.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;

use super::manifest::Manifest;
use super::Format;
use crate::error::{MxError, Result};
use crate::output::{display_path, plural, Printer};
use crate::Document;

/// Convert markup to an output format
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input file (use "-" for stdin)
    pub input: PathBuf,

    /// Output format
    #[arg(long, short, value_enum)]
    pub format: Option<Format>,

    /// Output file (default: stdout)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: ConvertArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::load(&std::env::current_dir()?)?;

    let format = args
        .format
        .or_else(|| manifest.as_ref().and_then(|m| m.format))
        .ok_or_else(|| MxError::Build {
            message: "No output format selected".to_string(),
            help: Some("Pass --format html|text, or set format: in mx.yaml".to_string()),
        })?;

    let source = read_input(&args.input)?;
    let doc = Document::ascii(source);
    let rendered = doc.render(format.renderer().as_ref())?;

    let bindings = doc.bindings()?.len();
    printer.status(
        "Converting",
        &format!(
            "{} ({})",
            display_path(&args.input),
            plural(bindings, "construct", "constructs")
        ),
    );

    let output = args
        .output
        .or_else(|| manifest.and_then(|m| m.output));

    match output {
        Some(path) => {
            fs::write(&path, &rendered).map_err(|e| MxError::Io {
                path: path.clone(),
                message: format!("Failed to write output: {}", e),
            })?;
            printer.success("Finished", &display_path(&path));
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

/// Read the input file, or stdin when the path is `-`.
pub(super) fn read_input(path: &PathBuf) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        fs::read_to_string(path).map_err(|e| MxError::Io {
            path: path.clone(),
            message: format!("Failed to read input: {}", e),
        })
    }
}
