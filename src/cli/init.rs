//! Init command implementation.
//!
//! Generates an `mx.yaml` manifest with project defaults.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use super::manifest::MANIFEST_FILENAME;
use super::Format;
use crate::error::{MxError, Result};
use crate::output::{display_path, Printer};

/// Initialize an mx project by generating an mx.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Default output format to record
    #[arg(long, short, value_enum, default_value = "html")]
    pub format: Format,

    /// Overwrite existing mx.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(MxError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    // Build YAML manually for clean formatting
    let format_name = match args.format {
        Format::Html => "html",
        Format::Text => "text",
    };
    let yaml = format!("format: {}\n", format_name);

    fs::write(&manifest_path, &yaml).map_err(|e| MxError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.success("Created", &display_path(&manifest_path));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::manifest::Manifest;

    #[test]
    fn test_init_writes_loadable_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let args = InitArgs {
            path: dir.path().to_path_buf(),
            format: Format::Text,
            force: false,
        };

        run(args, &Printer::new()).unwrap();

        let manifest = Manifest::load(dir.path()).unwrap().unwrap();
        assert_eq!(manifest.format, Some(Format::Text));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "format: html\n").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            format: Format::Html,
            force: false,
        };

        assert!(run(args, &Printer::new()).is_err());
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "format: html\n").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            format: Format::Text,
            force: true,
        };

        run(args, &Printer::new()).unwrap();

        let manifest = Manifest::load(dir.path()).unwrap().unwrap();
        assert_eq!(manifest.format, Some(Format::Text));
    }
}
