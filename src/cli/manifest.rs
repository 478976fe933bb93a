//! Project manifest (`mx.yaml`).
//!
//! Holds per-project defaults so `mx convert` can be run bare. All fields are
//! optional; command-line flags always win.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::Format;
use crate::error::{MxError, Result};

/// Manifest filename looked up in the working directory.
pub const MANIFEST_FILENAME: &str = "mx.yaml";

/// Per-project defaults for conversion.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// Default output format when `--format` is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,

    /// Default output file when `--output` is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl Manifest {
    /// Load the manifest from `dir`, if one exists there.
    pub fn load(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(MANIFEST_FILENAME);
        if !path.exists() {
            return Ok(None);
        }

        let source = fs::read_to_string(&path).map_err(|e| MxError::Io {
            path: path.clone(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        let manifest = serde_yaml::from_str(&source).map_err(|e| MxError::Build {
            message: format!("Invalid {}: {}", MANIFEST_FILENAME, e),
            help: Some("Expected fields: format (html|text), output (path)".to_string()),
        })?;

        Ok(Some(manifest))
    }
}
