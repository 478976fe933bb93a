pub mod completions;
pub mod convert;
pub mod init;
pub mod manifest;
pub mod skeleton;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::render::{HtmlRenderer, Renderer, TextRenderer};

/// mx - Lightweight markup converter
#[derive(Parser, Debug)]
#[command(name = "mx")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert markup to an output format
    Convert(convert::ConvertArgs),

    /// Print the placeholder skeleton of a document
    Skeleton(skeleton::SkeletonArgs),

    /// Initialize an mx project (generates mx.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Selectable output format.
#[derive(ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// HTML fragments (`<h1>` headings)
    Html,
    /// Normalized plain text (regenerated underlines)
    Text,
}

impl Format {
    /// The renderer for this format.
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            Format::Html => Box::new(HtmlRenderer),
            Format::Text => Box::new(TextRenderer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_maps_to_renderer() {
        assert_eq!(Format::Html.renderer().name(), "html");
        assert_eq!(Format::Text.renderer().name(), "text");
    }

    #[test]
    fn test_format_yaml_round_trip() {
        let f: Format = serde_yaml::from_str("html").unwrap();
        assert_eq!(f, Format::Html);
        assert_eq!(serde_yaml::to_string(&Format::Text).unwrap().trim(), "text");
    }
}
