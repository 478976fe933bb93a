//! Parsed markup constructs.

use serde::Serialize;

/// A parsed representation of one markup unit.
///
/// The set of kinds is closed: adding a variant forces every renderer to
/// handle it (or explicitly decline it) at compile time. Constructs are
/// immutable once created and carry no rendering logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum Construct {
    /// A title written on its own line, underlined by repeated `=` characters.
    ///
    /// ```text
    /// Section Title
    /// =============
    /// ```
    #[serde(rename = "title")]
    TwoLineTitle { title: String },
}

impl Construct {
    /// Stable kind name, matching the matcher's placeholder namespace.
    pub fn kind(&self) -> &'static str {
        match self {
            Construct::TwoLineTitle { .. } => "title",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_name() {
        let c = Construct::TwoLineTitle {
            title: "Intro".to_string(),
        };
        assert_eq!(c.kind(), "title");
    }

    #[test]
    fn test_serialize_tagged() {
        let c = Construct::TwoLineTitle {
            title: "Intro".to_string(),
        };
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["kind"], "title");
        assert_eq!(json["title"], "Intro");
    }
}
