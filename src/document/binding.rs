//! Bindings pair placeholder tokens with their parsed constructs.

use serde::Serialize;

use crate::types::Construct;

/// Build the placeholder token for a construct kind and binding id.
///
/// The `{{kind:id}}` syntax is reserved: no matcher may return a span that
/// could produce this shape, or substitution becomes ambiguous. That
/// obligation sits with matcher authors and is not checked at runtime.
pub fn placeholder_token(kind: &str, id: usize) -> String {
    format!("{{{{{kind}:{id}}}}}")
}

/// One placeholder token and the construct it stands in for.
///
/// Created once per discovered occurrence, in discovery order, and owned by
/// the [`Document`](crate::Document) that created it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    /// The `{{kind:id}}` token embedded in the skeleton text.
    pub token: String,

    /// The parsed construct the token resolves to at render time.
    pub construct: Construct,
}

impl Binding {
    pub fn new(token: impl Into<String>, construct: Construct) -> Self {
        Self {
            token: token.into(),
            construct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_shape() {
        assert_eq!(placeholder_token("title", 0), "{{title:0}}");
        assert_eq!(placeholder_token("title", 12), "{{title:12}}");
    }

    #[test]
    fn test_binding_serializes_token_and_construct() {
        let b = Binding::new(
            placeholder_token("title", 0),
            Construct::TwoLineTitle {
                title: "Intro".to_string(),
            },
        );
        let json = serde_json::to_value(&b).unwrap();
        assert_eq!(json["token"], "{{title:0}}");
        assert_eq!(json["construct"]["kind"], "title");
    }
}
