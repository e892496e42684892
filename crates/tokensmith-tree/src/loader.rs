//! DTCG-style JSON loader.
//!
//! Converts a parsed JSON document into a [`TokenNode`] tree:
//!
//! ```text
//! {
//!   "$extensions": { "tags": ["folder"] },
//!   "color": {
//!     "$extensions": { "tags": ["type"] },
//!     "background": { "primary": { "$value": "#3355ff", "$type": "color" } }
//!   }
//! }
//! ```
//!
//! Objects holding `$value` are leaves, every other object is a group. Keys
//! starting with `$` are metadata. An `attributes` object holds attributes
//! authored on that node; they apply to the node alone. Composite typography
//! values are expanded into one leaf per member.

use crate::model::{Attributes, TokenNode, TokenValue};
use crate::LoadError;
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// `$type` of composite values that expand into one leaf per member.
pub const TYPOGRAPHY_KIND: &str = "typography";

/// Parse a JSON string into a token tree.
pub fn load_str(source: &str) -> Result<TokenNode, LoadError> {
    let value: Value = serde_json::from_str(source).map_err(|e| LoadError {
        message: format!("invalid JSON: {e}"),
        path: display_path(&[]),
    })?;
    load_value(&value)
}

/// Convert an already-parsed JSON value into a token tree.
pub fn load_value(value: &Value) -> Result<TokenNode, LoadError> {
    let mut loader = Loader { path: Vec::new() };
    match value {
        Value::Object(map) => loader.load_node(map),
        _ => Err(loader.error("expected an object at the root")),
    }
}

struct Loader {
    path: Vec<String>,
}

impl Loader {
    fn load_node(&mut self, map: &Map<String, Value>) -> Result<TokenNode, LoadError> {
        let attributes = self.load_attributes(map)?;
        if let Some(value) = map.get("$value") {
            let kind = match map.get("$type") {
                None => None,
                Some(Value::String(kind)) => Some(kind.clone()),
                Some(_) => return Err(self.error("`$type` must be a string")),
            };
            return self.load_leaf(value, kind, attributes);
        }

        let tags = self.load_tags(map)?;
        let mut children = IndexMap::new();
        for (key, child) in map {
            if is_metadata_key(key) {
                continue;
            }
            let Value::Object(child) = child else {
                tracing::debug!(path = %display_path(&self.path), key = %key, "skipping non-object member");
                continue;
            };
            self.path.push(key.clone());
            let node = self.load_node(child);
            self.path.pop();
            children.insert(key.clone(), node?);
        }

        Ok(TokenNode::Branch {
            children,
            tags,
            attributes,
        })
    }

    fn load_leaf(
        &mut self,
        value: &Value,
        kind: Option<String>,
        attributes: Attributes,
    ) -> Result<TokenNode, LoadError> {
        match value {
            Value::Object(members) if kind.as_deref() == Some(TYPOGRAPHY_KIND) => {
                self.expand_composite(members, attributes)
            }
            _ => Ok(TokenNode::Leaf {
                value: self.load_scalar(value)?,
                kind,
                attributes,
            }),
        }
    }

    /// Expand `{ "fontSize": .., "lineHeight": .. }` into a group of leaves,
    /// each typed by its member name. Every member carries the composite's
    /// authored attributes.
    fn expand_composite(
        &mut self,
        members: &Map<String, Value>,
        attributes: Attributes,
    ) -> Result<TokenNode, LoadError> {
        let mut children = IndexMap::new();
        for (key, member) in members {
            self.path.push(key.clone());
            let value = self.load_scalar(member);
            self.path.pop();
            children.insert(
                key.clone(),
                TokenNode::Leaf {
                    value: value?,
                    kind: Some(key.clone()),
                    attributes: attributes.clone(),
                },
            );
        }
        Ok(TokenNode::Branch {
            children,
            tags: Vec::new(),
            attributes,
        })
    }

    fn load_scalar(&self, value: &Value) -> Result<TokenValue, LoadError> {
        match value {
            Value::String(s) => Ok(TokenValue::Text(s.clone())),
            Value::Bool(b) => Ok(TokenValue::Text(b.to_string())),
            Value::Number(n) => n
                .as_f64()
                .map(TokenValue::Number)
                .ok_or_else(|| self.error(format!("number out of range: {n}"))),
            Value::Object(map) => self.load_dimension(map),
            Value::Null | Value::Array(_) => Err(self.error("unsupported `$value`")),
        }
    }

    /// `{ "value": 4, "unit": "px" }`
    fn load_dimension(&self, map: &Map<String, Value>) -> Result<TokenValue, LoadError> {
        let unit = match map.get("unit") {
            Some(Value::String(unit)) => unit.clone(),
            _ => return Err(self.error("dimension value requires a string `unit`")),
        };
        match map.get("value") {
            Some(Value::Number(n)) => n
                .as_f64()
                .map(|value| TokenValue::Dimension { value, unit })
                .ok_or_else(|| self.error(format!("number out of range: {n}"))),
            Some(Value::String(s)) => Ok(TokenValue::Text(format!("{s}{unit}"))),
            _ => Err(self.error("dimension value requires a numeric `value`")),
        }
    }

    /// `"attributes": { "attribute": "border", "value": "width" }`
    fn load_attributes(&self, map: &Map<String, Value>) -> Result<Attributes, LoadError> {
        let Some(authored) = map.get("attributes") else {
            return Ok(Attributes::new());
        };
        let Value::Object(authored) = authored else {
            return Err(self.error("`attributes` must be an object of strings"));
        };
        authored
            .iter()
            .map(|(name, value)| match value {
                Value::String(value) => Ok((name.clone(), value.clone())),
                _ => Err(self.error(format!("attribute `{name}` must be a string"))),
            })
            .collect()
    }

    fn load_tags(&self, map: &Map<String, Value>) -> Result<Vec<String>, LoadError> {
        let Some(extensions) = map.get("$extensions") else {
            return Ok(Vec::new());
        };
        let Some(tags) = extensions.get("tags") else {
            return Ok(Vec::new());
        };
        let Value::Array(tags) = tags else {
            return Err(self.error("`$extensions.tags` must be an array of strings"));
        };
        tags.iter()
            .map(|tag| match tag {
                Value::String(tag) => Ok(tag.clone()),
                _ => Err(self.error("`$extensions.tags` must be an array of strings")),
            })
            .collect()
    }

    fn error(&self, message: impl Into<String>) -> LoadError {
        LoadError {
            message: message.into(),
            path: display_path(&self.path),
        }
    }
}

fn is_metadata_key(key: &str) -> bool {
    key.starts_with('$') || key == "attributes"
}

fn display_path(path: &[String]) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn keys(node: &TokenNode) -> Vec<&str> {
        match node {
            TokenNode::Branch { children, .. } => children.keys().map(String::as_str).collect(),
            TokenNode::Leaf { .. } => Vec::new(),
        }
    }

    fn child<'a>(node: &'a TokenNode, key: &str) -> &'a TokenNode {
        match node {
            TokenNode::Branch { children, .. } => &children[key],
            TokenNode::Leaf { .. } => panic!("{key}: not a branch"),
        }
    }

    // =========================================================================
    // Groups and leaves
    // =========================================================================

    #[test]
    fn test_simple_tree() {
        let tree = load_str(
            r##"{
                "$extensions": { "tags": ["folder"] },
                "color": {
                    "red": { "$value": "#f00", "$type": "color" }
                }
            }"##,
        )
        .unwrap();

        let TokenNode::Branch { tags, .. } = &tree else {
            panic!("expected branch");
        };
        assert_eq!(tags, &vec!["folder".to_string()]);
        assert_eq!(
            child(child(&tree, "color"), "red"),
            &TokenNode::Leaf {
                value: TokenValue::from("#f00"),
                kind: Some("color".into()),
                attributes: Attributes::new(),
            }
        );
    }

    #[test]
    fn test_source_order_preserved() {
        let tree = load_str(
            r#"{ "zeta": { "$value": "1" }, "alpha": { "$value": "2" }, "mid": { "$value": "3" } }"#,
        )
        .unwrap();
        assert_eq!(keys(&tree), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_metadata_keys_skipped() {
        let tree = load_str(
            r#"{
                "$description": "ignored",
                "attributes": { "folder": "x" },
                "size": { "$value": "4px" },
                "note": "not a token"
            }"#,
        )
        .unwrap();
        assert_eq!(keys(&tree), vec!["size"]);
    }

    #[test]
    fn test_authored_attributes_read() {
        let tree = load_str(
            r#"{
                "border": {
                    "$value": "1px",
                    "attributes": { "attribute": "border", "value": "width" }
                },
                "outline": {
                    "attributes": { "item": "focus" },
                    "width": { "$value": "2px" }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(
            child(&tree, "border"),
            &TokenNode::leaf("1px").with_attributes([("attribute", "border"), ("value", "width")])
        );
        let outline = child(&tree, "outline");
        assert_eq!(keys(outline), vec!["width"]);
        assert_eq!(
            outline.attributes().get("item").map(String::as_str),
            Some("focus")
        );
        assert!(child(outline, "width").attributes().is_empty());

        let tokens = crate::tokens(&tree);
        assert_eq!(tokens[0].attr("attribute"), Some("border"));
        assert_eq!(tokens[0].attr("value"), Some("width"));
        assert_eq!(tokens[1].attr("item"), None);
    }

    #[test]
    fn test_bad_authored_attributes() {
        let err = load_str(r#"{ "a": { "$value": "1", "attributes": { "x": 1 } } }"#).unwrap_err();
        assert_eq!(err.path, "a");
        assert_eq!(err.message, "attribute `x` must be a string");

        let err = load_str(r#"{ "a": { "attributes": [] } }"#).unwrap_err();
        assert_eq!(err.path, "a");
    }

    // =========================================================================
    // Values
    // =========================================================================

    #[test]
    fn test_dimension_value() {
        let tree = load_str(r#"{ "gap": { "$value": { "value": 4, "unit": "px" } } }"#).unwrap();
        assert_eq!(
            child(&tree, "gap"),
            &TokenNode::Leaf {
                value: TokenValue::Dimension {
                    value: 4.0,
                    unit: "px".into(),
                },
                kind: None,
                attributes: Attributes::new(),
            }
        );
    }

    #[test]
    fn test_number_value() {
        let tree = load_str(r#"{ "z": { "$value": 10 } }"#).unwrap();
        assert_eq!(child(&tree, "z"), &TokenNode::leaf(10.0));
    }

    #[test]
    fn test_typography_composite_expands() {
        let tree = load_str(
            r#"{
                "body": {
                    "$type": "typography",
                    "$value": {
                        "fontWeight": "bold",
                        "fontSize": { "value": 1, "unit": "rem" }
                    }
                }
            }"#,
        )
        .unwrap();
        let body = child(&tree, "body");
        assert_eq!(keys(body), vec!["fontWeight", "fontSize"]);
        assert_eq!(
            child(body, "fontWeight"),
            &TokenNode::Leaf {
                value: TokenValue::from("bold"),
                kind: Some("fontWeight".into()),
                attributes: Attributes::new(),
            }
        );
    }

    // =========================================================================
    // Errors
    // =========================================================================

    #[test]
    fn test_invalid_json() {
        let err = load_str("{ nope").unwrap_err();
        assert_eq!(err.path, "<root>");
        assert!(err.message.starts_with("invalid JSON"));
    }

    #[test]
    fn test_root_must_be_object() {
        let err = load_str("[1, 2]").unwrap_err();
        assert_eq!(err.to_string(), "Load error at <root>: expected an object at the root");
    }

    #[test]
    fn test_error_path_is_dotted() {
        let err = load_str(r#"{ "color": { "red": { "$value": null } } }"#).unwrap_err();
        assert_eq!(err.path, "color.red");
        assert_eq!(err.message, "unsupported `$value`");
    }

    #[test]
    fn test_bad_tags() {
        let err = load_str(r#"{ "color": { "$extensions": { "tags": [1] } } }"#).unwrap_err();
        assert_eq!(err.path, "color");
    }
}
