//! Token tree data model.
//!
//! A tree is made of branches (named groups, optionally carrying a tag
//! declaration) and leaves (the actual design values). Children keep their
//! source order, which later decides mixin property order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Open attribute mapping, in insertion order.
pub type Attributes = IndexMap<String, String>;

/// A node of the token tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenNode {
    /// A design value. `kind` is the declared `$type`, if any.
    Leaf {
        value: TokenValue,
        kind: Option<String>,
        attributes: Attributes,
    },

    /// A named group of nodes.
    ///
    /// For every attribute name in `tags`, each child records its own key
    /// under that name, and the record is inherited by everything below it.
    Branch {
        children: IndexMap<String, TokenNode>,
        tags: Vec<String>,
        attributes: Attributes,
    },
}

impl TokenNode {
    pub fn leaf(value: impl Into<TokenValue>) -> Self {
        TokenNode::Leaf {
            value: value.into(),
            kind: None,
            attributes: Attributes::new(),
        }
    }

    /// A branch without a tag declaration.
    pub fn branch<K: Into<String>>(children: impl IntoIterator<Item = (K, TokenNode)>) -> Self {
        TokenNode::tagged(Vec::<String>::new(), children)
    }

    pub fn tagged<T, K>(
        tags: impl IntoIterator<Item = T>,
        children: impl IntoIterator<Item = (K, TokenNode)>,
    ) -> Self
    where
        T: Into<String>,
        K: Into<String>,
    {
        TokenNode::Branch {
            children: children.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            tags: tags.into_iter().map(Into::into).collect(),
            attributes: Attributes::new(),
        }
    }

    /// Attach authored attributes to this node only.
    pub fn with_attributes<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let own = match &mut self {
            TokenNode::Leaf { attributes, .. } | TokenNode::Branch { attributes, .. } => attributes,
        };
        own.extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Attributes authored on this node.
    pub fn attributes(&self) -> &Attributes {
        match self {
            TokenNode::Leaf { attributes, .. } | TokenNode::Branch { attributes, .. } => attributes,
        }
    }
}

/// The raw value of a leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Text(String),
    Number(f64),
    /// `{ "value": 4, "unit": "px" }`
    Dimension { value: f64, unit: String },
}

impl From<&str> for TokenValue {
    fn from(s: &str) -> Self {
        TokenValue::Text(s.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(s: String) -> Self {
        TokenValue::Text(s)
    }
}

impl From<f64> for TokenValue {
    fn from(n: f64) -> Self {
        TokenValue::Number(n)
    }
}

/// A flattened, attributed leaf token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub path: Vec<String>,
    #[serde(default)]
    pub attributes: Attributes,
    pub value: String,
}

impl Token {
    pub fn new(path: Vec<String>, attributes: Attributes, value: impl Into<String>) -> Self {
        Self {
            path,
            attributes,
            value: value.into(),
        }
    }

    /// Look up an attribute, treating empty values as absent.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// The final path segment, or an empty string for a root leaf.
    pub fn name(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or("")
    }
}
