//! Attribute propagation.
//!
//! Walks the token tree top-down, copying each node's inherited attributes
//! and extending them with the tag declaration of its parent: a branch tagged
//! `["folder"]` gives each child `folder = <child key>`. Deeper declarations
//! override shallower ones for the same attribute name. Attributes authored
//! on a node apply to that node alone and yield to propagated ones.

use crate::model::{Attributes, Token, TokenNode, TokenValue};
use crate::value;
use indexmap::IndexMap;

/// A tree node together with the attributes accumulated from the root.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributedNode {
    pub attributes: Attributes,
    pub body: AttributedBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttributedBody {
    Leaf {
        value: TokenValue,
        kind: Option<String>,
    },
    Branch {
        children: IndexMap<String, AttributedNode>,
    },
}

/// Compute attributes for every node of the tree.
pub fn propagate(root: &TokenNode) -> AttributedNode {
    visit(root, Attributes::new())
}

fn visit(node: &TokenNode, inherited: Attributes) -> AttributedNode {
    let body = match node {
        TokenNode::Leaf { value, kind, .. } => AttributedBody::Leaf {
            value: value.clone(),
            kind: kind.clone(),
        },
        TokenNode::Branch { children, tags, .. } => {
            let children = children
                .iter()
                .map(|(key, child)| {
                    let mut inherited = inherited.clone();
                    for tag in tags {
                        inherited.insert(tag.clone(), key.clone());
                    }
                    (key.clone(), visit(child, inherited))
                })
                .collect();
            AttributedBody::Branch { children }
        }
    };

    let mut attributes = node.attributes().clone();
    attributes.extend(inherited);
    AttributedNode { attributes, body }
}

/// Collect every leaf as a [`Token`], depth-first in source order.
pub fn flatten(root: &AttributedNode) -> Vec<Token> {
    let mut out = Vec::new();
    let mut path = Vec::new();
    collect(root, &mut path, &mut out);
    tracing::debug!(count = out.len(), "flattened token tree");
    out
}

fn collect(node: &AttributedNode, path: &mut Vec<String>, out: &mut Vec<Token>) {
    match &node.body {
        AttributedBody::Leaf { value, kind } => {
            let value = value::render(value, kind.as_deref());
            tracing::trace!(path = %path.join("."), %value, "leaf token");
            out.push(Token::new(path.clone(), node.attributes.clone(), value));
        }
        AttributedBody::Branch { children } => {
            for (key, child) in children {
                path.push(key.clone());
                collect(child, path, out);
                path.pop();
            }
        }
    }
}

/// Propagate and flatten in one step.
pub fn tokens(root: &TokenNode) -> Vec<Token> {
    flatten(&propagate(root))
}
