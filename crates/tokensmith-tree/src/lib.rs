//! Tokensmith token tree
//!
//! Models a hierarchical set of design tokens, loads it from DTCG-style JSON,
//! and derives per-node attributes by pushing tag declarations down the tree.
//! The result is a flat, ordered list of attributed [`Token`]s ready for code
//! generation.
//!
//! ```text
//! JSON → load_str() → TokenNode → propagate() → AttributedNode → flatten() → Vec<Token>
//! ```
//!
//! # Example
//!
//! ```
//! let tree = tokensmith_tree::load_str(
//!     r##"{ "$extensions": { "tags": ["folder"] }, "color": { "red": { "$value": "#f00" } } }"##,
//! )
//! .unwrap();
//! let tokens = tokensmith_tree::tokens(&tree);
//! assert_eq!(tokens.len(), 1);
//! assert_eq!(tokens[0].attributes.get("folder").map(String::as_str), Some("color"));
//! ```

pub mod attributes;
pub mod filter;
pub mod loader;
pub mod model;
pub mod value;

pub use attributes::{flatten, propagate, tokens, AttributedBody, AttributedNode};
pub use filter::PathFilter;
pub use loader::{load_str, load_value};
pub use model::{Attributes, Token, TokenNode, TokenValue};

/// Loader error with the dotted path of the offending node.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Load error at {path}: {message}")]
pub struct LoadError {
    pub message: String,
    pub path: String,
}
