//! Path-based token selection.

use crate::model::Token;

/// Keeps tokens whose path contains every `include` segment and none of the
/// `exclude` segments. An empty filter keeps everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathFilter {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl PathFilter {
    pub fn matches(&self, token: &Token) -> bool {
        let has = |segment: &String| token.path.iter().any(|p| p == segment);
        self.include.iter().all(has) && !self.exclude.iter().any(has)
    }

    /// Filter a token list, keeping order.
    pub fn apply(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens.into_iter().filter(|t| self.matches(t)).collect()
    }
}
