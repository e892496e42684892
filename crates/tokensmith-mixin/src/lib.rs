//! Tokensmith mixin generator
//!
//! Compiles attributed design tokens into SCSS mixins. Tokens are grouped
//! into mixins by a key derived from their attributes, variants include their
//! base mixin, declarations shared by every variant are hoisted into the
//! base, and each mixin is rendered with its media and state blocks.
//!
//! ```text
//! [Token] → synthesize() → MixinSet → hoist() → render_stylesheet() → SCSS
//! ```

pub mod conditions;
pub mod hoist;
pub mod key;
pub mod render;
pub mod synth;

use indexmap::{IndexMap, IndexSet};
use tokensmith_tree::Token;

pub use hoist::hoist;
pub use key::{derive_keys, MixinKeys};
pub use render::{render_mixin, render_stylesheet};
pub use synth::{synthesize, Synthesizer};

/// A single declaration, possibly gated by a media condition and/or a state
/// selector. Equality compares all four fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Property {
    pub name: String,
    pub value: String,
    /// Condition text without the `@media` keyword.
    pub media: Option<String>,
    pub selector: Option<String>,
}

/// One `@mixin` being assembled.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MixinRecord {
    pub key: String,
    /// Base mixins pulled in with `@include`, in discovery order.
    pub includes: IndexSet<String>,
    pub properties: Vec<Property>,
}

impl MixinRecord {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn has_property_named(&self, name: &str) -> bool {
        self.properties.iter().any(|p| p.name == name)
    }
}

/// Base key → keys of the variants that include it.
pub type ReverseIncludeIndex = IndexMap<String, IndexSet<String>>;

/// All mixins of a build, in creation order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MixinSet {
    pub records: IndexMap<String, MixinRecord>,
    pub reverse_index: ReverseIncludeIndex,
}

impl MixinSet {
    pub fn get(&self, key: &str) -> Option<&MixinRecord> {
        self.records.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Output formatting options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Emit the "generated file" comment at the top.
    pub header: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { header: true }
    }
}

/// The compiled stylesheet and the names of the mixins it defines.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilerOutput {
    pub scss: String,
    pub mixins: Vec<String>,
}

/// Compile tokens into an SCSS mixin stylesheet.
pub fn compile(tokens: &[Token], options: &FormatOptions) -> CompilerOutput {
    let mut set = synthesize(tokens);
    hoist(&mut set);
    CompilerOutput {
        scss: render_stylesheet(&set, options),
        mixins: set.keys().map(str::to_string).collect(),
    }
}
