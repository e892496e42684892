//! Mixin synthesis.
//!
//! A single pass over the tokens in traversal order. Each token lands in the
//! mixin named by its derived key. A variant is linked to its base mixin only
//! when the base already exists at the moment the variant is seen, so token
//! order decides which `@include` edges are discovered.

use crate::conditions;
use crate::key::{self, MixinKeys};
use crate::{MixinRecord, MixinSet, Property};
use tokensmith_tree::Token;

/// Accumulates tokens into mixin records.
#[derive(Debug, Default)]
pub struct Synthesizer {
    set: MixinSet,
}

impl Synthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one token. Must be called in traversal order.
    pub fn push(&mut self, token: &Token) {
        let keys = key::derive_keys(token);
        let base_exists = keys.is_variant() && self.set.records.contains_key(&keys.base);
        let MixinKeys { mixin, base } = keys;

        let record = self.set.records.entry(mixin.clone()).or_insert_with(|| {
            tracing::debug!(mixin = %mixin, "new mixin");
            MixinRecord::new(mixin.clone())
        });

        if base_exists {
            if record.includes.insert(base.clone()) {
                tracing::debug!(mixin = %mixin, base = %base, "include base mixin");
            }
            self.set
                .reverse_index
                .entry(base)
                .or_default()
                .insert(mixin.clone());
        }

        let property = property_for(token);
        tracing::trace!(mixin = %mixin, property = %property.name, value = %property.value, "declare");
        record.properties.push(property);
    }

    pub fn finish(self) -> MixinSet {
        self.set
    }
}

/// Build the declaration a token contributes.
pub fn property_for(token: &Token) -> Property {
    Property {
        name: key::property_name(token),
        value: token.value.clone(),
        media: conditions::media_condition(token),
        selector: conditions::selector(token),
    }
}

/// Run the synthesizer over a token sequence.
pub fn synthesize(tokens: &[Token]) -> MixinSet {
    let mut synth = Synthesizer::new();
    for token in tokens {
        synth.push(token);
    }
    synth.finish()
}
