//! Common-property hoisting.
//!
//! For every base mixin with known variants, a declaration that appears
//! verbatim in all of those variants is moved into the base and removed from
//! each variant. A base that already declares a property of the same name
//! blocks the move, whatever its value or conditions. This is one pass and
//! is not repeated until nothing changes.

use crate::{MixinRecord, MixinSet, Property};

/// Hoist shared declarations into base mixins.
pub fn hoist(set: &mut MixinSet) {
    let MixinSet {
        records,
        reverse_index,
    } = set;

    for (base_key, variant_keys) in reverse_index.iter() {
        if !records.contains_key(base_key) {
            continue;
        }

        for variant_key in variant_keys {
            // Snapshot: hoisting below rewrites this variant's list.
            let Some(candidates) = records.get(variant_key).map(|r| r.properties.clone()) else {
                continue;
            };

            for property in candidates {
                let blocked = records
                    .get(base_key)
                    .map_or(true, |base| base.has_property_named(&property.name));
                if blocked {
                    continue;
                }

                let shared = variant_keys.iter().all(|key| {
                    records
                        .get(key)
                        .is_some_and(|r| r.properties.contains(&property))
                });
                if !shared {
                    continue;
                }

                for key in variant_keys {
                    if let Some(variant) = records.get_mut(key) {
                        variant.properties.retain(|p| p != &property);
                    }
                }
                tracing::debug!(
                    base = %base_key,
                    property = %property.name,
                    value = %property.value,
                    variants = variant_keys.len(),
                    "hoisted shared property"
                );
                push_unique(records.get_mut(base_key), property);
            }
        }
    }
}

fn push_unique(base: Option<&mut MixinRecord>, property: Property) {
    if let Some(base) = base {
        if !base.has_property_named(&property.name) {
            base.properties.push(property);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexSet;
    use pretty_assertions::assert_eq;

    fn prop(name: &str, value: &str) -> Property {
        Property {
            name: name.into(),
            value: value.into(),
            media: None,
            selector: None,
        }
    }

    fn record(key: &str, properties: Vec<Property>) -> MixinRecord {
        MixinRecord {
            key: key.into(),
            includes: IndexSet::new(),
            properties,
        }
    }

    /// A base `b` with the given variants, all linked through the reverse index.
    fn family(base: Vec<Property>, variants: Vec<(&str, Vec<Property>)>) -> MixinSet {
        let mut set = MixinSet::default();
        set.records.insert("b".into(), record("b", base));
        for (key, properties) in variants {
            let mut r = record(key, properties);
            r.includes.insert("b".into());
            set.records.insert(key.into(), r);
            set.reverse_index
                .entry("b".into())
                .or_default()
                .insert(key.into());
        }
        set
    }

    fn props<'a>(set: &'a MixinSet, key: &str) -> &'a [Property] {
        &set.get(key).unwrap().properties
    }

    #[test]
    fn test_three_variants_share_padding() {
        let mut set = family(
            vec![],
            vec![
                ("b-sm", vec![prop("padding", "4px")]),
                ("b-md", vec![prop("padding", "4px")]),
                ("b-lg", vec![prop("padding", "4px")]),
            ],
        );
        hoist(&mut set);
        assert_eq!(props(&set, "b"), &[prop("padding", "4px")]);
        assert!(props(&set, "b-sm").is_empty());
        assert!(props(&set, "b-md").is_empty());
        assert!(props(&set, "b-lg").is_empty());
    }

    #[test]
    fn test_subset_is_left_alone() {
        let mut set = family(
            vec![],
            vec![
                ("b-sm", vec![prop("gap", "2px"), prop("color", "red")]),
                ("b-md", vec![prop("gap", "2px")]),
                ("b-lg", vec![prop("gap", "4px"), prop("color", "red")]),
            ],
        );
        let before = set.clone();
        hoist(&mut set);
        assert_eq!(set, before);
    }

    #[test]
    fn test_base_name_blocks_hoist() {
        let mut set = family(
            vec![prop("padding", "8px")],
            vec![
                ("b-sm", vec![prop("padding", "4px")]),
                ("b-lg", vec![prop("padding", "4px")]),
            ],
        );
        hoist(&mut set);
        assert_eq!(props(&set, "b"), &[prop("padding", "8px")]);
        assert_eq!(props(&set, "b-sm"), &[prop("padding", "4px")]);
        assert_eq!(props(&set, "b-lg"), &[prop("padding", "4px")]);
    }

    #[test]
    fn test_conditions_are_part_of_equality() {
        let hovered = Property {
            selector: Some("&[data-hovered]".into()),
            ..prop("color", "blue")
        };
        let mut set = family(
            vec![],
            vec![
                ("b-sm", vec![hovered.clone(), prop("gap", "1px")]),
                ("b-lg", vec![prop("color", "blue"), prop("gap", "1px")]),
            ],
        );
        hoist(&mut set);
        assert_eq!(props(&set, "b"), &[prop("gap", "1px")]);
        assert_eq!(props(&set, "b-sm"), &[hovered]);
        assert_eq!(props(&set, "b-lg"), &[prop("color", "blue")]);
    }

    #[test]
    fn test_first_hoisted_name_wins() {
        // Two conditional `color` declarations, both shared: once the first
        // lands in the base, the second is blocked by name.
        let dark = Property {
            media: Some("(prefers-color-scheme: dark)".into()),
            ..prop("color", "white")
        };
        let mut set = family(
            vec![],
            vec![
                ("b-sm", vec![prop("color", "black"), dark.clone()]),
                ("b-lg", vec![prop("color", "black"), dark.clone()]),
            ],
        );
        hoist(&mut set);
        assert_eq!(props(&set, "b"), &[prop("color", "black")]);
        assert_eq!(props(&set, "b-sm"), &[dark.clone()]);
        assert_eq!(props(&set, "b-lg"), &[dark]);
    }

    #[test]
    fn test_duplicates_within_variant_removed() {
        let mut set = family(
            vec![],
            vec![
                ("b-sm", vec![prop("gap", "1px"), prop("gap", "1px")]),
                ("b-lg", vec![prop("gap", "1px")]),
            ],
        );
        hoist(&mut set);
        assert_eq!(props(&set, "b"), &[prop("gap", "1px")]);
        assert!(props(&set, "b-sm").is_empty());
        assert!(props(&set, "b-lg").is_empty());
    }

    #[test]
    fn test_single_variant_moves_everything_new() {
        let mut set = family(
            vec![prop("cursor", "pointer")],
            vec![("b-hover", vec![prop("cursor", "grab"), prop("outline", "none")])],
        );
        hoist(&mut set);
        assert_eq!(
            props(&set, "b"),
            &[prop("cursor", "pointer"), prop("outline", "none")]
        );
        assert_eq!(props(&set, "b-hover"), &[prop("cursor", "grab")]);
    }

    #[test]
    fn test_no_reverse_index_no_change() {
        let mut set = MixinSet::default();
        set.records
            .insert("a".into(), record("a", vec![prop("gap", "1px")]));
        let before = set.clone();
        hoist(&mut set);
        assert_eq!(set, before);
    }
}
