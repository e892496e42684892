//! SCSS rendering.
//!
//! Properties are grouped by their `(media, selector)` context in first-seen
//! order. Each group is wrapped in an `@media` block, then a selector block,
//! when those are present:
//!
//! ```text
//! @mixin color-primary-hover {
//!   @include color-primary;
//!   &[data-hovered] {
//!     background-color: #2244ee;
//!   }
//! }
//! ```

use crate::{FormatOptions, MixinRecord, MixinSet, Property};
use indexmap::IndexMap;

const HEADER: &str = "/**\n * Do not edit directly, this file was auto-generated.\n */";
const PRELUDE: &str = "@use \"sass:map\";";
const INDENT: &str = "  ";

type Context<'a> = (Option<&'a str>, Option<&'a str>);

/// Render the whole stylesheet.
pub fn render_stylesheet(set: &MixinSet, options: &FormatOptions) -> String {
    let mut sections = Vec::with_capacity(set.len() + 2);
    if options.header {
        sections.push(HEADER.to_string());
    }
    sections.push(PRELUDE.to_string());
    sections.extend(set.records.values().map(render_mixin));

    let mut out = sections.join("\n\n");
    out.push('\n');
    out
}

/// Render a single `@mixin` block.
pub fn render_mixin(record: &MixinRecord) -> String {
    let mut out = format!("@mixin {} {{\n", record.key);
    for include in &record.includes {
        line(&mut out, 1, &format!("@include {include};"));
    }

    for (i, ((media, selector), properties)) in group(&record.properties).into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let mut depth = 1;
        if let Some(media) = media {
            line(&mut out, depth, &format!("@media {media} {{"));
            depth += 1;
        }
        if let Some(selector) = selector {
            line(&mut out, depth, &format!("{selector} {{"));
            depth += 1;
        }
        for property in properties {
            line(&mut out, depth, &format!("{}: {};", property.name, property.value));
        }
        while depth > 1 {
            depth -= 1;
            line(&mut out, depth, "}");
        }
    }

    out.push('}');
    out
}

/// Group properties by context, keeping first-seen group order.
fn group(properties: &[Property]) -> IndexMap<Context<'_>, Vec<&Property>> {
    let mut groups: IndexMap<Context<'_>, Vec<&Property>> = IndexMap::new();
    for property in properties {
        groups
            .entry((property.media.as_deref(), property.selector.as_deref()))
            .or_default()
            .push(property);
    }
    groups
}

fn line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(text);
    out.push('\n');
}
