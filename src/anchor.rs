//! Anchor ids for headings.
//!
//! Every heading at levels 2–4 gets an `id` derived from its text, and every
//! table-of-contents link points at `#` + the same id. Both sides go through
//! [`anchor_id`], so a link and its target always agree for a given heading
//! text.
//!
//! ## Derivation
//!
//! Two passes, in this order:
//!
//! 1. Each run of whitespace collapses to a single `-`.
//! 2. Anything that is not an ASCII letter, digit, `-` or `_` is dropped.
//!
//! The result is lowercased:
//!
//! - `"Getting Started"` → `"getting-started"`
//! - `"Foo/Bar!! Baz"` → `"foobar-baz"`
//! - `"  useSlider  "` → `"-useslider-"`
//!
//! Identical headings produce identical ids. Nothing here disambiguates them;
//! [`duplicate_anchor_ids`] only reports the collisions.

use crate::toc::TocEntry;
use std::collections::BTreeMap;

/// Derive the URL-fragment id for a heading's text.
pub fn anchor_id(text: &str) -> String {
    let mut id = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                id.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            id.push(c.to_ascii_lowercase());
        }
    }
    id
}

/// Link target for a heading: `#` followed by its [`anchor_id`].
pub fn anchor_href(text: &str) -> String {
    format!("#{}", anchor_id(text))
}

/// Ids that more than one entry of the outline resolves to, in sorted order.
pub fn duplicate_anchor_ids(outline: &[TocEntry]) -> Vec<String> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    count_ids(outline, &mut counts);
    counts
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(id, _)| id)
        .collect()
}

fn count_ids(entries: &[TocEntry], counts: &mut BTreeMap<String, usize>) {
    for entry in entries {
        *counts.entry(anchor_id(&entry.title)).or_default() += 1;
        count_ids(&entry.children, counts);
    }
}
