//! On-page table of contents.
//!
//! A page's outline is a tree of [`TocEntry`] values mirroring its heading
//! hierarchy. The outline normally arrives with the page descriptor; when it
//! does not, [`outline_from_headings`] rebuilds it from the page's headings.
//!
//! [`render_toc`] turns an outline into nested side-nav lists. Each level is
//! wrapped in its own `nav.on-page-nav`, so a child group renders exactly
//! like a top-level one:
//!
//! ```text
//! nav.on-page-nav
//! └── ul.side-nav
//!     ├── li.side-nav-item
//!     │   ├── a.side-nav-link href="#overview"
//!     │   └── nav.on-page-nav            ← children, same shape
//!     └── li.side-nav-item
//! ```

use crate::anchor::anchor_href;
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

/// One heading in a page outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub title: String,
    #[serde(default)]
    pub children: Vec<TocEntry>,
}

impl TocEntry {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(title: impl Into<String>, children: Vec<TocEntry>) -> Self {
        Self {
            title: title.into(),
            children,
        }
    }
}

/// Render an outline as nested navigation groups.
///
/// An empty slice renders an empty group rather than nothing, so the sidebar
/// keeps its structure on pages without sub-headings.
pub fn render_toc(nodes: &[TocEntry]) -> Markup {
    html! {
        nav.on-page-nav {
            ul.side-nav {
                @for entry in nodes {
                    li.side-nav-item {
                        a.side-nav-link href=(anchor_href(&entry.title)) { (entry.title) }
                        @if !entry.children.is_empty() {
                            (render_toc(&entry.children))
                        }
                    }
                }
            }
        }
    }
}

/// Nest a flat, document-ordered heading list into an outline.
///
/// A heading becomes a child of the nearest preceding heading with a lower
/// level; with no such heading it becomes a root. Skipped levels (an `h4`
/// directly under an `h2`) nest under whatever is open.
pub fn outline_from_headings(headings: &[(u8, String)]) -> Vec<TocEntry> {
    // Open path from a root down to the last heading, with each node's level.
    let mut stack: Vec<(u8, TocEntry)> = Vec::new();
    let mut roots = Vec::new();

    for (level, title) in headings {
        while stack.last().is_some_and(|(open, _)| open >= level) {
            close_last(&mut stack, &mut roots);
        }
        stack.push((*level, TocEntry::new(title.clone())));
    }
    while !stack.is_empty() {
        close_last(&mut stack, &mut roots);
    }
    roots
}

fn close_last(stack: &mut Vec<(u8, TocEntry)>, roots: &mut Vec<TocEntry>) {
    if let Some((_, entry)) = stack.pop() {
        match stack.last_mut() {
            Some((_, parent)) => parent.children.push(entry),
            None => roots.push(entry),
        }
    }
}

/// Entries shown in the sidebar: the sub-headings of the page's first root.
///
/// The page title (`h1`) is the single root of a normal outline and is not
/// repeated in its own contents list.
pub fn sidebar_entries(outline: &[TocEntry]) -> &[TocEntry] {
    outline
        .first()
        .map(|root| root.children.as_slice())
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::anchor_id;

    fn headings(list: &[(u8, &str)]) -> Vec<(u8, String)> {
        list.iter().map(|(l, t)| (*l, t.to_string())).collect()
    }

    #[test]
    fn empty_outline_renders_empty_group() {
        let html = render_toc(&[]).into_string();
        assert_eq!(
            html,
            r#"<nav class="on-page-nav"><ul class="side-nav"></ul></nav>"#
        );
    }

    #[test]
    fn two_level_outline_structure() {
        let outline = vec![
            TocEntry::with_children("A", vec![TocEntry::new("A1")]),
            TocEntry::new("B"),
        ];
        let html = render_toc(&outline).into_string();
        assert_eq!(
            html,
            concat!(
                r#"<nav class="on-page-nav"><ul class="side-nav">"#,
                r##"<li class="side-nav-item"><a class="side-nav-link" href="#a">A</a>"##,
                r#"<nav class="on-page-nav"><ul class="side-nav">"#,
                r##"<li class="side-nav-item"><a class="side-nav-link" href="#a1">A1</a></li>"##,
                r#"</ul></nav></li>"#,
                r##"<li class="side-nav-item"><a class="side-nav-link" href="#b">B</a></li>"##,
                r#"</ul></nav>"#,
            )
        );
    }

    #[test]
    fn every_link_targets_its_own_anchor() {
        let outline = vec![TocEntry::with_children(
            "Getting Started",
            vec![
                TocEntry::new("Foo/Bar!! Baz"),
                TocEntry::with_children("Props & Events", vec![TocEntry::new("on_change")]),
            ],
        )];
        let html = render_toc(&outline).into_string();
        for title in ["Getting Started", "Foo/Bar!! Baz", "Props & Events", "on_change"] {
            let href = format!(r##"href="#{}""##, anchor_id(title));
            assert!(html.contains(&href), "missing {href} in {html}");
        }
    }

    #[test]
    fn leaf_items_have_no_nested_group() {
        let html = render_toc(&[TocEntry::new("Only")]).into_string();
        assert_eq!(html.matches("on-page-nav").count(), 1);
    }

    #[test]
    fn titles_are_escaped() {
        let html = render_toc(&[TocEntry::new("<T> & friends")]).into_string();
        assert!(html.contains("&lt;T&gt; &amp; friends"));
        assert!(html.contains(r##"href="#t--friends""##));
    }

    #[test]
    fn deserializes_without_children() {
        let entry: TocEntry = serde_json::from_str(r#"{"title": "Usage"}"#).unwrap();
        assert_eq!(entry, TocEntry::new("Usage"));
    }

    #[test]
    fn outline_nests_by_level() {
        let outline = outline_from_headings(&headings(&[
            (1, "Button"),
            (2, "Usage"),
            (3, "Sizes"),
            (3, "Variants"),
            (2, "API"),
        ]));
        assert_eq!(
            outline,
            vec![TocEntry::with_children(
                "Button",
                vec![
                    TocEntry::with_children(
                        "Usage",
                        vec![TocEntry::new("Sizes"), TocEntry::new("Variants")]
                    ),
                    TocEntry::new("API"),
                ]
            )]
        );
    }

    #[test]
    fn outline_without_h1_has_multiple_roots() {
        let outline = outline_from_headings(&headings(&[(2, "One"), (3, "One.a"), (2, "Two")]));
        assert_eq!(outline.len(), 2);
        assert_eq!(outline[0].children, vec![TocEntry::new("One.a")]);
        assert!(outline[1].children.is_empty());
    }

    #[test]
    fn outline_skipped_level_nests_under_open_heading() {
        let outline = outline_from_headings(&headings(&[(1, "T"), (4, "Deep"), (2, "Back")]));
        assert_eq!(
            outline,
            vec![TocEntry::with_children(
                "T",
                vec![TocEntry::new("Deep"), TocEntry::new("Back")]
            )]
        );
    }

    #[test]
    fn outline_from_no_headings_is_empty() {
        assert!(outline_from_headings(&[]).is_empty());
    }

    #[test]
    fn sidebar_uses_first_root_children() {
        let outline = vec![
            TocEntry::with_children("Page", vec![TocEntry::new("Intro")]),
            TocEntry::with_children("Other", vec![TocEntry::new("Ignored")]),
        ];
        assert_eq!(sidebar_entries(&outline), &[TocEntry::new("Intro")]);
        assert!(sidebar_entries(&[]).is_empty());
    }
}
