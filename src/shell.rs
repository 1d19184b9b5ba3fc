//! The page shell.
//!
//! Every documentation page renders into the same skeleton:
//!
//! ```text
//! html
//! ├── head                     title, description, inline stylesheet
//! └── body.page
//!     ├── search slot          Widgets::search
//!     └── div.page-row
//!         ├── nav slot         Widgets::nav (all pages, current page)
//!         └── main.page-main   keyed by the page url
//!             ├── article      content tree through the component mapping
//!             └── aside        sticky: "Contents", TOC, reserved slot
//! ```
//!
//! The shell owns placement only. Everything inside the slots comes from the
//! page descriptor or from a [`Widgets`] implementation, so the same page
//! and widgets always produce the same document.

use crate::components::render_nodes;
use crate::config::{self, SiteConfig};
use crate::content::{self, ContentNode};
use crate::toc::{TocEntry, render_toc, sidebar_entries};
use crate::types::PageDescriptor;
use crate::widgets::Widgets;
use maud::{DOCTYPE, Markup, PreEscaped, html};

const CSS_STATIC: &str = include_str!("../static/shell.css");

/// Full stylesheet: config-driven custom properties followed by the static rules.
pub fn stylesheet(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_layout_css(&config.layout),
        CSS_STATIC
    )
}

/// Render one page of the site.
///
/// `pages` is the full page set handed to the navigation widget; `current`
/// does not need to be one of its elements.
pub fn render_page(
    current: &PageDescriptor,
    pages: &[PageDescriptor],
    widgets: &dyn Widgets,
    config: &SiteConfig,
) -> Markup {
    let nodes = content::parse(&current.content);
    let outline = current.outline_from(&nodes);
    render_parsed(current, &nodes, &outline, pages, widgets, config)
}

/// Render a page whose body and outline are already computed.
pub fn render_parsed(
    current: &PageDescriptor,
    nodes: &[ContentNode],
    outline: &[TocEntry],
    pages: &[PageDescriptor],
    widgets: &dyn Widgets,
    config: &SiteConfig,
) -> Markup {
    let title = current.title(outline);

    let body = html! {
        (widgets.search())
        div.page-row {
            (widgets.nav(pages, current))
            main.page-main data-page-url=(current.url) {
                article.page-article {
                    (render_nodes(nodes, widgets))
                }
                (contents_sidebar(sidebar_entries(outline), widgets, config))
            }
        }
    };

    base_document(&title, current.description(), config, body)
}

/// Renders the base HTML document structure
fn base_document(
    title: &str,
    description: Option<&str>,
    config: &SiteConfig,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(config.lang) data-background=(config.background) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                @if let Some(description) = description {
                    meta name="description" content=(description);
                }
                style { (PreEscaped(stylesheet(config))) }
            }
            body.page {
                (content)
            }
        }
    }
}

/// Sticky sidebar with the on-page table of contents.
fn contents_sidebar(
    entries: &[TocEntry],
    widgets: &dyn Widgets,
    config: &SiteConfig,
) -> Markup {
    html! {
        aside.page-contents {
            div.contents-label { (config.contents_label) }
            (render_toc(entries))
            @if let Some(extra) = widgets.supplementary_nav() {
                (extra)
            }
        }
    }
}
