//! Collaborator widgets composed by the page shell.
//!
//! The shell decides where things go; widgets decide what they look like.
//! [`Widgets`] is the seam: search box, site navigation, links, code, and
//! visual examples are all rendered through it, so a site can swap in
//! highlighted code or a live component preview without touching the shell.
//!
//! [`StockWidgets`] is the implementation the CLI uses: plain, accessible
//! HTML with no client-side behavior.

use crate::config::SiteConfig;
use crate::types::PageDescriptor;
use maud::{Markup, html};
use std::collections::BTreeMap;

/// Components the shell and the content mapping delegate to.
///
/// `Sync` so pages can be rendered in parallel against one widget set.
pub trait Widgets: Sync {
    /// Search box at the top of the page.
    fn search(&self) -> Markup;

    /// Site navigation over the full page set, marking `current`.
    fn nav(&self, pages: &[PageDescriptor], current: &PageDescriptor) -> Markup;

    /// A link in prose. `children` is the already-rendered label.
    fn link(&self, href: &str, title: &str, children: Markup) -> Markup;

    /// A fenced or indented code block.
    fn code_block(&self, lang: Option<&str>, code: &str) -> Markup;

    /// Inline code span.
    fn inline_code(&self, code: &str) -> Markup;

    /// A visual component example, configured by the tag's attributes.
    fn visual_example(&self, attrs: &BTreeMap<String, String>) -> Markup;

    /// Extra navigation below the table of contents. The slot is reserved;
    /// nothing is rendered unless a widget set fills it.
    fn supplementary_nav(&self) -> Option<Markup> {
        None
    }
}

/// Plain HTML widgets driven by [`SiteConfig`].
#[derive(Debug, Clone)]
pub struct StockWidgets {
    search_action: String,
    search_placeholder: String,
}

impl StockWidgets {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            search_action: config.search.action.clone(),
            search_placeholder: config.search.placeholder.clone(),
        }
    }
}

/// Links leaving the site open in a new tab.
fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://") || href.starts_with("//")
}

impl Widgets for StockWidgets {
    fn search(&self) -> Markup {
        html! {
            search.site-search {
                form role="search" action=(self.search_action) method="get" {
                    input type="search" name="q" placeholder=(self.search_placeholder)
                        aria-label=(self.search_placeholder);
                }
            }
        }
    }

    fn nav(&self, pages: &[PageDescriptor], current: &PageDescriptor) -> Markup {
        html! {
            nav.site-nav aria-label="Pages" {
                ul {
                    @for page in pages {
                        @let is_current = page.url == current.url;
                        li class=[is_current.then_some("current")] {
                            a href=(page.url) aria-current=[is_current.then_some("page")] {
                                (page.name)
                            }
                        }
                    }
                }
            }
        }
    }

    fn link(&self, href: &str, title: &str, children: Markup) -> Markup {
        let title = (!title.is_empty()).then_some(title);
        html! {
            @if is_external(href) {
                a.link href=(href) title=[title] target="_blank" rel="noopener" { (children) }
            } @else {
                a.link href=(href) title=[title] { (children) }
            }
        }
    }

    fn code_block(&self, lang: Option<&str>, code: &str) -> Markup {
        let class = lang.map(|l| format!("language-{l}"));
        html! {
            pre.example data-lang=[lang] {
                code class=[class] { (code) }
            }
        }
    }

    fn inline_code(&self, code: &str) -> Markup {
        html! { code.code { (code) } }
    }

    fn visual_example(&self, attrs: &BTreeMap<String, String>) -> Markup {
        let component = attrs.get("component").map(String::as_str);
        html! {
            figure.visual-example data-component=[component] {
                @if let Some(name) = component {
                    figcaption { (name) }
                }
                @if !attrs.is_empty() {
                    dl.visual-example-props {
                        @for (name, value) in attrs {
                            @if name != "component" {
                                dt { (name) }
                                dd { code { (value) } }
                            }
                        }
                    }
                }
            }
        }
    }
}
