//! Content node → HTML mapping.
//!
//! The mapping is a single `match` over [`ContentNode`]: the set of kinds is
//! closed, so there is no registry to extend. Class names carry the
//! typographic role of each element; the stylesheet gives them their look.
//!
//! | Node | Element | Notes |
//! |------|---------|-------|
//! | Heading 1 | `h1.heading-3xl` | no id; it is the page title |
//! | Heading 2–4 | `h2.heading-xl`, `h3.heading`, `h4.heading-sm` | `id` from [`anchor_id`] |
//! | Heading 5–6 | `h5`, `h6` | no id |
//! | Paragraph | `p.body-lg` | |
//! | List / item | `ul`/`ol`, `li.list-item` | |
//! | Strong / Emphasis | `strong.strong`, `em` | |
//! | Keyboard | `kbd.keyboard` | |
//! | Image | `img.image` | inline, lazy-loaded |
//! | PageDescription | `p.page-description` | paragraphs are unwrapped into it |
//! | Code, links, visual examples | via [`Widgets`] | |

use crate::anchor::anchor_id;
use crate::content::{ContentNode, plain_text};
use crate::widgets::Widgets;
use maud::{Markup, PreEscaped, html};

/// Render a list of content nodes.
pub fn render_nodes(nodes: &[ContentNode], widgets: &dyn Widgets) -> Markup {
    html! {
        @for node in nodes {
            (render_node(node, widgets))
        }
    }
}

/// Render a single content node.
pub fn render_node(node: &ContentNode, widgets: &dyn Widgets) -> Markup {
    match node {
        ContentNode::Heading { level, children } => render_heading(*level, children, widgets),
        ContentNode::Paragraph(children) => html! {
            p.body-lg { (render_nodes(children, widgets)) }
        },
        ContentNode::List { start, items } => match start {
            Some(1) => html! { ol { (render_nodes(items, widgets)) } },
            Some(n) => html! { ol start=(n) { (render_nodes(items, widgets)) } },
            None => html! { ul { (render_nodes(items, widgets)) } },
        },
        ContentNode::ListItem(children) => html! {
            li.list-item { (render_nodes(children, widgets)) }
        },
        ContentNode::CodeBlock { lang, code } => widgets.code_block(lang.as_deref(), code),
        ContentNode::InlineCode(code) => widgets.inline_code(code),
        ContentNode::Strong(children) => html! {
            strong.strong { (render_nodes(children, widgets)) }
        },
        ContentNode::Emphasis(children) => html! {
            em { (render_nodes(children, widgets)) }
        },
        ContentNode::Link {
            href,
            title,
            children,
        } => widgets.link(href, title, render_nodes(children, widgets)),
        ContentNode::Image { src, alt, title } => {
            let title = (!title.is_empty()).then_some(title.as_str());
            html! {
                img.image src=(src) alt=(alt) title=[title] loading="lazy";
            }
        }
        ContentNode::BlockQuote(children) => html! {
            blockquote { (render_nodes(children, widgets)) }
        },
        ContentNode::Keyboard(keys) => html! { kbd.keyboard { (keys) } },
        ContentNode::PageDescription(children) => html! {
            p.page-description { (render_description(children, widgets)) }
        },
        ContentNode::VisualExample(attrs) => widgets.visual_example(attrs),
        ContentNode::Text(text) => html! { (text) },
        ContentNode::SoftBreak => html! { " " },
        ContentNode::HardBreak => html! { br; },
        ContentNode::Rule => html! { hr; },
        ContentNode::Html(raw) => html! { (PreEscaped(raw)) },
    }
}

fn render_heading(level: u8, children: &[ContentNode], widgets: &dyn Widgets) -> Markup {
    let body = render_nodes(children, widgets);
    match level {
        1 => html! { h1."heading-3xl" { (body) } },
        2 => html! { h2.heading-xl id=(anchor_id(&plain_text(children))) { (body) } },
        3 => html! { h3.heading id=(anchor_id(&plain_text(children))) { (body) } },
        4 => html! { h4.heading-sm id=(anchor_id(&plain_text(children))) { (body) } },
        5 => html! { h5 { (body) } },
        _ => html! { h6 { (body) } },
    }
}

/// A page description is a single paragraph; nested paragraphs are unwrapped
/// so the output never nests `<p>` elements.
fn render_description(children: &[ContentNode], widgets: &dyn Widgets) -> Markup {
    html! {
        @for (i, child) in children.iter().enumerate() {
            @if i > 0 && matches!(child, ContentNode::Paragraph(_)) { " " }
            @match child {
                ContentNode::Paragraph(inline) => { (render_nodes(inline, widgets)) }
                other => { (render_node(other, widgets)) }
            }
        }
    }
}
