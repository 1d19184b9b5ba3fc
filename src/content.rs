//! Page content tree.
//!
//! A page body is markdown. [`parse`] turns it into a tree of
//! [`ContentNode`]s, a closed set of kinds that the component mapping in
//! [`crate::components`] renders one by one.
//!
//! ## Component tags
//!
//! Three documentation components have no markdown syntax of their own and
//! are written as HTML-style tags, the way MDX-flavoured docs write them:
//!
//! ```markdown
//! <PageDescription>
//!
//! Buttons allow users to perform an action.
//!
//! </PageDescription>
//!
//! <VisualExample component="Button" variant="accent" />
//!
//! Press <Keyboard>Enter</Keyboard> (or <kbd>Space</kbd>) to activate.
//! ```
//!
//! `PageDescription` may wrap blocks (tags on their own lines, blank lines
//! around them) or sit on a single line around inline text.
//! `VisualExample` may spread its attributes over several lines. A paragraph
//! that holds nothing but one of these two becomes that component.
//! `Keyboard`/`kbd` are inline.
//!
//! Only CommonMark is parsed; extensions such as tables stay plain text. Any
//! construct outside the node set is flattened: its children land in the
//! enclosing node. Parsing never fails; unbalanced component tags fall back
//! to raw HTML.

use crate::toc::{TocEntry, outline_from_headings};
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Parser, Tag, TagEnd};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// One node of a page's content tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentNode {
    Heading {
        level: u8,
        children: Vec<ContentNode>,
    },
    Paragraph(Vec<ContentNode>),
    List {
        /// Start number for ordered lists, `None` for bullet lists.
        start: Option<u64>,
        items: Vec<ContentNode>,
    },
    ListItem(Vec<ContentNode>),
    CodeBlock {
        lang: Option<String>,
        code: String,
    },
    InlineCode(String),
    Strong(Vec<ContentNode>),
    Emphasis(Vec<ContentNode>),
    Link {
        href: String,
        title: String,
        children: Vec<ContentNode>,
    },
    Image {
        src: String,
        alt: String,
        title: String,
    },
    BlockQuote(Vec<ContentNode>),
    Keyboard(String),
    PageDescription(Vec<ContentNode>),
    VisualExample(BTreeMap<String, String>),
    Text(String),
    SoftBreak,
    HardBreak,
    Rule,
    Html(String),
}

/// Open container while events are being folded into a tree.
enum Frame {
    Heading(u8),
    Paragraph,
    List(Option<u64>),
    ListItem,
    CodeBlock(Option<String>, String),
    Strong,
    Emphasis,
    Link { href: String, title: String },
    Image { src: String, title: String },
    BlockQuote,
    Keyboard,
    HtmlBlock(String),
    PageDescription,
    /// A component tag split across inline events, collected until it closes.
    PendingTag(String),
    /// Unsupported construct; children are spliced into the parent.
    Transparent,
}

static VISUAL_EXAMPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^<VisualExample\b(.*?)/>$").expect("valid regex"));
static ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([A-Za-z_][\w-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid regex"));

/// Parse a markdown page body into its content tree.
pub fn parse(markdown: &str) -> Vec<ContentNode> {
    let mut builder = TreeBuilder::default();
    for event in Parser::new(markdown) {
        builder.event(event);
    }
    builder.finish()
}

/// Concatenated text of a node list, as used for heading ids and outlines.
///
/// Inline code and keyboard keys contribute their text; breaks become a
/// single space; raw HTML contributes nothing.
pub fn plain_text(nodes: &[ContentNode]) -> String {
    let mut out = String::new();
    push_plain_text(nodes, &mut out);
    out
}

fn push_plain_text(nodes: &[ContentNode], out: &mut String) {
    for node in nodes {
        match node {
            ContentNode::Text(t) | ContentNode::InlineCode(t) | ContentNode::Keyboard(t) => {
                out.push_str(t)
            }
            ContentNode::SoftBreak | ContentNode::HardBreak => out.push(' '),
            ContentNode::Image { alt, .. } => out.push_str(alt),
            ContentNode::CodeBlock { code, .. } => out.push_str(code),
            ContentNode::Heading { children, .. }
            | ContentNode::Paragraph(children)
            | ContentNode::ListItem(children)
            | ContentNode::Strong(children)
            | ContentNode::Emphasis(children)
            | ContentNode::Link { children, .. }
            | ContentNode::BlockQuote(children)
            | ContentNode::PageDescription(children) => push_plain_text(children, out),
            ContentNode::List { items, .. } => push_plain_text(items, out),
            ContentNode::VisualExample(_) | ContentNode::Rule | ContentNode::Html(_) => {}
        }
    }
}

/// Every heading in document order, as `(level, plain text)`.
pub fn headings(nodes: &[ContentNode]) -> Vec<(u8, String)> {
    let mut found = Vec::new();
    collect_headings(nodes, &mut found);
    found
}

fn collect_headings(nodes: &[ContentNode], found: &mut Vec<(u8, String)>) {
    for node in nodes {
        match node {
            ContentNode::Heading { level, children } => {
                found.push((*level, plain_text(children)));
            }
            ContentNode::ListItem(children)
            | ContentNode::BlockQuote(children)
            | ContentNode::PageDescription(children) => collect_headings(children, found),
            ContentNode::List { items, .. } => collect_headings(items, found),
            _ => {}
        }
    }
}

/// Outline of a content tree built from its headings.
pub fn outline(nodes: &[ContentNode]) -> Vec<TocEntry> {
    outline_from_headings(&headings(nodes))
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[derive(Default)]
struct TreeBuilder {
    root: Vec<ContentNode>,
    stack: Vec<(Frame, Vec<ContentNode>)>,
}

impl TreeBuilder {
    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.push(ContentNode::InlineCode(code.into_string())),
            Event::Html(html) => self.html(&html),
            Event::InlineHtml(html) => self.inline_html(&html),
            Event::SoftBreak => {
                if !self.extend_pending_tag("\n") {
                    self.push(ContentNode::SoftBreak)
                }
            }
            Event::HardBreak => self.push(ContentNode::HardBreak),
            Event::Rule => self.push(ContentNode::Rule),
            Event::InlineMath(math) | Event::DisplayMath(math) => {
                self.push(ContentNode::Text(math.into_string()))
            }
            Event::FootnoteReference(_) | Event::TaskListMarker(_) => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        let frame = match tag {
            Tag::Heading { level, .. } => Frame::Heading(heading_level(level)),
            Tag::Paragraph => Frame::Paragraph,
            Tag::List(start) => Frame::List(start),
            Tag::Item => Frame::ListItem,
            Tag::CodeBlock(kind) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .map(str::to_string),
                    CodeBlockKind::Indented => None,
                };
                Frame::CodeBlock(lang, String::new())
            }
            Tag::Strong => Frame::Strong,
            Tag::Emphasis => Frame::Emphasis,
            Tag::Link {
                dest_url, title, ..
            } => Frame::Link {
                href: dest_url.into_string(),
                title: title.into_string(),
            },
            Tag::Image {
                dest_url, title, ..
            } => Frame::Image {
                src: dest_url.into_string(),
                title: title.into_string(),
            },
            Tag::BlockQuote(_) => Frame::BlockQuote,
            Tag::HtmlBlock => Frame::HtmlBlock(String::new()),
            _ => Frame::Transparent,
        };
        self.stack.push((frame, Vec::new()));
    }

    fn end(&mut self, _tag: TagEnd) {
        // pulldown-cmark balances its own events; only component frames opened
        // from HTML can sit above the closing one, and they close with it.
        while let Some((frame, children)) = self.stack.pop() {
            let component = matches!(
                frame,
                Frame::Keyboard | Frame::PageDescription | Frame::PendingTag(_)
            );
            self.close(frame, children);
            if !component {
                break;
            }
        }
    }

    fn close(&mut self, frame: Frame, children: Vec<ContentNode>) {
        let node = match frame {
            Frame::Heading(level) => ContentNode::Heading { level, children },
            Frame::Paragraph => match lift_component(children) {
                Ok(component) => component,
                Err(children) => ContentNode::Paragraph(children),
            },
            Frame::List(start) => ContentNode::List {
                start,
                items: children,
            },
            Frame::ListItem => ContentNode::ListItem(children),
            Frame::CodeBlock(lang, code) => ContentNode::CodeBlock { lang, code },
            Frame::Strong => ContentNode::Strong(children),
            Frame::Emphasis => ContentNode::Emphasis(children),
            Frame::Link { href, title } => ContentNode::Link {
                href,
                title,
                children,
            },
            Frame::Image { src, title } => ContentNode::Image {
                src,
                alt: plain_text(&children),
                title,
            },
            Frame::BlockQuote => ContentNode::BlockQuote(children),
            Frame::Keyboard => ContentNode::Keyboard(plain_text(&children)),
            Frame::PageDescription => ContentNode::PageDescription(children),
            Frame::PendingTag(raw) => ContentNode::Html(raw),
            Frame::HtmlBlock(raw) => {
                self.html_block(raw);
                return;
            }
            Frame::Transparent => {
                for child in children {
                    self.push(child);
                }
                return;
            }
        };
        self.push(node);
    }

    fn push(&mut self, node: ContentNode) {
        match self.stack.last_mut() {
            Some((_, children)) => children.push(node),
            None => self.root.push(node),
        }
    }

    fn text(&mut self, text: &str) {
        if let Some((Frame::CodeBlock(_, code), _)) = self.stack.last_mut() {
            code.push_str(text);
            return;
        }
        if self.extend_pending_tag(text) {
            return;
        }
        // Adjacent text events (split around entities) are merged.
        if let Some(ContentNode::Text(prev)) = self.current_children().last_mut() {
            prev.push_str(text);
            return;
        }
        self.push(ContentNode::Text(text.to_string()));
    }

    fn current_children(&mut self) -> &mut Vec<ContentNode> {
        match self.stack.last_mut() {
            Some((_, children)) => children,
            None => &mut self.root,
        }
    }

    fn html(&mut self, html: &str) {
        if let Some((Frame::HtmlBlock(raw), _)) = self.stack.last_mut() {
            raw.push_str(html);
        } else {
            self.push(ContentNode::Html(html.to_string()));
        }
    }

    /// Interpret a finished HTML block: component tag or raw HTML.
    fn html_block(&mut self, raw: String) {
        let tag = raw.trim();
        if tag == "<PageDescription>" {
            self.stack.push((Frame::PageDescription, Vec::new()));
        } else if tag == "</PageDescription>" && self.has_open(|f| matches!(f, Frame::PageDescription))
        {
            self.close_through(|f| matches!(f, Frame::PageDescription));
        } else if let Some(attrs) = VISUAL_EXAMPLE
            .captures(tag)
            .map(|caps| parse_attributes(&caps[1]))
        {
            self.push(ContentNode::VisualExample(attrs));
        } else {
            self.push(ContentNode::Html(raw));
        }
    }

    fn inline_html(&mut self, html: &str) {
        if self.extend_pending_tag(html) {
            return;
        }
        match html.trim() {
            "<kbd>" | "<Keyboard>" => self.stack.push((Frame::Keyboard, Vec::new())),
            "</kbd>" | "</Keyboard>" if matches!(self.stack.last(), Some((Frame::Keyboard, _))) => {
                if let Some((frame, children)) = self.stack.pop() {
                    self.close(frame, children);
                }
            }
            "<PageDescription>" => self.stack.push((Frame::PageDescription, Vec::new())),
            "</PageDescription>" if self.has_open(|f| matches!(f, Frame::PageDescription)) => {
                self.close_through(|f| matches!(f, Frame::PageDescription));
            }
            tag if tag.starts_with("<VisualExample") => {
                if let Some(attrs) = VISUAL_EXAMPLE
                    .captures(tag)
                    .map(|caps| parse_attributes(&caps[1]))
                {
                    self.push(ContentNode::VisualExample(attrs));
                } else if !tag.contains('>') {
                    self.stack.push((Frame::PendingTag(html.to_string()), Vec::new()));
                } else {
                    self.push(ContentNode::Html(html.to_string()));
                }
            }
            _ => self.push(ContentNode::Html(html.to_string())),
        }
    }

    /// Append to an open pending tag, closing it once the tag is complete.
    ///
    /// Returns `false` when no pending tag is open.
    fn extend_pending_tag(&mut self, piece: &str) -> bool {
        let Some((Frame::PendingTag(raw), _)) = self.stack.last_mut() else {
            return false;
        };
        raw.push_str(piece);
        if let Some(attrs) = VISUAL_EXAMPLE
            .captures(raw.trim())
            .map(|caps| parse_attributes(&caps[1]))
        {
            self.stack.pop();
            self.push(ContentNode::VisualExample(attrs));
        }
        true
    }

    fn has_open(&self, pred: impl Fn(&Frame) -> bool) -> bool {
        self.stack.iter().any(|(frame, _)| pred(frame))
    }

    /// Close frames from the top down to and including the first match.
    fn close_through(&mut self, pred: impl Fn(&Frame) -> bool) {
        while let Some((frame, children)) = self.stack.pop() {
            let done = pred(&frame);
            self.close(frame, children);
            if done {
                break;
            }
        }
    }

    fn finish(mut self) -> Vec<ContentNode> {
        // Unclosed component frames (a missing `</PageDescription>`, a
        // dangling `<kbd>`) are closed at end of input.
        while let Some((frame, children)) = self.stack.pop() {
            self.close(frame, children);
        }
        self.root
    }
}

/// A paragraph holding nothing but one block component is that component.
fn lift_component(children: Vec<ContentNode>) -> Result<ContentNode, Vec<ContentNode>> {
    let is_blank = |node: &ContentNode| match node {
        ContentNode::Text(t) => t.trim().is_empty(),
        ContentNode::SoftBreak | ContentNode::HardBreak => true,
        _ => false,
    };
    let mut significant = children.iter().filter(|node| !is_blank(node));
    let single = match (significant.next(), significant.next()) {
        (
            Some(ContentNode::PageDescription(_) | ContentNode::VisualExample(_)),
            None,
        ) => true,
        _ => false,
    };
    if !single {
        return Err(children);
    }
    children
        .into_iter()
        .find(|node| !is_blank(node))
        .ok_or_else(Vec::new)
}

/// `name="value"` pairs from a component tag's attribute text.
fn parse_attributes(text: &str) -> BTreeMap<String, String> {
    ATTRIBUTE
        .captures_iter(text)
        .map(|caps| {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            (caps[1].to_string(), value)
        })
        .collect()
}
