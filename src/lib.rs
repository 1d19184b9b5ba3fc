//! # Docs Shell
//!
//! Renders documentation pages into one shared page shell. Each page is a
//! descriptor (name, url, optional exported title, outline, markdown body);
//! the shell wraps it in the same skeleton every time: search, site
//! navigation, the rendered article, and a sticky "Contents" sidebar whose
//! links land on the article's headings.
//!
//! ```text
//! pages.json  →  PageDescriptor  →  shell::render_page  →  dist/**.html
//!                     │
//!                     ├── content::parse      markdown → ContentNode tree
//!                     ├── components          ContentNode → HTML
//!                     └── toc::render_toc     outline → nested link list
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`anchor`] | Heading text → URL-fragment-safe id |
//! | [`toc`] | Outline type, recursive TOC rendering, outline derivation |
//! | [`content`] | Markdown plus component tags → content tree |
//! | [`components`] | Content tree → HTML, one arm per node kind |
//! | [`widgets`] | Search, navigation, links, code: the collaborator seam |
//! | [`shell`] | Page skeleton and inline stylesheet |
//! | [`types`] | Page descriptors and the site manifest |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`generate`] | Manifest → files on disk |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Headings Link to Themselves
//!
//! Heading ids and TOC hrefs both come from [`anchor::anchor_id`] applied to
//! the heading's text. There is no id table to keep in sync: the same text
//! always gives the same id, so a TOC entry finds its heading as long as the
//! titles match.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time HTML
//! macro system. Malformed templates are build errors and all interpolation
//! is auto-escaped.
//!
//! ## A Closed Set of Content Nodes
//!
//! [`content::ContentNode`] is an enum and [`components::render_node`] is one
//! `match` over it. Adding a node kind is a compile error until every
//! renderer handles it.

pub mod anchor;
pub mod components;
pub mod config;
pub mod content;
pub mod generate;
pub mod output;
pub mod shell;
pub mod toc;
pub mod types;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_helpers;
