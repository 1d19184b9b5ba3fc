//! Page data consumed by the shell.
//!
//! These shapes are produced outside this crate (by whatever discovers pages
//! and extracts their metadata) and handed over as JSON. The shell only reads
//! them. Field names follow the producer's camelCase convention.

use crate::content::{self, ContentNode};
use crate::toc::TocEntry;
use serde::{Deserialize, Serialize};

/// Metadata a page exports about itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageExports {
    /// Explicit document title; wins over every other title source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Emitted as `<meta name="description">` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One documentation page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDescriptor {
    /// Page name, e.g. `Button`. Last resort for the document title.
    pub name: String,
    /// Site-absolute URL, e.g. `/Button.html`.
    pub url: String,
    /// Heading outline. `None` means the producer supplied none and the
    /// outline is derived from the content's headings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_of_contents: Option<Vec<TocEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exports: Option<PageExports>,
    /// Markdown source of the page body.
    #[serde(default)]
    pub content: String,
}

impl PageDescriptor {
    /// The page outline, deriving it from the content when none was supplied.
    pub fn outline(&self) -> Vec<TocEntry> {
        match &self.table_of_contents {
            Some(toc) => toc.clone(),
            None => content::outline(&content::parse(&self.content)),
        }
    }

    /// Same as [`outline`](Self::outline) for a body that is already parsed.
    pub fn outline_from(&self, nodes: &[ContentNode]) -> Vec<TocEntry> {
        match &self.table_of_contents {
            Some(toc) => toc.clone(),
            None => content::outline(nodes),
        }
    }

    /// Resolve the document title.
    ///
    /// First match wins: exported title, then the first top-level outline
    /// entry, then the page name.
    pub fn title(&self, outline: &[TocEntry]) -> String {
        self.exports
            .as_ref()
            .and_then(|e| e.title.clone())
            .or_else(|| outline.first().map(|entry| entry.title.clone()))
            .unwrap_or_else(|| self.name.clone())
    }

    pub fn description(&self) -> Option<&str> {
        self.exports.as_ref()?.description.as_deref()
    }
}

/// The full page set of a site, in navigation order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteManifest {
    pub pages: Vec<PageDescriptor>,
}
