//! Shared test utilities for the docs-shell test suite.
//!
//! Builders for page descriptors and small assertion helpers over rendered
//! HTML.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let p = page_with_content("Button", "/Button.html", "# Button\n\n## Usage\n");
//! let html = render(&p, &[p.clone()]);
//! assert_contains_all(&html, &[r#"id="usage""#, r##"href="#usage""##]);
//! ```

use crate::config::SiteConfig;
use crate::shell;
use crate::types::PageDescriptor;
use crate::widgets::StockWidgets;
use std::path::Path;
use tempfile::TempDir;

// =========================================================================
// Builders
// =========================================================================

/// A page with no outline, exports, or content.
pub fn page(name: &str, url: &str) -> PageDescriptor {
    PageDescriptor {
        name: name.to_string(),
        url: url.to_string(),
        table_of_contents: None,
        exports: None,
        content: String::new(),
    }
}

/// A page whose outline will be derived from `content`.
pub fn page_with_content(name: &str, url: &str, content: &str) -> PageDescriptor {
    PageDescriptor {
        content: content.to_string(),
        ..page(name, url)
    }
}

/// Render a page with stock widgets and default config.
pub fn render(current: &PageDescriptor, pages: &[PageDescriptor]) -> String {
    let config = SiteConfig::default();
    let widgets = StockWidgets::new(&config);
    shell::render_page(current, pages, &widgets, &config).into_string()
}

/// Write a `pages.json` manifest for `pages` into a fresh temp directory.
pub fn manifest_dir(pages: &[PageDescriptor]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_manifest(tmp.path(), pages);
    tmp
}

pub fn write_manifest(dir: &Path, pages: &[PageDescriptor]) {
    let manifest = crate::types::SiteManifest {
        pages: pages.to_vec(),
    };
    let json = serde_json::to_string_pretty(&manifest).unwrap();
    std::fs::write(dir.join("pages.json"), json).unwrap();
}

// =========================================================================
// Assertions
// =========================================================================

/// Assert every needle occurs in the rendered HTML.
pub fn assert_contains_all(html: &str, needles: &[&str]) {
    for needle in needles {
        assert!(html.contains(needle), "missing {needle:?} in:\n{html}");
    }
}

/// The slice of `html` between the first `open` and the following `close`.
///
/// Panics with the document if either marker is missing.
pub fn section<'a>(html: &'a str, open: &str, close: &str) -> &'a str {
    let start = html
        .find(open)
        .unwrap_or_else(|| panic!("{open:?} not found in:\n{html}"));
    let rest = &html[start..];
    let end = rest
        .find(close)
        .unwrap_or_else(|| panic!("{close:?} not found after {open:?} in:\n{html}"));
    &rest[..end + close.len()]
}
