//! Site generation.
//!
//! Reads a site manifest (`pages.json`), renders every page through the
//! [shell](crate::shell), and writes one HTML document per page.
//!
//! ## Manifest
//!
//! ```json
//! {
//!   "pages": [
//!     {
//!       "name": "Button",
//!       "url": "/Button.html",
//!       "exports": { "title": "Button" },
//!       "tableOfContents": [{ "title": "Button", "children": [{ "title": "Usage" }] }],
//!       "content": "# Button\n\n## Usage\n..."
//!     }
//!   ]
//! }
//! ```
//!
//! The manifest is produced elsewhere; page order is navigation order.
//!
//! ## Output Paths
//!
//! | URL | File |
//! |-----|------|
//! | `/` | `index.html` |
//! | `/Button.html` | `Button.html` |
//! | `/guides/` | `guides/index.html` |
//! | `/guides/theming` | `guides/theming/index.html` |
//!
//! URLs with `..` segments and duplicate URLs are rejected before anything is
//! written.

use crate::anchor::duplicate_anchor_ids;
use crate::config::SiteConfig;
use crate::content;
use crate::shell;
use crate::types::{PageDescriptor, SiteManifest};
use crate::widgets::{StockWidgets, Widgets};
use log::{debug, warn};
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Page URL escapes the output directory: {0}")]
    UnsafeUrl(String),
    #[error("Duplicate page URL: {0}")]
    DuplicateUrl(String),
}

/// A rendered page ready to be written.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub name: String,
    pub title: String,
    pub url: String,
    /// Output path relative to the output directory.
    pub path: PathBuf,
    pub html: String,
}

/// Read and parse a `pages.json` manifest.
pub fn load_manifest(path: &Path) -> Result<SiteManifest, GenerateError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Map a page URL to its file path relative to the output directory.
pub fn output_path_for_url(url: &str) -> Result<PathBuf, GenerateError> {
    let trimmed = url.trim_start_matches('/');
    let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
    if segments.iter().any(|s| *s == ".." || *s == "." || s.contains('\\')) {
        return Err(GenerateError::UnsafeUrl(url.to_string()));
    }

    let mut path: PathBuf = segments.iter().collect();
    let is_dir = trimmed.is_empty() || trimmed.ends_with('/');
    let is_html = segments.last().is_some_and(|s| s.ends_with(".html"));
    if is_dir || !is_html {
        path.push("index.html");
    }
    Ok(path)
}

/// Map every page URL to its output path.
///
/// Fails on the first URL that escapes the output directory or that maps to
/// a path an earlier page already claimed. Nothing is rendered or written.
pub fn validate_urls(manifest: &SiteManifest) -> Result<Vec<PathBuf>, GenerateError> {
    let mut seen = HashSet::new();
    let mut paths = Vec::with_capacity(manifest.pages.len());
    for page in &manifest.pages {
        let path = output_path_for_url(&page.url)?;
        if !seen.insert(path.clone()) {
            return Err(GenerateError::DuplicateUrl(page.url.clone()));
        }
        paths.push(path);
    }
    Ok(paths)
}

/// Render every page of a manifest.
///
/// Pages are rendered in parallel; the result keeps manifest order.
pub fn render_site(
    manifest: &SiteManifest,
    widgets: &dyn Widgets,
    config: &SiteConfig,
) -> Result<Vec<RenderedPage>, GenerateError> {
    let paths = validate_urls(manifest)?;
    let pages = &manifest.pages;
    Ok(pages
        .par_iter()
        .zip(paths)
        .map(|(page, path)| render_one(page, pages, path, widgets, config))
        .collect())
}

fn render_one(
    page: &PageDescriptor,
    pages: &[PageDescriptor],
    path: PathBuf,
    widgets: &dyn Widgets,
    config: &SiteConfig,
) -> RenderedPage {
    let nodes = content::parse(&page.content);
    let outline = page.outline_from(&nodes);
    for id in duplicate_anchor_ids(&outline) {
        warn!("{}: anchor id `{}` is used by more than one heading", page.url, id);
    }
    let title = page.title(&outline);
    let html = shell::render_parsed(page, &nodes, &outline, pages, widgets, config).into_string();
    debug!("rendered {} -> {}", page.url, path.display());
    RenderedPage {
        name: page.name.clone(),
        title,
        url: page.url.clone(),
        path,
        html,
    }
}

/// Render the manifest at `manifest_path` with stock widgets and write the
/// documents under `output_dir`.
pub fn generate(
    manifest_path: &Path,
    output_dir: &Path,
    config: &SiteConfig,
) -> Result<Vec<RenderedPage>, GenerateError> {
    let manifest = load_manifest(manifest_path)?;
    let widgets = StockWidgets::new(config);
    let rendered = render_site(&manifest, &widgets, config)?;

    fs::create_dir_all(output_dir)?;
    for page in &rendered {
        let target = output_dir.join(&page.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, &page.html)?;
    }
    Ok(rendered)
}
