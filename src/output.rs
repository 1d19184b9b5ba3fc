//! CLI output formatting.
//!
//! Output is **information-centric, not file-centric**. Each page leads with
//! its positional index and resolved title; URLs, outlines, and output paths
//! are indented context lines underneath.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Pages
//! 001 Button
//!     Url: /Button.html
//!     Description: Buttons allow users to perform an action.
//!     Outline:
//!         Button #button
//!             Getting Started #getting-started
//!             API #api
//! 002 Slider
//!     Url: /Slider.html
//!     Outline:
//!         Slider #slider
//!             Usage #usage
//!             Usage #usage
//!     Warning: anchor id `usage` is used by more than one heading
//!
//! Checked 2 pages, 1 warning
//! ```
//!
//! ## Build
//!
//! ```text
//! 001 Button → Button.html
//! 002 Theming → guides/theming/index.html
//!
//! Generated 2 pages
//! ```
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::anchor::{anchor_id, duplicate_anchor_ids};
use crate::generate::RenderedPage;
use crate::toc::TocEntry;
use crate::types::SiteManifest;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        None => text.to_string(),
        Some((byte, _)) => format!("{}...", &text[..byte]),
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// Outline entries with their anchor ids, one line per entry.
fn outline_lines(entries: &[TocEntry], depth: usize, lines: &mut Vec<String>) {
    for entry in entries {
        lines.push(format!(
            "{}{} #{}",
            indent(depth),
            entry.title,
            anchor_id(&entry.title)
        ));
        outline_lines(&entry.children, depth + 1, lines);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format `check` output: every page with its resolved title and outline.
///
/// Duplicate anchor ids are reported per page; they are never rewritten.
pub fn format_check_output(manifest: &SiteManifest) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    let mut warnings = 0;

    for (i, page) in manifest.pages.iter().enumerate() {
        let outline = page.outline();
        lines.push(format!("{} {}", format_index(i + 1), page.title(&outline)));
        lines.push(format!("{}Url: {}", indent(1), page.url));
        if let Some(desc) = page.description() {
            lines.push(format!(
                "{}Description: {}",
                indent(1),
                truncate_desc(desc, 60)
            ));
        }
        if outline.is_empty() {
            lines.push(format!("{}Outline: (none)", indent(1)));
        } else {
            lines.push(format!("{}Outline:", indent(1)));
            outline_lines(&outline, 2, &mut lines);
        }
        for id in duplicate_anchor_ids(&outline) {
            lines.push(format!(
                "{}Warning: anchor id `{}` is used by more than one heading",
                indent(1),
                id
            ));
            warnings += 1;
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Checked {}, {}",
        plural(manifest.pages.len(), "page"),
        plural(warnings, "warning")
    ));
    lines
}

/// Print check output to stdout.
pub fn print_check_output(manifest: &SiteManifest) {
    for line in format_check_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

/// Format build output: each page's title and the file it was written to.
pub fn format_generate_output(pages: &[RenderedPage]) -> Vec<String> {
    let mut lines: Vec<String> = pages
        .iter()
        .enumerate()
        .map(|(i, page)| {
            format!(
                "{} {} \u{2192} {}",
                format_index(i + 1),
                page.title,
                page.path.display()
            )
        })
        .collect();
    lines.push(String::new());
    lines.push(format!("Generated {}", plural(pages.len(), "page")));
    lines
}

/// Print build output to stdout.
pub fn print_generate_output(pages: &[RenderedPage]) {
    for line in format_generate_output(pages) {
        println!("{}", line);
    }
}
