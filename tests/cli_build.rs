//! End-to-end tests for the `docs-shell` binary.
//!
//! Each test writes a source directory (pages.json, optional config.toml)
//! into a temp dir, runs the binary, and inspects stdout and the output tree.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const MANIFEST: &str = r##"{
  "pages": [
    {
      "name": "Home",
      "url": "/",
      "content": "# Welcome\n\nStart here.\n"
    },
    {
      "name": "Button",
      "url": "/Button.html",
      "exports": { "description": "Buttons allow users to perform an action." },
      "content": "# Button\n\n<PageDescription>\n\nButtons allow users to perform an action.\n\n</PageDescription>\n\n## Getting Started\n\nPress <Keyboard>Enter</Keyboard>.\n\n### Foo/Bar!! Baz\n\n## API\n"
    },
    {
      "name": "Theming",
      "url": "/guides/theming",
      "tableOfContents": [
        { "title": "Theming", "children": [{ "title": "Color schemes" }] }
      ],
      "content": "# Theming\n\n## Color schemes\n"
    }
  ]
}"##;

fn run(source: &Path, output: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_docs-shell"))
        .arg("--source")
        .arg(source)
        .arg("--output")
        .arg(output)
        .args(args)
        .output()
        .expect("failed to run docs-shell")
}

fn source_dir(manifest: &str, config: Option<&str>) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pages.json"), manifest).unwrap();
    if let Some(config) = config {
        fs::write(dir.path().join("config.toml"), config).unwrap();
    }
    dir
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn build_writes_one_document_per_page() {
    let src = source_dir(MANIFEST, None);
    let out = TempDir::new().unwrap();
    let dist = out.path().join("dist");

    let result = run(src.path(), &dist, &["build"]);
    assert!(result.status.success(), "{}", String::from_utf8_lossy(&result.stderr));

    assert!(dist.join("index.html").exists());
    assert!(dist.join("Button.html").exists());
    assert!(dist.join("guides/theming/index.html").exists());

    let text = stdout(&result);
    assert!(text.contains("002 Button \u{2192} Button.html"));
    assert!(text.contains("Generated 3 pages"));
}

#[test]
fn built_page_has_shell_and_linked_contents() {
    let src = source_dir(MANIFEST, None);
    let out = TempDir::new().unwrap();
    let result = run(src.path(), out.path(), &["build"]);
    assert!(result.status.success());

    let html = fs::read_to_string(out.path().join("Button.html")).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Button</title>"));
    assert!(html.contains(r#"<div class="contents-label">Contents</div>"#));
    assert!(html.contains(r#"<h2 class="heading-xl" id="getting-started">"#));
    assert!(html.contains(r##"href="#getting-started""##));
    assert!(html.contains(r#"<h3 class="heading" id="foobar-baz">"#));
    assert!(html.contains(r##"href="#foobar-baz""##));
    assert!(html.contains(r#"<kbd class="keyboard">Enter</kbd>"#));
    assert!(html.contains(r#"<a href="/Button.html" aria-current="page">"#));
}

#[test]
fn config_overrides_reach_the_document() {
    let src = source_dir(
        MANIFEST,
        Some("lang = \"fr\"\ncontents_label = \"Sommaire\"\n"),
    );
    let out = TempDir::new().unwrap();
    let result = run(src.path(), out.path(), &["build"]);
    assert!(result.status.success());

    let html = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(html.contains(r#"<html lang="fr""#));
    assert!(html.contains(">Sommaire</div>"));
}

#[test]
fn unknown_config_key_fails() {
    let src = source_dir(MANIFEST, Some("colour = \"red\"\n"));
    let out = TempDir::new().unwrap();
    let result = run(src.path(), out.path(), &["build"]);
    assert!(!result.status.success());
    assert!(!out.path().join("index.html").exists());
}

#[test]
fn unsafe_url_fails_build() {
    let manifest = r#"{"pages": [{"name": "Bad", "url": "/../escape.html"}]}"#;
    let src = source_dir(manifest, None);
    let out = TempDir::new().unwrap();
    let result = run(src.path(), &out.path().join("dist"), &["build"]);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("UnsafeUrl"));
    assert!(!out.path().join("escape.html").exists());
}

#[test]
fn check_prints_outline_and_warnings() {
    let manifest = r##"{"pages": [
        {"name": "Slider", "url": "/Slider.html", "content": "# Slider\n\n## Usage\n\n## Usage\n"}
    ]}"##;
    let src = source_dir(manifest, None);
    let out = TempDir::new().unwrap();
    let dist = out.path().join("dist");
    let result = run(src.path(), &dist, &["check"]);
    assert!(result.status.success());

    let text = stdout(&result);
    assert!(text.contains("001 Slider"));
    assert!(text.contains("        Slider #slider"));
    assert!(text.contains("anchor id `usage` is used by more than one heading"));
    assert!(text.contains("==> Content is valid"));
    assert!(!dist.exists());
}

#[test]
fn check_rejects_what_build_rejects() {
    for (manifest, error) in [
        (r#"{"pages": [{"name": "X", "url": "/../x.html"}]}"#, "UnsafeUrl"),
        (
            r#"{"pages": [{"name": "A", "url": "/a.html"}, {"name": "B", "url": "a.html"}]}"#,
            "DuplicateUrl",
        ),
    ] {
        let src = source_dir(manifest, None);
        let out = TempDir::new().unwrap();
        let result = run(src.path(), out.path(), &["check"]);
        assert!(!result.status.success(), "check accepted {manifest}");
        assert!(String::from_utf8_lossy(&result.stderr).contains(error));
        assert!(!stdout(&result).contains("Content is valid"));
    }
}

#[test]
fn check_missing_manifest_fails() {
    let src = TempDir::new().unwrap();
    let result = run(src.path(), src.path(), &["check"]);
    assert!(!result.status.success());
}

#[test]
fn gen_config_prints_parseable_toml() {
    let src = TempDir::new().unwrap();
    let result = run(src.path(), src.path(), &["gen-config"]);
    assert!(result.status.success());
    let text = stdout(&result);
    assert!(text.contains("contents_label"));

    // The printed file is a valid config once written back.
    fs::write(src.path().join("config.toml"), &text).unwrap();
    fs::write(src.path().join("pages.json"), r#"{"pages": []}"#).unwrap();
    let check = run(src.path(), src.path(), &["check"]);
    assert!(check.status.success(), "{}", String::from_utf8_lossy(&check.stderr));
}
