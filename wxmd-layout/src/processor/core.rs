//! Core implementation of the layout processor.
use std::path::{Path, PathBuf};

use log::{debug, trace};
use walkdir::WalkDir;

use super::types::{LayoutOptions, LayoutProcessor};
use crate::{
  assemble::splice,
  markdown::extract_title,
  platform::apply_platform_styles,
  sanitize::sanitize,
  scanner,
  types::{LayoutResult, ParsedBlock},
};

impl LayoutProcessor {
  /// Create a new `LayoutProcessor` with the given options.
  #[must_use]
  pub const fn new(options: LayoutOptions) -> Self {
    Self { options }
  }

  /// Access processor options.
  #[must_use]
  pub const fn options(&self) -> &LayoutOptions {
    &self.options
  }

  /// Locate all component blocks and dividers, sorted by position.
  #[must_use]
  pub fn scan(&self, markdown: &str) -> Vec<ParsedBlock> {
    scanner::scan(markdown)
  }

  /// Render a document: scan, splice, sanitize, then optionally apply the
  /// platform styling pass.
  #[must_use]
  pub fn render(&self, markdown: &str) -> LayoutResult {
    let blocks = self.scan(markdown);
    let dividers = blocks.iter().filter(|b| b.is_divider()).count();
    let components = blocks.len() - dividers;
    debug!("Rendering {components} components and {dividers} dividers");

    let mut html =
      sanitize(&splice(markdown, &blocks, &self.options.primary_color));
    if self.options.platform_styles {
      html = apply_platform_styles(&html, &self.options.platform_style());
    }

    LayoutResult {
      html,
      title: extract_title(&prose_only(markdown, &blocks)),
      components,
      dividers,
    }
  }
}

/// The document with every block span removed, so headings inside
/// components are not mistaken for the title.
fn prose_only(markdown: &str, blocks: &[ParsedBlock]) -> String {
  let mut out = String::with_capacity(markdown.len());
  let mut cursor = 0;
  for block in blocks {
    if block.start >= cursor {
      out.push_str(&markdown[cursor..block.start]);
      out.push('\n');
      cursor = block.end;
    }
  }
  out.push_str(&markdown[cursor..]);
  out
}

/// Collect all markdown files under `input_dir`.
pub fn collect_markdown_files(input_dir: &Path) -> Vec<PathBuf> {
  let mut files = Vec::new();

  for entry in WalkDir::new(input_dir)
    .follow_links(true)
    .into_iter()
    .filter_map(Result::ok)
  {
    let path = entry.path();
    if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
      files.push(path.to_owned());
    }
  }

  files.sort();
  trace!("Found {} markdown files to process", files.len());
  files
}

#[cfg(test)]
mod tests {
  #![allow(clippy::panic, reason = "Fine in tests")]
  use std::fs;

  use super::*;

  #[test]
  fn test_render_counts_and_title() {
    let processor = LayoutProcessor::default();
    let result = processor.render(
      "# Weekly\n\n:::card title=\"x\"\n# Not the title\n:::\n\n---style=dashed---\n",
    );
    assert_eq!(result.components, 1);
    assert_eq!(result.dividers, 1);
    assert_eq!(result.title.as_deref(), Some("Weekly"));
    assert!(result.html.starts_with("<section"));
  }

  #[test]
  fn test_render_without_platform_styles() {
    let processor = LayoutProcessor::new(
      LayoutOptions::builder().platform_styles(false).build(),
    );
    let result = processor.render("plain");
    assert_eq!(result.html.trim(), "<p>plain</p>");
    assert_eq!(result.title, None);
  }

  #[test]
  fn test_collect_markdown_files() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
    let nested = dir.path().join("nested");
    fs::create_dir_all(&nested).unwrap_or_else(|e| panic!("{e}"));
    fs::write(dir.path().join("a.md"), "# A").unwrap_or_else(|e| panic!("{e}"));
    fs::write(nested.join("b.md"), "# B").unwrap_or_else(|e| panic!("{e}"));
    fs::write(dir.path().join("c.txt"), "no").unwrap_or_else(|e| panic!("{e}"));

    let files = collect_markdown_files(dir.path());
    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| f.extension().is_some_and(|e| e == "md")));
  }
}
