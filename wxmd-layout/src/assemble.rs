//! Document assembler.
//!
//! Walks the scanned blocks in source order, rendering the prose between
//! them with the base Markdown renderer and splicing in each block's HTML
//! verbatim. The concatenation is sanitized once at the end.
use log::trace;

use crate::{
  color::PrimaryColor,
  markdown::render_markdown,
  render::render_block,
  sanitize::sanitize,
  scanner::scan,
  types::ParsedBlock,
};

/// Render `markdown` with layout components to sanitized HTML.
///
/// ```
/// use wxmd_layout::{assemble::assemble, color::PrimaryColor};
///
/// let html = assemble("# Title\n\n:::tip\nHi\n:::\n", &PrimaryColor::default());
/// assert!(html.contains("<h1>Title</h1>"));
/// assert!(html.contains("border-left: 4px solid #1890ff"));
/// ```
#[must_use]
pub fn assemble(markdown: &str, primary: &PrimaryColor) -> String {
  let blocks = scan(markdown);
  sanitize(&splice(markdown, &blocks, primary))
}

/// Interleave rendered prose and rendered blocks without sanitizing.
///
/// `blocks` must be sorted by start offset and non-overlapping, as returned
/// by [`scan`].
#[must_use]
pub fn splice(
  markdown: &str,
  blocks: &[ParsedBlock],
  primary: &PrimaryColor,
) -> String {
  let mut out = String::with_capacity(markdown.len() * 2);
  let mut cursor = 0;

  for block in blocks {
    if block.start < cursor {
      trace!(
        "Skipping overlapping block '{}' at {}",
        block.block_type, block.start
      );
      continue;
    }
    push_prose(&mut out, &markdown[cursor..block.start]);
    out.push_str(&render_block(block, primary));
    cursor = block.end;
  }

  push_prose(&mut out, &markdown[cursor..]);
  out
}

/// Render a prose gap. Whitespace-only gaps are copied verbatim so they do
/// not turn into empty paragraphs.
fn push_prose(out: &mut String, segment: &str) {
  if segment.trim().is_empty() {
    out.push_str(segment);
  } else {
    out.push_str(&render_markdown(segment));
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn assemble_default(markdown: &str) -> String {
    assemble(markdown, &PrimaryColor::default())
  }

  #[test]
  fn test_plain_document_matches_base_renderer() {
    let doc = "# Hi\n\nSome *text*.\n\n- a\n- b\n";
    assert_eq!(assemble_default(doc), sanitize(&render_markdown(doc)));
  }

  #[test]
  fn test_components_are_not_rendered_twice() {
    let html = assemble_default("before\n\n:::card\n**x**\n:::\n\nafter");
    assert_eq!(html.matches("<strong>x</strong>").count(), 1);
    assert!(!html.contains("&lt;div"));
    assert!(!html.contains(":::"));
  }

  #[test]
  fn test_splice_keeps_whitespace_gaps_verbatim() {
    let blocks = scan(":::spacer\n:::\n\n:::spacer\n:::");
    let html = splice(
      ":::spacer\n:::\n\n:::spacer\n:::",
      &blocks,
      &PrimaryColor::default(),
    );
    assert!(html.contains("</div>\n\n<div"));
    assert!(!html.contains("<p>"));
  }

  #[test]
  fn test_unterminated_block_is_plain_text() {
    let html = assemble_default(":::tip\nnot closed");
    assert!(html.contains(":::tip"));
    assert!(!html.contains("data-wechat-layout"));
  }
}
