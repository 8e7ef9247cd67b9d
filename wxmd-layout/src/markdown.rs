//! Base Markdown renderer backed by comrak.
//!
//! GitHub-flavored extensions are on, single newlines become `<br>`, and raw
//! HTML passes through; the sanitizer runs over the assembled document
//! afterwards.
use comrak::{
  Arena,
  nodes::{AstNode, NodeHeading, NodeValue},
  options::Options,
  parse_document,
};

/// Title used when a document has no level-1 heading.
pub const UNTITLED: &str = "Untitled";

fn comrak_options() -> Options<'static> {
  let mut options = Options::default();
  options.extension.table = true;
  options.extension.strikethrough = true;
  options.extension.tasklist = true;
  options.extension.autolink = true;
  options.render.hardbreaks = true;
  options.render.r#unsafe = true;
  options
}

/// Render a Markdown fragment to HTML.
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
  let arena = Arena::new();
  let options = comrak_options();
  let root = parse_document(&arena, markdown, &options);

  let mut html = String::new();
  comrak::format_html(root, &options, &mut html).unwrap_or_default();
  html
}

/// Render a single line of Markdown for use inside a table cell or inline
/// container. A lone wrapping paragraph is removed; anything else (lists,
/// headings, several paragraphs) is returned as rendered.
#[must_use]
pub fn render_inline(markdown: &str) -> String {
  let html = render_markdown(markdown);
  let trimmed = html.trim_end();
  match trimmed
    .strip_prefix("<p>")
    .and_then(|rest| rest.strip_suffix("</p>"))
  {
    Some(inner) if !inner.contains("<p>") => inner.to_string(),
    _ => html,
  }
}

/// Extract the text of the first level-1 heading.
///
/// ```
/// use wxmd_layout::markdown::extract_title;
///
/// assert_eq!(
///   extract_title("Intro\n\n# Hello *there*\n"),
///   Some("Hello there".to_string())
/// );
/// assert_eq!(extract_title("no heading"), None);
/// ```
#[must_use]
pub fn extract_title(markdown: &str) -> Option<String> {
  let arena = Arena::new();
  let options = comrak_options();
  let root = parse_document(&arena, markdown, &options);

  for node in root.descendants() {
    if let NodeValue::Heading(NodeHeading { level: 1, .. }) =
      node.data.borrow().value
    {
      let text = extract_inline_text(node);
      let text = text.trim();
      if !text.is_empty() {
        return Some(text.to_string());
      }
    }
  }
  None
}

/// Concatenate the visible text of an inline subtree.
fn extract_inline_text<'a>(node: &'a AstNode<'a>) -> String {
  let mut text = String::new();
  for child in node.children() {
    match &child.data.borrow().value {
      NodeValue::Text(t) => text.push_str(t),
      NodeValue::Code(c) => text.push_str(&c.literal),
      NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
      NodeValue::Link(..)
      | NodeValue::Emph
      | NodeValue::Strong
      | NodeValue::Strikethrough => text.push_str(&extract_inline_text(child)),
      _ => {},
    }
  }
  text
}
