//! Allowlist HTML sanitizer.
//!
//! The document is parsed with html5ever (through kuchikikiki), unknown
//! elements are unwrapped, dangerous elements are removed along with their
//! content, and every attribute outside the allowlist is stripped. This is a
//! best-effort filter for the publishing platform, not a security boundary.
use kuchikikiki::NodeRef;
use log::debug;
use markup5ever::ns;
use tendril::TendrilSink;

use crate::{html::LAYOUT_MARKER_ATTR, processor::process_safe};

/// Elements kept as-is.
pub const ALLOWED_TAGS: &[&str] = &[
  "p", "br", "span", "div", "strong", "b", "em", "i", "u", "del", "s", "h1",
  "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li", "blockquote", "a", "img",
  "code", "pre", "table", "thead", "tbody", "tr", "th", "td", "section", "hr",
  "input", "sup",
];

/// Attributes kept on allowed elements, in addition to the layout marker.
pub const ALLOWED_ATTRS: &[&str] = &[
  "style", "href", "src", "alt", "title", "target", "rowspan", "colspan",
  "type", "checked", "disabled",
];

/// Elements removed together with everything inside them.
const DROPPED_TAGS: &[&str] = &[
  "script", "style", "iframe", "object", "embed", "template", "noscript",
  "head", "title", "textarea", "select", "svg", "math",
];

const DANGEROUS_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

/// Sanitize an HTML fragment, returning the cleaned fragment.
///
/// If the cleaning pass fails unexpectedly, the input is returned fully
/// escaped as text rather than passed through.
#[must_use]
pub fn sanitize(html: &str) -> String {
  let escaped = html_escape::encode_text(html).into_owned();
  process_safe(html, sanitize_fragment, &escaped)
}

fn sanitize_fragment(html: &str) -> String {
  let document = kuchikikiki::parse_html().one(html);
  let Ok(body) = document.select_first("body") else {
    return String::new();
  };
  let body = body.as_node();

  clean_children(body);

  let mut out = Vec::new();
  for child in body.children() {
    if child.serialize(&mut out).is_err() {
      debug!("Failed to serialize sanitized node");
    }
  }
  String::from_utf8(out).unwrap_or_default()
}

fn clean_children(parent: &NodeRef) {
  let children: Vec<NodeRef> = parent.children().collect();

  for child in children {
    if child.as_text().is_some() {
      continue;
    }

    let Some(element) = child.as_element() else {
      // Comments, doctypes and processing instructions.
      child.detach();
      continue;
    };

    let tag = element.name.local.to_string();

    if DROPPED_TAGS.contains(&tag.as_str()) {
      debug!("Dropping <{tag}> and its content");
      child.detach();
      continue;
    }

    if !ALLOWED_TAGS.contains(&tag.as_str())
      || (tag == "input" && !is_task_checkbox(&child))
    {
      clean_children(&child);
      unwrap_element(&child);
      continue;
    }

    clean_attributes(&child, &tag);
    clean_children(&child);
  }
}

/// A disabled checkbox, as emitted for GFM task list items.
fn is_task_checkbox(node: &NodeRef) -> bool {
  node.as_element().is_some_and(|e| {
    let attrs = e.attributes.borrow();
    attrs.contains("disabled")
      && attrs
        .get("type")
        .is_some_and(|t| t.eq_ignore_ascii_case("checkbox"))
  })
}

/// Replace `node` with its children.
fn unwrap_element(node: &NodeRef) {
  let children: Vec<NodeRef> = node.children().collect();
  for grandchild in children {
    node.insert_before(grandchild);
  }
  node.detach();
}

fn clean_attributes(node: &NodeRef, tag: &str) {
  let Some(element) = node.as_element() else {
    return;
  };

  element.attributes.borrow_mut().map.retain(|name, attr| {
    if name.ns != ns!() {
      return false;
    }
    let local: &str = &name.local;
    if local == LAYOUT_MARKER_ATTR {
      return true;
    }
    if !ALLOWED_ATTRS.contains(&local) {
      return false;
    }
    match local {
      "href" => is_safe_url(&attr.value, false),
      "src" => is_safe_url(&attr.value, tag == "img"),
      _ => true,
    }
  });
}

/// Reject script-bearing URL schemes. `data:image/` is tolerated for image
/// sources.
fn is_safe_url(url: &str, allow_data_image: bool) -> bool {
  let normalized: String = url
    .chars()
    .filter(|c| !c.is_whitespace() && !c.is_control())
    .collect::<String>()
    .to_ascii_lowercase();

  if allow_data_image && normalized.starts_with("data:image/") {
    return true;
  }

  !DANGEROUS_SCHEMES
    .iter()
    .any(|scheme| normalized.starts_with(scheme))
}
