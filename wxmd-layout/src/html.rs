//! Minimal HTML node tree for generated component markup.
//!
//! Components build a tree of [`Element`]s and serialize it once. Every
//! element created through [`Element::new`] carries the layout marker
//! attribute, which tells later styling passes to leave it alone.
use std::fmt::{self, Write};

use crate::styles::StyleMap;

/// Attribute that marks an element as generated layout markup.
pub const LAYOUT_MARKER_ATTR: &str = "data-wechat-layout";

/// A node in a generated fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
  Element(Element),
  /// Text, escaped on output.
  Text(String),
  /// Pre-rendered HTML inserted verbatim, e.g. the output of the Markdown
  /// renderer.
  Raw(String),
}

impl From<Element> for Node {
  fn from(element: Element) -> Self {
    Self::Element(element)
  }
}

/// An HTML element with inline style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
  tag:      &'static str,
  attrs:    Vec<(&'static str, String)>,
  style:    StyleMap,
  children: Vec<Node>,
}

impl Element {
  /// A new element carrying the layout marker.
  #[must_use]
  pub const fn new(tag: &'static str) -> Self {
    Self {
      tag,
      attrs: Vec::new(),
      style: StyleMap::new(),
      children: Vec::new(),
    }
  }

  #[must_use]
  pub fn style(mut self, style: StyleMap) -> Self {
    self.style = style;
    self
  }

  #[must_use]
  pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
    self.attrs.push((name, value.into()));
    self
  }

  #[must_use]
  pub fn child(mut self, node: impl Into<Node>) -> Self {
    self.children.push(node.into());
    self
  }

  #[must_use]
  pub fn children_from<I>(mut self, nodes: I) -> Self
  where
    I: IntoIterator,
    I::Item: Into<Node>,
  {
    self.children.extend(nodes.into_iter().map(Into::into));
    self
  }

  #[must_use]
  pub fn text(self, text: impl Into<String>) -> Self {
    self.child(Node::Text(text.into()))
  }

  #[must_use]
  pub fn raw(self, html: impl Into<String>) -> Self {
    self.child(Node::Raw(html.into()))
  }

  /// Serialize this element and its subtree.
  #[must_use]
  pub fn to_html(&self) -> String {
    let mut out = String::new();
    self.write_to(&mut out);
    out
  }

  fn write_to(&self, out: &mut String) {
    out.push('<');
    out.push_str(self.tag);
    let _ = write!(out, " {LAYOUT_MARKER_ATTR}=\"true\"");
    for (name, value) in &self.attrs {
      let _ = write!(
        out,
        " {name}=\"{}\"",
        html_escape::encode_double_quoted_attribute(value)
      );
    }
    if !self.style.is_empty() {
      let _ = write!(
        out,
        " style=\"{}\"",
        html_escape::encode_double_quoted_attribute(&self.style.to_string())
      );
    }
    out.push('>');

    for child in &self.children {
      match child {
        Node::Element(e) => e.write_to(out),
        Node::Text(t) => out.push_str(&html_escape::encode_text(t)),
        Node::Raw(html) => out.push_str(html),
      }
    }

    let _ = write!(out, "</{}>", self.tag);
  }
}

impl fmt::Display for Element {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.to_html())
  }
}
