//! Global platform styling pass.
//!
//! The publishing platform discards stylesheets, so ordinary Markdown output
//! (headings, paragraphs, lists, code, tables) gets per-tag inline styles
//! here. Elements carrying the layout marker already have their final style
//! and are skipped; Markdown rendered inside them is still styled.
use kuchikikiki::NodeRef;
use log::debug;
use tendril::TendrilSink;

use crate::{
  color::PrimaryColor,
  html::LAYOUT_MARKER_ATTR,
  processor::process_safe,
  styles::{StyleMap, style},
};

const FONT_FAMILY: &str = "-apple-system, BlinkMacSystemFont, 'Segoe UI', \
                           Roboto, 'Helvetica Neue', Arial, sans-serif";

/// Base typography for the styling pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformStyle {
  pub font_size:     u32,
  pub line_height:   f32,
  pub primary_color: PrimaryColor,
}

impl Default for PlatformStyle {
  fn default() -> Self {
    Self {
      font_size:     16,
      line_height:   1.75,
      primary_color: PrimaryColor::default(),
    }
  }
}

impl PlatformStyle {
  /// Style of the wrapping `<section>`.
  #[must_use]
  pub fn container(&self) -> StyleMap {
    style! {
      "font-family" => FONT_FAMILY,
      "font-size" => format!("{}px", self.font_size),
      "line-height" => self.line_height.to_string(),
      "color" => "#333",
    }
  }

  /// Inline style for an unmarked element, if its tag is styled at all.
  #[must_use]
  pub fn for_tag(&self, tag: &str, inside_pre: bool) -> Option<StyleMap> {
    let fs = self.font_size;
    let primary = &self.primary_color;

    let heading = |size: u32, margin: &str| {
      style! {
        "font-size" => format!("{size}px"),
        "font-weight" => "bold",
        "margin" => margin,
        "color" => "#333",
      }
    };

    let map = match tag {
      "h1" => heading(fs + 8, "1.5em 0 0.5em"),
      "h2" => heading(fs + 4, "1.3em 0 0.5em")
        .with("border-bottom", "1px solid #eee")
        .with("padding-bottom", "0.3em"),
      "h3" => heading(fs + 2, "1.2em 0 0.5em"),
      "h4" | "h5" | "h6" => heading(fs + 1, "1em 0 0.5em"),
      "p" => style! { "margin" => "1em 0" },
      "a" => style! {
        "color" => primary.to_string(),
        "text-decoration" => "none",
        "word-break" => "break-all",
      },
      "blockquote" => style! {
        "border-left" => format!("4px solid {primary}"),
        "margin" => "1em 0",
        "padding" => "0.5em 1em",
        "background-color" => "#f9f9f9",
        "color" => "#666",
      },
      "img" => style! {
        "max-width" => "100%",
        "height" => "auto",
        "display" => "block",
        "margin" => "1em auto",
      },
      "code" if inside_pre => style! {
        "background-color" => "#f8f8f8",
        "padding" => "0",
        "font-family" => "monospace",
        "font-size" => "14px",
        "line-height" => "1.5",
      },
      "code" => style! {
        "background-color" => "#f3f3f3",
        "padding" => "0.2em 0.4em",
        "border-radius" => "3px",
        "font-size" => "90%",
        "font-family" => "monospace",
      },
      "pre" => style! {
        "background-color" => "#f8f8f8",
        "padding" => "1em",
        "overflow-x" => "auto",
        "font-size" => "14px",
        "line-height" => "1.5",
        "margin" => "1em 0",
      },
      "ul" | "ol" => style! { "margin" => "1em 0", "padding-left" => "2em" },
      "li" => style! { "margin" => "0.5em 0" },
      "table" => style! {
        "border-collapse" => "collapse",
        "width" => "100%",
        "margin" => "1em 0",
      },
      "th" => style! {
        "border" => "1px solid #ddd",
        "padding" => "8px",
        "font-weight" => "bold",
        "background-color" => "#f9f9f9",
      },
      "td" => style! { "border" => "1px solid #ddd", "padding" => "8px" },
      "strong" | "b" => style! { "font-weight" => "bold" },
      "em" | "i" => style! { "font-style" => "italic" },
      "u" => style! { "text-decoration" => "underline" },
      "hr" => style! {
        "border" => "none",
        "border-top" => "1px solid #eee",
        "margin" => "2em 0",
      },
      _ => return None,
    };
    Some(map)
  }
}

/// Apply per-tag inline styles and wrap the fragment in a styled
/// `<section>`.
#[must_use]
pub fn apply_platform_styles(html: &str, style: &PlatformStyle) -> String {
  let styled = process_safe(html, |h| style_fragment(h, style), html);
  format!(
    "<section style=\"{}\">{styled}</section>",
    html_escape::encode_double_quoted_attribute(&style.container().to_string())
  )
}

fn style_fragment(html: &str, style: &PlatformStyle) -> String {
  let document = kuchikikiki::parse_html().one(html);
  let Ok(body) = document.select_first("body") else {
    return html.to_string();
  };
  let body = body.as_node();

  let mut styled = 0_usize;
  for node in body.descendants() {
    let Some(element) = node.as_element() else {
      continue;
    };
    if element.attributes.borrow().contains(LAYOUT_MARKER_ATTR) {
      continue;
    }

    let tag: &str = &element.name.local;
    if let Some(css) = style.for_tag(tag, parent_is_pre(&node)) {
      element
        .attributes
        .borrow_mut()
        .insert("style", css.to_string());
      styled += 1;
    }
  }
  debug!("Applied platform styles to {styled} elements");

  let mut out = Vec::new();
  for child in body.children() {
    if child.serialize(&mut out).is_err() {
      debug!("Failed to serialize styled node");
    }
  }
  String::from_utf8(out).unwrap_or_default()
}

fn parent_is_pre(node: &NodeRef) -> bool {
  node
    .parent()
    .and_then(|p| p.as_element().map(|e| &*e.name.local == "pre"))
    .unwrap_or(false)
}
