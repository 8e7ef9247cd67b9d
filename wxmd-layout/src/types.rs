use std::{collections::BTreeMap, ops::Range};

use serde::Serialize;

/// Parameters captured from a block's opening line or divider token.
pub type Params = BTreeMap<String, String>;

/// Which scanner produced a [`ParsedBlock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
  Component,
  Divider,
}

/// One custom-syntax span located in a source document.
///
/// `start..end` is a half-open byte range into the original text. Blocks
/// produced by one scan never overlap each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedBlock {
  pub kind:       BlockKind,
  /// Lower-cased type tag for components, or the normalized style for
  /// dividers.
  #[serde(rename = "type")]
  pub block_type: String,
  pub params:     Params,
  /// Trimmed inner text. Always empty for dividers.
  pub content:    String,
  pub start:      usize,
  pub end:        usize,
}

impl ParsedBlock {
  #[must_use]
  pub const fn span(&self) -> Range<usize> {
    self.start..self.end
  }

  /// Look up a parameter, treating empty values as absent.
  #[must_use]
  pub fn param(&self, key: &str) -> Option<&str> {
    self
      .params
      .get(key)
      .map(String::as_str)
      .filter(|v| !v.is_empty())
  }

  #[must_use]
  pub const fn is_divider(&self) -> bool {
    matches!(self.kind, BlockKind::Divider)
  }
}

/// Result of rendering a whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LayoutResult {
  /// Sanitized, and optionally platform-styled, HTML.
  pub html:       String,
  /// Text of the first level-1 heading, if any.
  pub title:      Option<String>,
  /// Number of component blocks found.
  pub components: usize,
  /// Number of divider tokens found.
  pub dividers:   usize,
}
