//! Block scanner for component fences and divider tokens.
//!
//! Both scans are single left-to-right passes over the input with no
//! backtracking. Component blocks are found first; divider tokens are then
//! searched only in the gaps between component spans, so the merged result
//! never contains overlapping ranges.
use std::{ops::Range, sync::LazyLock};

use log::trace;
use regex::Regex;

use crate::{
  color::is_hex_color,
  components::DividerStyle,
  types::{BlockKind, ParsedBlock, Params},
  utils::regex_or_never,
};

const FENCE: &str = ":::";
const RULE: &str = "---";

static PARAM_RE: LazyLock<Regex> = LazyLock::new(|| {
  regex_or_never("PARAM_RE", r#"([A-Za-z0-9_]+)="([^"]*)""#)
});

static DIVIDER_PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
  regex_or_never(
    "DIVIDER_PAIR_RE",
    r#"([A-Za-z0-9_]+)=(?:"([^"]*)"|([^\s"]+))"#,
  )
});

const fn is_word_byte(b: u8) -> bool {
  b.is_ascii_alphanumeric() || b == b'_'
}

/// Scan `text` for every component block and divider token, sorted by start
/// offset.
///
/// ```
/// use wxmd_layout::scanner::scan;
///
/// let blocks = scan(":::tip\nHello\n:::\n---style=dashed---\n");
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[0].block_type, "tip");
/// assert_eq!(blocks[1].block_type, "dashed");
/// ```
#[must_use]
pub fn scan(text: &str) -> Vec<ParsedBlock> {
  let components = scan_components(text);
  let spans: Vec<Range<usize>> =
    components.iter().map(ParsedBlock::span).collect();
  let dividers = scan_dividers(text, &spans);

  let mut blocks = components;
  blocks.extend(dividers);
  blocks.sort_by_key(|b| b.start);

  trace!("Scanned {} layout blocks", blocks.len());
  blocks
}

/// Find all `:::type params\ncontent\n:::` blocks.
#[must_use]
pub fn scan_components(text: &str) -> Vec<ParsedBlock> {
  let mut blocks = Vec::new();
  let mut pos = 0;

  while let Some(rel) = text[pos..].find(FENCE) {
    let open = pos + rel;
    if let Some(block) = component_at(text, open) {
      pos = block.end;
      blocks.push(block);
    } else {
      pos = open + 1;
    }
  }

  blocks
}

/// Try to read a component block whose opening fence starts at `open`.
fn component_at(text: &str, open: usize) -> Option<ParsedBlock> {
  let bytes = text.as_bytes();
  let type_start = open + FENCE.len();
  let type_end = type_start
    + bytes[type_start..]
      .iter()
      .take_while(|b| is_word_byte(**b))
      .count();
  if type_end == type_start {
    return None;
  }

  let (params_src, content_start) = match bytes.get(type_end) {
    Some(b'\n') => ("", type_end + 1),
    Some(b'\r') if bytes.get(type_end + 1) == Some(&b'\n') => {
      ("", type_end + 2)
    },
    Some(b' ' | b'\t') => {
      let line_end = text[type_end..].find('\n')? + type_end;
      (&text[type_end..line_end], line_end + 1)
    },
    _ => return None,
  };

  let close = text[content_start..].find(FENCE)? + content_start;

  Some(ParsedBlock {
    kind:       BlockKind::Component,
    block_type: text[type_start..type_end].to_ascii_lowercase(),
    params:     parse_params(params_src),
    content:    text[content_start..close].trim().to_string(),
    start:      open,
    end:        close + FENCE.len(),
  })
}

/// Parse `key="value"` pairs. Later duplicates win; anything that is not a
/// pair is ignored.
#[must_use]
pub fn parse_params(src: &str) -> Params {
  PARAM_RE
    .captures_iter(src)
    .map(|caps| (caps[1].to_string(), caps[2].to_string()))
    .collect()
}

/// Find divider tokens outside of the `exclude` ranges.
///
/// `exclude` must be sorted and non-overlapping, as produced by
/// [`scan_components`].
#[must_use]
pub fn scan_dividers(text: &str, exclude: &[Range<usize>]) -> Vec<ParsedBlock> {
  let mut blocks = Vec::new();
  let mut gap_start = 0;

  for span in exclude
    .iter()
    .cloned()
    .chain(std::iter::once(text.len()..text.len()))
  {
    if span.start > gap_start {
      scan_dividers_in(text, gap_start..span.start, &mut blocks);
    }
    gap_start = gap_start.max(span.end);
  }

  blocks
}

fn scan_dividers_in(
  text: &str,
  gap: Range<usize>,
  out: &mut Vec<ParsedBlock>,
) {
  let mut pos = gap.start;

  while let Some(rel) = text[pos..gap.end].find(RULE) {
    let open = pos + rel;
    if let Some(block) = divider_at(text, open, gap.end) {
      pos = block.end;
      out.push(block);
    } else {
      pos = open + 1;
    }
  }
}

/// Try to read `---key=value ...---` starting at `open`, without crossing
/// `limit` or a line break.
fn divider_at(text: &str, open: usize, limit: usize) -> Option<ParsedBlock> {
  let bytes = text.as_bytes();
  let token_start = open + RULE.len();

  // The token must begin with `identifier=`.
  let key_len = bytes[token_start..limit]
    .iter()
    .take_while(|b| is_word_byte(**b))
    .count();
  if key_len == 0 || bytes.get(token_start + key_len) != Some(&b'=') {
    return None;
  }

  let mut in_quotes = false;
  let mut i = token_start + key_len + 1;
  let token_end = loop {
    if i >= limit {
      return None;
    }
    match bytes[i] {
      b'\n' | b'\r' => return None,
      b'"' => in_quotes = !in_quotes,
      b'-' if !in_quotes && text[i..limit].starts_with(RULE) => break i,
      _ => {},
    }
    i += 1;
  };

  let params = parse_divider_token(&text[token_start..token_end]);
  let style = params
    .get("style")
    .map_or_else(|| DividerStyle::Solid.name(), String::as_str)
    .to_string();

  Some(ParsedBlock {
    kind: BlockKind::Divider,
    block_type: style,
    params,
    content: String::new(),
    start: open,
    end: token_end + RULE.len(),
  })
}

/// Parse a divider token into normalized params.
///
/// `style` is always present and always a known style. `text` is kept only
/// when it was quoted, and `color` only when it is a hex color.
fn parse_divider_token(token: &str) -> Params {
  let mut params = Params::new();
  let mut style = None;

  for caps in DIVIDER_PAIR_RE.captures_iter(token) {
    let key = &caps[1];
    let quoted = caps.get(2).map(|m| m.as_str());
    let bare = caps.get(3).map(|m| m.as_str());

    match key {
      "style" => style = quoted.or(bare),
      "text" => {
        if let Some(text) = quoted {
          params.insert("text".to_string(), text.to_string());
        }
      },
      "color" => {
        if let Some(color) = quoted.or(bare).filter(|c| is_hex_color(c)) {
          params.insert("color".to_string(), color.to_string());
        }
      },
      _ => {
        if let Some(value) = quoted.or(bare) {
          params.insert(key.to_string(), value.to_string());
        }
      },
    }
  }

  params.insert(
    "style".to_string(),
    DividerStyle::parse(style).name().to_string(),
  );
  params
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_bare_component() {
    let text = ":::tip\nBe nice\n:::";
    let blocks = scan_components(text);
    assert_eq!(blocks.len(), 1);
    let b = &blocks[0];
    assert_eq!(b.block_type, "tip");
    assert_eq!(b.content, "Be nice");
    assert!(b.params.is_empty());
    assert_eq!((b.start, b.end), (0, text.len()));
  }

  #[test]
  fn test_component_params_and_case() {
    let blocks =
      scan_components(":::CARD variant=\"primary\" title=\"\" x=1\nBody\n:::");
    let b = &blocks[0];
    assert_eq!(b.block_type, "card");
    assert_eq!(b.params.get("variant").map(String::as_str), Some("primary"));
    assert_eq!(b.params.get("title").map(String::as_str), Some(""));
    assert!(!b.params.contains_key("x"));
    assert_eq!(b.param("title"), None);
  }

  #[test]
  fn test_first_content_line_is_not_swallowed() {
    let blocks = scan_components(":::tip\n**Important**\n:::");
    assert_eq!(blocks[0].content, "**Important**");
  }

  #[test]
  fn test_empty_content() {
    let blocks = scan_components(":::spacer height=\"30\"\n:::");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].content, "");
    assert_eq!(blocks[0].param("height"), Some("30"));
  }

  #[test]
  fn test_unterminated_component_is_ignored() {
    assert!(scan_components(":::tip\nnever closed").is_empty());
    assert!(scan_components(":::\ncontent\n:::").is_empty());
    assert!(scan_components(":::tip no newline :::").is_empty());
  }

  #[test]
  fn test_consecutive_components() {
    let text = ":::tip\na\n:::\n\n:::note\nb\n:::";
    let blocks = scan_components(text);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[1].block_type, "note");
    assert!(blocks[0].end <= blocks[1].start);
  }

  #[test]
  fn test_crlf_opening_line() {
    let blocks = scan_components(":::note\r\nWindows\r\n:::");
    assert_eq!(blocks[0].content, "Windows");
  }

  #[test]
  fn test_divider_variants() {
    let text = "---style=dashed text=\"Section\"---";
    let blocks = scan_dividers(text, &[]);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].block_type, "dashed");
    assert_eq!(blocks[0].param("text"), Some("Section"));
    assert_eq!(blocks[0].end, text.len());

    let blocks = scan_dividers("---style=dotted color=#ff0000---", &[]);
    assert_eq!(blocks[0].param("color"), Some("#ff0000"));
  }

  #[test]
  fn test_divider_fallbacks() {
    let blocks = scan_dividers("---style=wavy color=red text=plain---", &[]);
    assert_eq!(blocks[0].block_type, "solid");
    assert_eq!(blocks[0].param("color"), None);
    assert_eq!(blocks[0].param("text"), None);

    let blocks = scan_dividers("---text=\"Only text\"---", &[]);
    assert_eq!(blocks[0].block_type, "solid");
  }

  #[test]
  fn test_quoted_dashes_do_not_close_divider() {
    let blocks = scan_dividers("---style=solid text=\"a --- b\"---", &[]);
    assert_eq!(blocks[0].param("text"), Some("a --- b"));
  }

  #[test]
  fn test_thematic_breaks_are_not_dividers() {
    assert!(scan_dividers("---\n\nText\n\n----\n", &[]).is_empty());
    assert!(scan_dividers("---\ntitle: x\n---\n", &[]).is_empty());
    assert!(scan_dividers("---style=solid\n---", &[]).is_empty());
  }

  #[test]
  fn test_dividers_inside_components_are_skipped() {
    let text = ":::card\n---style=dashed---\n:::\n---style=dotted---";
    let blocks = scan(text);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].kind, BlockKind::Component);
    assert_eq!(blocks[0].content, "---style=dashed---");
    assert_eq!(blocks[1].block_type, "dotted");
  }

  #[test]
  fn test_scan_sorts_by_start() {
    let text = "---style=gradient---\n:::tip\nx\n:::\n---style=dashed---";
    let starts: Vec<usize> = scan(text).iter().map(|b| b.start).collect();
    let mut sorted = starts.clone();
    sorted.sort_unstable();
    assert_eq!(starts, sorted);
    assert_eq!(starts.len(), 3);
  }

  #[test]
  fn test_unicode_offsets_are_bytes() {
    let text = "你好\n:::tip\n世界\n:::";
    let blocks = scan(text);
    assert_eq!(blocks[0].start, "你好\n".len());
    assert_eq!(&text[blocks[0].span()], ":::tip\n世界\n:::");
  }
}
