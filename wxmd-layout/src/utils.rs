use std::sync::LazyLock;

use log::error;
use regex::Regex;

/// Error type for utility operations.
#[derive(Debug, thiserror::Error)]
pub enum UtilError {
  #[error("Regex compilation failed: {0}")]
  RegexError(#[from] regex::Error),
}

/// Result type for utility operations.
pub type UtilResult<T> = Result<T, UtilError>;

/// Compile `pattern`, logging and substituting [`never_matching_regex`] on
/// failure. Intended for `LazyLock` statics.
#[must_use]
pub fn regex_or_never(name: &str, pattern: &str) -> Regex {
  compile(pattern).unwrap_or_else(|e| {
    error!("Failed to compile {name} regex: {e}");
    never_matching_regex()
  })
}

/// Compile a regex, surfacing the error as a [`UtilError`].
///
/// # Errors
///
/// Returns an error if `pattern` is not a valid regular expression.
pub fn compile(pattern: &str) -> UtilResult<Regex> {
  Ok(Regex::new(pattern)?)
}

/// Create a regex that never matches anything.
///
/// Used as a fallback when a static pattern fails to compile, so callers
/// degrade to "no match" instead of panicking.
#[must_use]
#[allow(
  clippy::expect_used,
  reason = "Both patterns are constant and valid"
)]
pub fn never_matching_regex() -> Regex {
  Regex::new(r"[^\s\S]")
    .unwrap_or_else(|_| Regex::new(r"^\b$").expect("trivial pattern compiles"))
}

/// Parse a leading decimal integer the way lenient form inputs do: optional
/// surrounding whitespace, an optional sign, then digits; anything after the
/// digits is ignored. Returns `None` when there are no digits.
///
/// ```
/// use wxmd_layout::utils::parse_int_prefix;
///
/// assert_eq!(parse_int_prefix("75%"), Some(75));
/// assert_eq!(parse_int_prefix(" -3px"), Some(-3));
/// assert_eq!(parse_int_prefix("px"), None);
/// ```
#[must_use]
pub fn parse_int_prefix(input: &str) -> Option<i64> {
  let s = input.trim_start();
  let (negative, digits) = match s.as_bytes().first() {
    Some(b'-') => (true, &s[1..]),
    Some(b'+') => (false, &s[1..]),
    _ => (false, s),
  };
  let len = digits.bytes().take_while(u8::is_ascii_digit).count();
  if len == 0 {
    return None;
  }
  let value = digits[..len]
    .bytes()
    .fold(0_i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d - b'0')));
  Some(if negative { -value } else { value })
}

/// Parse an integer parameter, falling back to `default` when it is absent
/// or unparsable and clamping the result into `min..=max`.
#[must_use]
pub fn clamped_int(value: Option<&str>, default: u32, min: u32, max: u32) -> u32 {
  let parsed = value.and_then(parse_int_prefix).unwrap_or(i64::from(default));
  let clamped = parsed.clamp(i64::from(min), i64::from(max));
  u32::try_from(clamped).unwrap_or(default)
}

static BULLET_RE: LazyLock<Regex> =
  LazyLock::new(|| regex_or_never("BULLET_RE", r"^[-*]\s+"));

/// If `line` starts with a `-` or `*` bullet marker, return the rest.
#[must_use]
pub fn strip_bullet(line: &str) -> Option<&str> {
  BULLET_RE.find(line).map(|m| &line[m.end()..])
}

/// Remove a bullet marker if present.
#[must_use]
pub fn without_bullet(line: &str) -> &str {
  strip_bullet(line).unwrap_or(line)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_int_prefix() {
    assert_eq!(parse_int_prefix("42"), Some(42));
    assert_eq!(parse_int_prefix("  12.9"), Some(12));
    assert_eq!(parse_int_prefix("+7"), Some(7));
    assert_eq!(parse_int_prefix("-"), None);
    assert_eq!(parse_int_prefix(""), None);
    assert_eq!(parse_int_prefix("abc"), None);
  }

  #[test]
  fn test_clamped_int() {
    assert_eq!(clamped_int(Some("150"), 50, 0, 100), 100);
    assert_eq!(clamped_int(Some("-5"), 50, 0, 100), 0);
    assert_eq!(clamped_int(Some("oops"), 50, 0, 100), 50);
    assert_eq!(clamped_int(None, 20, 0, 500), 20);
  }

  #[test]
  fn test_strip_bullet() {
    assert_eq!(strip_bullet("- one"), Some("one"));
    assert_eq!(strip_bullet("*  two"), Some("two"));
    assert_eq!(strip_bullet("-no space"), None);
    assert_eq!(strip_bullet("plain"), None);
    assert_eq!(without_bullet("plain"), "plain");
  }

  #[test]
  fn test_never_matching_regex() {
    let re = never_matching_regex();
    assert!(!re.is_match(""));
    assert!(!re.is_match("anything"));
  }

  #[test]
  fn test_compile_reports_errors() {
    assert!(compile("(").is_err());
    assert!(compile("a+").is_ok());
  }
}
