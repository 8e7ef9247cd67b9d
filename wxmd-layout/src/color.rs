//! Platform-safe color derivation.
//!
//! The target platform rejects `rgba()`, gradients and shadows, so every
//! translucent or blended effect is approximated by mixing the accent color
//! toward white and emitting a solid `#rrggbb` value.
use std::fmt;

use log::warn;
use serde::Serialize;

/// Accent color used when none (or an invalid one) is supplied.
pub const DEFAULT_PRIMARY_COLOR: &str = "#1890ff";

/// Returns `true` for a well-formed `#rrggbb` color.
#[must_use]
pub fn is_hex6(color: &str) -> bool {
  color.len() == 7
    && color.starts_with('#')
    && color[1..].bytes().all(|b| b.is_ascii_hexdigit())
}

/// Returns `true` for `#rgb` or `#rrggbb`.
#[must_use]
pub fn is_hex_color(color: &str) -> bool {
  is_hex6(color)
    || (color.len() == 4
      && color.starts_with('#')
      && color[1..].bytes().all(|b| b.is_ascii_hexdigit()))
}

/// Blend `color` toward white by `amount`.
///
/// Each channel becomes `round(c + (255 - c) * amount)`. The amount is
/// clamped to `[0, 1]`, so `0.0` yields the input and `1.0` yields
/// `#ffffff`. Anything other than a six-digit hex color (shorthand hex,
/// `rgb(...)`, named colors) is returned unchanged.
///
/// # Examples
///
/// ```
/// use wxmd_layout::color::lighten;
///
/// assert_eq!(lighten("#000000", 0.5), "#808080");
/// assert_eq!(lighten("#1890ff", 1.0), "#ffffff");
/// assert_eq!(lighten("rgb(0, 0, 0)", 0.5), "rgb(0, 0, 0)");
/// ```
#[must_use]
pub fn lighten(color: &str, amount: f64) -> String {
  if !is_hex6(color) {
    return color.to_string();
  }

  let amount = if amount.is_nan() {
    0.0
  } else {
    amount.clamp(0.0, 1.0)
  };

  if amount <= 0.0 {
    return color.to_string();
  }

  let mut out = String::with_capacity(7);
  out.push('#');
  for i in 0..3 {
    let channel =
      u8::from_str_radix(&color[1 + i * 2..3 + i * 2], 16).unwrap_or_default();
    out.push_str(&format!("{:02x}", blend_channel(channel, amount)));
  }
  out
}

#[allow(
  clippy::cast_possible_truncation,
  clippy::cast_sign_loss,
  reason = "Value is clamped to the u8 range before the cast"
)]
fn blend_channel(channel: u8, amount: f64) -> u8 {
  let c = f64::from(channel);
  (c + (255.0 - c) * amount).round().clamp(0.0, 255.0) as u8
}

/// Legacy opacity helper: renders `color` at `opacity` over white.
#[must_use]
pub fn add_alpha(color: &str, opacity: f64) -> String {
  lighten(color, 1.0 - opacity)
}

/// A validated six-digit hex accent color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PrimaryColor(String);

impl PrimaryColor {
  /// Parse a `#rrggbb` color, normalizing it to lowercase.
  #[must_use]
  pub fn parse(color: &str) -> Option<Self> {
    let color = color.trim();
    is_hex6(color).then(|| Self(color.to_ascii_lowercase()))
  }

  /// Parse `color`, falling back to [`DEFAULT_PRIMARY_COLOR`] when it is
  /// absent or malformed.
  #[must_use]
  pub fn or_default(color: Option<&str>) -> Self {
    match color {
      Some(c) => {
        Self::parse(c).unwrap_or_else(|| {
          warn!(
            "Invalid primary color '{c}', falling back to \
             {DEFAULT_PRIMARY_COLOR}"
          );
          Self::default()
        })
      },
      None => Self::default(),
    }
  }

  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Shorthand for [`lighten`] on this color.
  #[must_use]
  pub fn lighten(&self, amount: f64) -> String {
    lighten(&self.0, amount)
  }
}

impl Default for PrimaryColor {
  fn default() -> Self {
    Self(DEFAULT_PRIMARY_COLOR.to_string())
  }
}

impl fmt::Display for PrimaryColor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl AsRef<str> for PrimaryColor {
  fn as_ref(&self) -> &str {
    &self.0
  }
}
