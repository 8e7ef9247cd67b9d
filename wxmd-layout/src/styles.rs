//! Style dictionary: inline CSS for every component family and variant.
//!
//! All values are computed per call from the active [`PrimaryColor`]. Nothing
//! here emits `rgba()`, gradients, shadows, flexbox or transitions; those are
//! approximated with solid colors and heavier borders.
use std::fmt;

use crate::{
  color::{PrimaryColor, lighten},
  components::{
    BadgeVariant,
    ButtonVariant,
    CardVariant,
    DividerStyle,
    InfoBoxKind,
  },
};

/// Ordered set of CSS declarations.
///
/// Setting a property that already exists replaces its value in place, so
/// variant maps can layer over a base map without reordering it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
  entries: Vec<(&'static str, String)>,
}

impl StyleMap {
  #[must_use]
  pub const fn new() -> Self {
    Self {
      entries: Vec::new(),
    }
  }

  /// Builder-style [`StyleMap::set`].
  #[must_use]
  pub fn with(
    mut self,
    property: &'static str,
    value: impl Into<String>,
  ) -> Self {
    self.set(property, value);
    self
  }

  pub fn set(&mut self, property: &'static str, value: impl Into<String>) {
    let value = value.into();
    if let Some(slot) = self.entries.iter_mut().find(|(p, _)| *p == property) {
      slot.1 = value;
    } else {
      self.entries.push((property, value));
    }
  }

  #[must_use]
  pub fn get(&self, property: &str) -> Option<&str> {
    self
      .entries
      .iter()
      .find(|(p, _)| *p == property)
      .map(|(_, v)| v.as_str())
  }

  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Overlay `other` on top of `self`.
  #[must_use]
  pub fn merged(mut self, other: &Self) -> Self {
    for (p, v) in &other.entries {
      self.set(p, v.clone());
    }
    self
  }
}

/// Serializes as `prop: value; prop: value`.
impl fmt::Display for StyleMap {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, (p, v)) in self.entries.iter().enumerate() {
      if i > 0 {
        f.write_str("; ")?;
      }
      write!(f, "{p}: {v}")?;
    }
    Ok(())
  }
}

/// Build a [`StyleMap`] from `"prop" => value` pairs.
macro_rules! style {
  ($($prop:literal => $value:expr),* $(,)?) => {
    $crate::styles::StyleMap::new()$(.with($prop, $value))*
  };
}

pub(crate) use style;

/// Card container.
#[must_use]
pub fn card(variant: CardVariant, primary: &PrimaryColor) -> StyleMap {
  let base = style! {
    "border-radius" => "12px",
    "padding" => "20px",
    "margin" => "16px 0",
    "box-sizing" => "border-box",
  };

  let (border, background) = match variant {
    CardVariant::Default => ("1px solid #e8e8e8".to_string(), "#ffffff".into()),
    CardVariant::Primary => (format!("2px solid {primary}"), "#fafafa".into()),
    CardVariant::Gradient => ("none".to_string(), primary.lighten(0.95)),
    CardVariant::Shadow => ("2px solid #e8e8e8".to_string(), "#ffffff".into()),
    CardVariant::Bordered => {
      ("3px double #d4d4d4".to_string(), "#fafafa".into())
    },
    CardVariant::Glass => ("1px solid #d4d4d4".to_string(), "#ffffff".into()),
  };

  base
    .with("border", border)
    .with("background-color", background)
}

/// Card header line.
#[must_use]
pub fn card_title(variant: CardVariant, primary: &PrimaryColor) -> StyleMap {
  let color = match variant {
    CardVariant::Primary | CardVariant::Gradient => primary.to_string(),
    CardVariant::Bordered => "#666".to_string(),
    CardVariant::Default | CardVariant::Shadow | CardVariant::Glass => {
      "#333".to_string()
    },
  };

  style! {
    "font-size" => "16px",
    "font-weight" => "bold",
    "margin-bottom" => "12px",
    "color" => color,
  }
}

/// Resolved palette for an info box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoBoxPalette {
  pub color:      String,
  pub background: String,
  pub icon:       &'static str,
}

#[must_use]
pub fn info_box_palette(
  kind: InfoBoxKind,
  primary: &PrimaryColor,
) -> InfoBoxPalette {
  let (color, background, icon) = match kind {
    InfoBoxKind::Tip => (primary.to_string(), primary.lighten(0.92), "💡"),
    InfoBoxKind::Warning => ("#fa8c16".into(), "#fff7e6".into(), "⚠️"),
    InfoBoxKind::Success => ("#52c41a".into(), "#f6ffed".into(), "✓"),
    InfoBoxKind::Error => ("#ff4d4f".into(), "#fff1f0".into(), "✕"),
    InfoBoxKind::Note => ("#8c8c8c".into(), "#fafafa".into(), "📝"),
    InfoBoxKind::Quote => ("#722ed1".into(), "#f9f0ff".into(), "\""),
  };
  InfoBoxPalette {
    color,
    background,
    icon,
  }
}

#[must_use]
pub fn info_box(palette: &InfoBoxPalette) -> StyleMap {
  style! {
    "border-left" => format!("4px solid {}", palette.color),
    "background-color" => palette.background.clone(),
    "padding" => "16px",
    "margin" => "16px 0",
    "border-radius" => "4px",
  }
}

#[must_use]
pub fn info_box_title(palette: &InfoBoxPalette) -> StyleMap {
  style! {
    "font-size" => "14px",
    "font-weight" => "bold",
    "margin-bottom" => "8px",
    "color" => palette.color.clone(),
  }
}

/// Leading icon line used when an info box has no title.
#[must_use]
pub fn info_box_icon(palette: &InfoBoxPalette) -> StyleMap {
  style! {
    "margin-bottom" => "8px",
    "font-weight" => "bold",
    "color" => palette.color.clone(),
  }
}

#[must_use]
pub fn callout(primary: &PrimaryColor) -> StyleMap {
  style! {
    "border" => format!("2px solid {primary}"),
    "background-color" => primary.lighten(0.95),
    "border-radius" => "8px",
    "padding" => "20px",
    "margin" => "20px 0",
  }
}

#[must_use]
pub fn callout_title(primary: &PrimaryColor) -> StyleMap {
  style! {
    "font-size" => "18px",
    "font-weight" => "bold",
    "color" => primary.to_string(),
    "margin-bottom" => "12px",
  }
}

/// Borderless full-width table used by list-like highlights.
#[must_use]
pub fn layout_table(margin: &str) -> StyleMap {
  style! {
    "width" => "100%",
    "margin" => margin,
    "border-collapse" => "collapse",
  }
}

/// Circular number badge of the numbered list.
#[must_use]
pub fn numbered_badge(primary: &PrimaryColor) -> StyleMap {
  style! {
    "display" => "inline-block",
    "width" => "28px",
    "height" => "28px",
    "line-height" => "28px",
    "text-align" => "center",
    "background-color" => primary.to_string(),
    "color" => "#fff",
    "border-radius" => "50%",
    "font-weight" => "bold",
    "font-size" => "14px",
  }
}

#[must_use]
pub fn numbered_badge_cell() -> StyleMap {
  style! {
    "width" => "36px",
    "padding" => "4px 8px 4px 0",
    "vertical-align" => "top",
  }
}

#[must_use]
pub fn numbered_text_cell() -> StyleMap {
  style! {
    "padding" => "4px 0",
    "vertical-align" => "top",
  }
}

/// Wrapper around process steps and timeline rows.
#[must_use]
pub fn highlight_wrapper() -> StyleMap {
  style! { "padding" => "8px 0" }
}

#[must_use]
pub fn process_step(primary: &PrimaryColor) -> StyleMap {
  style! {
    "border" => format!("1px solid {primary}"),
    "background-color" => primary.lighten(0.95),
    "border-radius" => "8px",
    "padding" => "16px",
    "margin" => "8px 0",
    "text-align" => "center",
  }
}

#[must_use]
pub fn process_badge(primary: &PrimaryColor) -> StyleMap {
  style! {
    "display" => "inline-block",
    "min-width" => "24px",
    "height" => "24px",
    "line-height" => "24px",
    "background-color" => primary.to_string(),
    "color" => "#fff",
    "border-radius" => "4px",
    "padding" => "0 8px",
    "margin-right" => "8px",
    "font-size" => "14px",
    "font-weight" => "bold",
  }
}

#[must_use]
pub fn process_text() -> StyleMap {
  style! { "font-size" => "15px" }
}

#[must_use]
pub fn process_arrow(primary: &PrimaryColor) -> StyleMap {
  style! {
    "text-align" => "center",
    "color" => primary.to_string(),
    "font-size" => "20px",
    "margin" => "4px 0",
  }
}

#[must_use]
pub fn timeline_dot_cell() -> StyleMap {
  style! {
    "width" => "32px",
    "padding" => "0",
    "vertical-align" => "top",
    "text-align" => "center",
  }
}

#[must_use]
pub fn timeline_dot(primary: &PrimaryColor) -> StyleMap {
  style! {
    "display" => "inline-block",
    "width" => "12px",
    "height" => "12px",
    "background-color" => primary.to_string(),
    "border-radius" => "50%",
  }
}

/// Vertical line from a dot down to the next row.
#[must_use]
pub fn timeline_connector() -> StyleMap {
  style! {
    "width" => "2px",
    "height" => "40px",
    "margin" => "4px auto 0",
    "background-color" => "#e8e8e8",
  }
}

#[must_use]
pub fn timeline_text_cell() -> StyleMap {
  style! {
    "padding" => "0 0 16px 8px",
    "vertical-align" => "top",
  }
}

#[must_use]
pub fn comparison_header(primary: &PrimaryColor) -> StyleMap {
  style! {
    "background-color" => primary.to_string(),
    "color" => "#fff",
    "padding" => "12px",
    "font-weight" => "bold",
  }
}

#[must_use]
pub fn comparison_cell() -> StyleMap {
  style! {
    "padding" => "12px",
    "border" => "1px solid #e8e8e8",
  }
}

/// Rule line for `style`, drawn in `color`.
#[must_use]
pub fn divider_line(style: DividerStyle, color: &str) -> StyleMap {
  let base = style! {
    "height" => "1px",
    "border" => "none",
  };

  match style {
    DividerStyle::Solid => base.with("background-color", "#e8e8e8"),
    DividerStyle::Dashed => base
      .with("border-top", format!("1px dashed {color}"))
      .with("background-color", "transparent"),
    DividerStyle::Dotted => base
      .with("border-top", format!("1px dotted {color}"))
      .with("background-color", "transparent"),
    DividerStyle::Gradient => {
      base.with("background-color", color).with("height", "2px")
    },
  }
}

#[must_use]
pub fn divider_text() -> StyleMap {
  style! {
    "padding" => "0 16px",
    "color" => "#666",
    "font-size" => "14px",
    "white-space" => "nowrap",
  }
}

#[must_use]
pub fn spacer(height: u32) -> StyleMap {
  style! { "height" => format!("{height}px") }
}

#[must_use]
pub fn badge(variant: BadgeVariant, color: &str) -> StyleMap {
  let base = style! {
    "display" => "inline-block",
    "padding" => "4px 12px",
    "border-radius" => "4px",
    "font-size" => "12px",
    "margin" => "4px",
  };

  match variant {
    BadgeVariant::Filled => {
      base.with("background-color", color).with("color", "#fff")
    },
    BadgeVariant::Outlined => base
      .with("border", format!("1px solid {color}"))
      .with("color", color)
      .with("background-color", "transparent"),
    BadgeVariant::Soft => base
      .with("background-color", lighten(color, 0.9))
      .with("color", color),
  }
}

#[must_use]
pub fn button(variant: ButtonVariant, primary: &PrimaryColor) -> StyleMap {
  let base = style! {
    "display" => "inline-block",
    "padding" => "10px 24px",
    "border-radius" => "6px",
    "font-size" => "15px",
    "font-weight" => "bold",
    "text-align" => "center",
    "cursor" => "pointer",
    "text-decoration" => "none",
    "margin" => "8px 4px",
  };

  match variant {
    ButtonVariant::Primary => base
      .with("background-color", primary.to_string())
      .with("color", "#fff"),
    ButtonVariant::Secondary => {
      base.with("background-color", "#f0f0f0").with("color", "#333")
    },
    ButtonVariant::Outline => base
      .with("border", format!("2px solid {primary}"))
      .with("color", primary.to_string())
      .with("background-color", "transparent"),
  }
}

#[must_use]
pub fn progress_track(height: u32) -> StyleMap {
  style! {
    "width" => "100%",
    "height" => format!("{height}px"),
    "background-color" => "#f0f0f0",
    "border-radius" => format!("{}px", f64::from(height) / 2.0),
    "margin" => "12px 0",
  }
}

#[must_use]
pub fn progress_fill(percent: u32, height: u32, color: &str) -> StyleMap {
  style! {
    "height" => "100%",
    "width" => format!("{percent}%"),
    "background-color" => color,
    "border-radius" => format!("{}px", f64::from(height) / 2.0),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_style_map_display_and_override() {
    let map = style! { "color" => "#333", "margin" => "0" }.with("color", "red");
    assert_eq!(map.to_string(), "color: red; margin: 0");
    assert_eq!(map.get("margin"), Some("0"));
  }

  #[test]
  fn test_card_variants_avoid_unsupported_css() {
    let primary = PrimaryColor::default();
    for variant in CardVariant::ALL {
      let css = card(variant, &primary).to_string();
      assert!(!css.contains("rgba"), "{css}");
      assert!(!css.contains("gradient("), "{css}");
      assert!(!css.contains("box-shadow"), "{css}");
    }
  }

  #[test]
  fn test_gradient_card_uses_lightened_primary() {
    let primary = PrimaryColor::default();
    let css = card(CardVariant::Gradient, &primary);
    assert_eq!(css.get("background-color"), Some("#f3f9ff"));
    assert_eq!(css.get("border"), Some("none"));
  }

  #[test]
  fn test_progress_radius_is_half_height() {
    assert_eq!(progress_track(8).get("border-radius"), Some("4px"));
    assert_eq!(progress_track(5).get("border-radius"), Some("2.5px"));
  }

  #[test]
  fn test_divider_styles() {
    assert_eq!(
      divider_line(DividerStyle::Dashed, "#123456").get("border-top"),
      Some("1px dashed #123456")
    );
    assert_eq!(
      divider_line(DividerStyle::Gradient, "#123456").get("height"),
      Some("2px")
    );
    assert_eq!(
      divider_line(DividerStyle::Solid, "#123456").get("background-color"),
      Some("#e8e8e8")
    );
  }
}
